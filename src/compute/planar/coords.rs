//! Azimuthal projections: `x`, `y`, `rho`, `rho2`, `phi`
//!
//! These are the conversion basis of the whole engine: the generated
//! kernels of every other operation re-express their operands through
//! `x`/`y` (and the longitudinal/temporal analogues) before calling a
//! Cartesian native.

use crate::{
    backend::MathLib,
    compute::AzProjection,
    coords::AzimuthalKind,
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

pub(crate) fn x_xy(_lib: &dyn MathLib, x: Float, _y: Float) -> Float {
    x
}

pub(crate) fn x_rhophi(lib: &dyn MathLib, rho: Float, phi: Float) -> Float {
    rho * lib.cos(phi)
}

pub(crate) fn y_xy(_lib: &dyn MathLib, _x: Float, y: Float) -> Float {
    y
}

pub(crate) fn y_rhophi(lib: &dyn MathLib, rho: Float, phi: Float) -> Float {
    rho * lib.sin(phi)
}

pub(crate) fn rho_xy(lib: &dyn MathLib, x: Float, y: Float) -> Float {
    lib.sqrt(rho2_xy(lib, x, y))
}

pub(crate) fn rho_rhophi(_lib: &dyn MathLib, rho: Float, _phi: Float) -> Float {
    rho
}

pub(crate) fn rho2_xy(_lib: &dyn MathLib, x: Float, y: Float) -> Float {
    x.powi(2) + y.powi(2)
}

pub(crate) fn rho2_rhophi(_lib: &dyn MathLib, rho: Float, _phi: Float) -> Float {
    rho.powi(2)
}

pub(crate) fn phi_xy(lib: &dyn MathLib, x: Float, y: Float) -> Float {
    lib.arctan2(y, x)
}

pub(crate) fn phi_rhophi(_lib: &dyn MathLib, _rho: Float, phi: Float) -> Float {
    phi
}

/// Table of one azimuthal projection
type Projection = DispatchTable<AzimuthalKind, AzProjection, ()>;

fn projection(operation: &'static str, xy: AzProjection, rhophi: AzProjection) -> Projection {
    let mut table = DispatchTable::new(operation);
    table.register(AzimuthalKind::Xy, xy, ());
    table.register(AzimuthalKind::RhoPhi, rhophi, ());
    table.built()
}

pub(crate) static X: Lazy<Projection> = Lazy::new(|| projection("planar.x", x_xy, x_rhophi));
pub(crate) static Y: Lazy<Projection> = Lazy::new(|| projection("planar.y", y_xy, y_rhophi));
pub(crate) static RHO: Lazy<Projection> =
    Lazy::new(|| projection("planar.rho", rho_xy, rho_rhophi));
pub(crate) static RHO2: Lazy<Projection> =
    Lazy::new(|| projection("planar.rho2", rho2_xy, rho2_rhophi));
pub(crate) static PHI: Lazy<Projection> =
    Lazy::new(|| projection("planar.phi", phi_xy, phi_rhophi));

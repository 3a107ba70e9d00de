//! Longitudinal projections: `z`, `theta`, `eta`, `costheta`,
//! `cottheta`, `mag`, `mag2`
//!
//! Degenerate inputs follow fixed substitution policies instead of
//! raising: `eta` of a vector with zero transverse momentum saturates to
//! signed infinity by the sign of `z` (the NaN at the exact origin maps
//! to 0), `costheta` of the zero vector is 1, and `cottheta` at zero
//! transverse momentum is infinite.

use crate::{
    backend::MathLib,
    compute::SpProjection,
    coords::{AzimuthalKind, LongitudinalKind, SpatialKind, SPATIAL_KINDS},
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

use super::super::planar::coords::rho_xy;

// ### z ###

pub(crate) fn z_xy_z(_lib: &dyn MathLib, _x: Float, _y: Float, z: Float) -> Float {
    z
}

pub(crate) fn z_xy_theta(lib: &dyn MathLib, x: Float, y: Float, theta: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(rho_xy(lib, x, y) / lib.tan(theta), 0.0, inf, -inf)
}

pub(crate) fn z_xy_eta(lib: &dyn MathLib, x: Float, y: Float, eta: Float) -> Float {
    rho_xy(lib, x, y) * lib.sinh(eta)
}

pub(crate) fn z_rhophi_z(_lib: &dyn MathLib, _rho: Float, _phi: Float, z: Float) -> Float {
    z
}

pub(crate) fn z_rhophi_theta(lib: &dyn MathLib, rho: Float, _phi: Float, theta: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(rho / lib.tan(theta), 0.0, inf, -inf)
}

pub(crate) fn z_rhophi_eta(lib: &dyn MathLib, rho: Float, _phi: Float, eta: Float) -> Float {
    rho * lib.sinh(eta)
}

// ### theta ###

pub(crate) fn theta_xy_z(lib: &dyn MathLib, x: Float, y: Float, z: Float) -> Float {
    lib.arccos(costheta_xy_z(lib, x, y, z))
}

pub(crate) fn theta_xy_theta(_lib: &dyn MathLib, _x: Float, _y: Float, theta: Float) -> Float {
    theta
}

pub(crate) fn theta_xy_eta(lib: &dyn MathLib, _x: Float, _y: Float, eta: Float) -> Float {
    2.0 * lib.arctan(lib.exp(-eta))
}

pub(crate) fn theta_rhophi_z(lib: &dyn MathLib, rho: Float, phi: Float, z: Float) -> Float {
    lib.arccos(costheta_rhophi_z(lib, rho, phi, z))
}

pub(crate) fn theta_rhophi_theta(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    theta: Float,
) -> Float {
    theta
}

pub(crate) fn theta_rhophi_eta(lib: &dyn MathLib, _rho: Float, _phi: Float, eta: Float) -> Float {
    2.0 * lib.arctan(lib.exp(-eta))
}

// ### eta ###

pub(crate) fn eta_xy_z(lib: &dyn MathLib, x: Float, y: Float, z: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        lib.arctanh(z / lib.sqrt(x.powi(2) + y.powi(2) + z.powi(2))),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn eta_xy_theta(lib: &dyn MathLib, _x: Float, _y: Float, theta: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(-lib.ln(lib.tan(0.5 * theta)), 0.0, inf, -inf)
}

pub(crate) fn eta_xy_eta(_lib: &dyn MathLib, _x: Float, _y: Float, eta: Float) -> Float {
    eta
}

pub(crate) fn eta_rhophi_z(lib: &dyn MathLib, rho: Float, _phi: Float, z: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        lib.arctanh(z / lib.sqrt(rho.powi(2) + z.powi(2))),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn eta_rhophi_theta(lib: &dyn MathLib, _rho: Float, _phi: Float, theta: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(-lib.ln(lib.tan(0.5 * theta)), 0.0, inf, -inf)
}

pub(crate) fn eta_rhophi_eta(_lib: &dyn MathLib, _rho: Float, _phi: Float, eta: Float) -> Float {
    eta
}

// ### costheta ###

pub(crate) fn costheta_xy_z(lib: &dyn MathLib, x: Float, y: Float, z: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(z / mag_xy_z(lib, x, y, z), 1.0, inf, -inf)
}

pub(crate) fn costheta_xy_theta(lib: &dyn MathLib, _x: Float, _y: Float, theta: Float) -> Float {
    lib.cos(theta)
}

pub(crate) fn costheta_xy_eta(lib: &dyn MathLib, x: Float, y: Float, eta: Float) -> Float {
    lib.cos(theta_xy_eta(lib, x, y, eta))
}

pub(crate) fn costheta_rhophi_z(lib: &dyn MathLib, rho: Float, phi: Float, z: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(z / mag_rhophi_z(lib, rho, phi, z), 1.0, inf, -inf)
}

pub(crate) fn costheta_rhophi_theta(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    theta: Float,
) -> Float {
    lib.cos(theta)
}

pub(crate) fn costheta_rhophi_eta(lib: &dyn MathLib, rho: Float, phi: Float, eta: Float) -> Float {
    lib.cos(theta_rhophi_eta(lib, rho, phi, eta))
}

// ### cottheta ###

pub(crate) fn cottheta_xy_z(lib: &dyn MathLib, x: Float, y: Float, z: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(z / rho_xy(lib, x, y), inf, inf, -inf)
}

pub(crate) fn cottheta_xy_theta(lib: &dyn MathLib, _x: Float, _y: Float, theta: Float) -> Float {
    1.0 / lib.tan(theta)
}

pub(crate) fn cottheta_xy_eta(lib: &dyn MathLib, x: Float, y: Float, eta: Float) -> Float {
    1.0 / lib.tan(theta_xy_eta(lib, x, y, eta))
}

pub(crate) fn cottheta_rhophi_z(lib: &dyn MathLib, rho: Float, _phi: Float, z: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(z / rho, inf, inf, -inf)
}

pub(crate) fn cottheta_rhophi_theta(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    theta: Float,
) -> Float {
    1.0 / lib.tan(theta)
}

pub(crate) fn cottheta_rhophi_eta(lib: &dyn MathLib, rho: Float, phi: Float, eta: Float) -> Float {
    1.0 / lib.tan(theta_rhophi_eta(lib, rho, phi, eta))
}

// ### mag2 ###

pub(crate) fn mag2_xy_z(_lib: &dyn MathLib, x: Float, y: Float, z: Float) -> Float {
    x.powi(2) + y.powi(2) + z.powi(2)
}

pub(crate) fn mag2_xy_theta(lib: &dyn MathLib, x: Float, y: Float, theta: Float) -> Float {
    (x.powi(2) + y.powi(2)) / lib.sin(theta).powi(2)
}

pub(crate) fn mag2_xy_eta(lib: &dyn MathLib, x: Float, y: Float, eta: Float) -> Float {
    let expmeta = lib.exp(-eta);
    let invsintheta = 0.5 * (1.0 + expmeta.powi(2)) / expmeta;
    (x.powi(2) + y.powi(2)) * invsintheta.powi(2)
}

pub(crate) fn mag2_rhophi_z(_lib: &dyn MathLib, rho: Float, _phi: Float, z: Float) -> Float {
    rho.powi(2) + z.powi(2)
}

pub(crate) fn mag2_rhophi_theta(lib: &dyn MathLib, rho: Float, _phi: Float, theta: Float) -> Float {
    rho.powi(2) / lib.sin(theta).powi(2)
}

pub(crate) fn mag2_rhophi_eta(lib: &dyn MathLib, rho: Float, _phi: Float, eta: Float) -> Float {
    let expmeta = lib.exp(-eta);
    let invsintheta = 0.5 * (1.0 + expmeta.powi(2)) / expmeta;
    rho.powi(2) * invsintheta.powi(2)
}

// ### mag ###

pub(crate) fn mag_xy_z(lib: &dyn MathLib, x: Float, y: Float, z: Float) -> Float {
    lib.sqrt(mag2_xy_z(lib, x, y, z))
}

pub(crate) fn mag_xy_theta(lib: &dyn MathLib, x: Float, y: Float, theta: Float) -> Float {
    lib.sqrt(mag2_xy_theta(lib, x, y, theta))
}

pub(crate) fn mag_xy_eta(lib: &dyn MathLib, x: Float, y: Float, eta: Float) -> Float {
    lib.sqrt(mag2_xy_eta(lib, x, y, eta))
}

pub(crate) fn mag_rhophi_z(lib: &dyn MathLib, rho: Float, phi: Float, z: Float) -> Float {
    lib.sqrt(mag2_rhophi_z(lib, rho, phi, z))
}

pub(crate) fn mag_rhophi_theta(lib: &dyn MathLib, rho: Float, phi: Float, theta: Float) -> Float {
    lib.sqrt(mag2_rhophi_theta(lib, rho, phi, theta))
}

pub(crate) fn mag_rhophi_eta(lib: &dyn MathLib, rho: Float, phi: Float, eta: Float) -> Float {
    lib.sqrt(mag2_rhophi_eta(lib, rho, phi, eta))
}

/// Table of one longitudinal projection
type Projection = DispatchTable<SpatialKind, SpProjection, ()>;

fn projection(operation: &'static str, native: fn(SpatialKind) -> SpProjection) -> Projection {
    let mut table = DispatchTable::new(operation);
    for kind in SPATIAL_KINDS {
        table.register(kind, native(kind), ());
    }
    table.built()
}

fn costheta_native(kind: SpatialKind) -> SpProjection {
    match kind {
        (AzimuthalKind::Xy, LongitudinalKind::Z) => costheta_xy_z,
        (AzimuthalKind::Xy, LongitudinalKind::Theta) => costheta_xy_theta,
        (AzimuthalKind::Xy, LongitudinalKind::Eta) => costheta_xy_eta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Z) => costheta_rhophi_z,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Theta) => costheta_rhophi_theta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Eta) => costheta_rhophi_eta,
    }
}

fn cottheta_native(kind: SpatialKind) -> SpProjection {
    match kind {
        (AzimuthalKind::Xy, LongitudinalKind::Z) => cottheta_xy_z,
        (AzimuthalKind::Xy, LongitudinalKind::Theta) => cottheta_xy_theta,
        (AzimuthalKind::Xy, LongitudinalKind::Eta) => cottheta_xy_eta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Z) => cottheta_rhophi_z,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Theta) => cottheta_rhophi_theta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Eta) => cottheta_rhophi_eta,
    }
}

fn mag2_native(kind: SpatialKind) -> SpProjection {
    match kind {
        (AzimuthalKind::Xy, LongitudinalKind::Z) => mag2_xy_z,
        (AzimuthalKind::Xy, LongitudinalKind::Theta) => mag2_xy_theta,
        (AzimuthalKind::Xy, LongitudinalKind::Eta) => mag2_xy_eta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Z) => mag2_rhophi_z,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Theta) => mag2_rhophi_theta,
        (AzimuthalKind::RhoPhi, LongitudinalKind::Eta) => mag2_rhophi_eta,
    }
}

pub(crate) static Z: Lazy<Projection> =
    Lazy::new(|| projection("spatial.z", crate::compute::convert::to_z));
pub(crate) static THETA: Lazy<Projection> =
    Lazy::new(|| projection("spatial.theta", crate::compute::convert::to_theta));
pub(crate) static ETA: Lazy<Projection> =
    Lazy::new(|| projection("spatial.eta", crate::compute::convert::to_eta));
pub(crate) static COSTHETA: Lazy<Projection> =
    Lazy::new(|| projection("spatial.costheta", costheta_native));
pub(crate) static COTTHETA: Lazy<Projection> =
    Lazy::new(|| projection("spatial.cottheta", cottheta_native));
pub(crate) static MAG: Lazy<Projection> =
    Lazy::new(|| projection("spatial.mag", crate::compute::convert::to_mag));
pub(crate) static MAG2: Lazy<Projection> = Lazy::new(|| projection("spatial.mag2", mag2_native));

//! Azimuthal arithmetic: `add`, `subtract`, `dot`, `scale`, `unit`
//!
//! Same-kind operand pairs are specialized (polar addition stays polar);
//! mixed pairs are generated by Cartesian conversion composition.

use crate::{
    backend::MathLib,
    compute::{
        convert::{to_x, to_y},
        rectify, AzPairScalarKernel, AzPairVectorKernel, AzParamVectorKernel, AzVectorKernel,
    },
    coords::AzimuthalKind,
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

// specialized
pub(crate) fn add_xy_xy(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    x2: Float,
    y2: Float,
) -> (Float, Float) {
    (x1 + x2, y1 + y2)
}

// specialized
pub(crate) fn add_rhophi_rhophi(
    lib: &dyn MathLib,
    rho1: Float,
    phi1: Float,
    rho2: Float,
    phi2: Float,
) -> (Float, Float) {
    let diff = phi2 - phi1;
    let u = rho2 * lib.cos(diff);
    let v = rho2 * lib.sin(diff);
    (
        lib.sqrt((rho1 + u).powi(2) + v.powi(2)),
        rectify(lib, phi1 + lib.arctan2(v, rho1 + u)),
    )
}

// specialized
pub(crate) fn subtract_xy_xy(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    x2: Float,
    y2: Float,
) -> (Float, Float) {
    (x1 - x2, y1 - y2)
}

// specialized; subtraction is addition of the antipode
pub(crate) fn subtract_rhophi_rhophi(
    lib: &dyn MathLib,
    rho1: Float,
    phi1: Float,
    rho2: Float,
    phi2: Float,
) -> (Float, Float) {
    let diff = phi2 - phi1 + lib.pi();
    let u = rho2 * lib.cos(diff);
    let v = rho2 * lib.sin(diff);
    (
        lib.sqrt((rho1 + u).powi(2) + v.powi(2)),
        rectify(lib, phi1 + lib.arctan2(v, rho1 + u)),
    )
}

pub(crate) fn dot_xy_xy(
    _lib: &dyn MathLib,
    x1: Float,
    y1: Float,
    x2: Float,
    y2: Float,
) -> Float {
    x1 * x2 + y1 * y2
}

pub(crate) fn dot_rhophi_rhophi(
    lib: &dyn MathLib,
    rho1: Float,
    phi1: Float,
    rho2: Float,
    phi2: Float,
) -> Float {
    rho1 * rho2 * lib.cos(phi1 - phi2)
}

pub(crate) fn scale_xy(_lib: &dyn MathLib, factor: Float, x: Float, y: Float) -> (Float, Float) {
    (x * factor, y * factor)
}

pub(crate) fn scale_rhophi(
    lib: &dyn MathLib,
    factor: Float,
    rho: Float,
    phi: Float,
) -> (Float, Float) {
    let absfactor = lib.absolute(factor);
    let sign = lib.sign(factor);
    let turn_if_negative = -0.5 * (sign - 1.0) * lib.pi();
    (rho * absfactor, rectify(lib, phi + turn_if_negative))
}

pub(crate) fn unit_xy(lib: &dyn MathLib, x: Float, y: Float) -> (Float, Float) {
    let norm = super::coords::rho_xy(lib, x, y);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_rhophi(_lib: &dyn MathLib, _rho: Float, phi: Float) -> (Float, Float) {
    (1.0, phi)
}

/// Kernel and result kind for `add` under one signature
pub(crate) fn add_kernel(
    k1: AzimuthalKind,
    k2: AzimuthalKind,
) -> (AzPairVectorKernel, AzimuthalKind) {
    match (k1, k2) {
        (AzimuthalKind::Xy, AzimuthalKind::Xy) => (Box::new(add_xy_xy), AzimuthalKind::Xy),
        (AzimuthalKind::RhoPhi, AzimuthalKind::RhoPhi) => {
            (Box::new(add_rhophi_rhophi), AzimuthalKind::RhoPhi)
        }
        _ => {
            let (x1, y1) = (to_x(k1), to_y(k1));
            let (x2, y2) = (to_x(k2), to_y(k2));
            (
                Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| {
                    add_xy_xy(lib, x1(lib, a1, a2), y1(lib, a1, a2), x2(lib, b1, b2), y2(lib, b1, b2))
                }),
                AzimuthalKind::Xy,
            )
        }
    }
}

/// Kernel and result kind for `subtract` under one signature
pub(crate) fn subtract_kernel(
    k1: AzimuthalKind,
    k2: AzimuthalKind,
) -> (AzPairVectorKernel, AzimuthalKind) {
    match (k1, k2) {
        (AzimuthalKind::Xy, AzimuthalKind::Xy) => (Box::new(subtract_xy_xy), AzimuthalKind::Xy),
        (AzimuthalKind::RhoPhi, AzimuthalKind::RhoPhi) => {
            (Box::new(subtract_rhophi_rhophi), AzimuthalKind::RhoPhi)
        }
        _ => {
            let (x1, y1) = (to_x(k1), to_y(k1));
            let (x2, y2) = (to_x(k2), to_y(k2));
            (
                Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| {
                    subtract_xy_xy(
                        lib,
                        x1(lib, a1, a2),
                        y1(lib, a1, a2),
                        x2(lib, b1, b2),
                        y2(lib, b1, b2),
                    )
                }),
                AzimuthalKind::Xy,
            )
        }
    }
}

/// Kernel for `dot` under one signature
pub(crate) fn dot_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairScalarKernel {
    match (k1, k2) {
        (AzimuthalKind::Xy, AzimuthalKind::Xy) => Box::new(dot_xy_xy),
        (AzimuthalKind::RhoPhi, AzimuthalKind::RhoPhi) => Box::new(dot_rhophi_rhophi),
        _ => {
            let (x1, y1) = (to_x(k1), to_y(k1));
            let (x2, y2) = (to_x(k2), to_y(k2));
            Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| {
                dot_xy_xy(lib, x1(lib, a1, a2), y1(lib, a1, a2), x2(lib, b1, b2), y2(lib, b1, b2))
            })
        }
    }
}

type PairVectorTable =
    DispatchTable<(AzimuthalKind, AzimuthalKind), AzPairVectorKernel, AzimuthalKind>;

fn pair_vector_table(
    operation: &'static str,
    kernel: fn(AzimuthalKind, AzimuthalKind) -> (AzPairVectorKernel, AzimuthalKind),
) -> PairVectorTable {
    let mut table = DispatchTable::new(operation);
    for k1 in AzimuthalKind::ALL {
        for k2 in AzimuthalKind::ALL {
            let (f, returns) = kernel(k1, k2);
            table.register((k1, k2), f, returns);
        }
    }
    table.built()
}

pub(crate) static ADD: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("planar.add", add_kernel));

pub(crate) static SUBTRACT: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("planar.subtract", subtract_kernel));

pub(crate) static DOT: Lazy<
    DispatchTable<(AzimuthalKind, AzimuthalKind), AzPairScalarKernel, ()>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("planar.dot");
    for k1 in AzimuthalKind::ALL {
        for k2 in AzimuthalKind::ALL {
            table.register((k1, k2), dot_kernel(k1, k2), ());
        }
    }
    table.built()
});

pub(crate) static SCALE: Lazy<DispatchTable<AzimuthalKind, AzParamVectorKernel, AzimuthalKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("planar.scale");
        table.register(AzimuthalKind::Xy, Box::new(scale_xy) as AzParamVectorKernel, AzimuthalKind::Xy);
        table.register(AzimuthalKind::RhoPhi, Box::new(scale_rhophi), AzimuthalKind::RhoPhi);
        table.built()
    });

pub(crate) static UNIT: Lazy<DispatchTable<AzimuthalKind, AzVectorKernel, AzimuthalKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("planar.unit");
        table.register(AzimuthalKind::Xy, Box::new(unit_xy) as AzVectorKernel, AzimuthalKind::Xy);
        table.register(AzimuthalKind::RhoPhi, Box::new(unit_rhophi), AzimuthalKind::RhoPhi);
        table.built()
    });

//! Azimuthal angles and in-plane transforms: `deltaphi`, `cosdeltaphi`,
//! `rotate_z`, `transform2d`
//!
//! Rotation matrices are only computed in Cartesian coordinates; the
//! remaining signatures are conversions.

use crate::{
    backend::MathLib,
    compute::{
        convert::{to_phi, to_x, to_y},
        rectify, AzMatrixVectorKernel, AzPairScalarKernel, AzParamVectorKernel,
    },
    coords::AzimuthalKind,
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

pub(crate) fn rotate_z_xy(lib: &dyn MathLib, angle: Float, x: Float, y: Float) -> (Float, Float) {
    let s = lib.sin(angle);
    let c = lib.cos(angle);
    (c * x - s * y, s * x + c * y)
}

pub(crate) fn rotate_z_rhophi(
    lib: &dyn MathLib,
    angle: Float,
    rho: Float,
    phi: Float,
) -> (Float, Float) {
    (rho, rectify(lib, phi + angle))
}

pub(crate) fn transform2d_xy(
    _lib: &dyn MathLib,
    xx: Float,
    xy: Float,
    yx: Float,
    yy: Float,
    x: Float,
    y: Float,
) -> (Float, Float) {
    (xx * x + xy * y, yx * x + yy * y)
}

// specialized; avoids going through arctan2
fn cosdeltaphi_xy_xy(lib: &dyn MathLib, x1: Float, y1: Float, x2: Float, y2: Float) -> Float {
    (x1 * x2 + y1 * y2)
        / (super::coords::rho_xy(lib, x1, y1) * super::coords::rho_xy(lib, x2, y2))
}

/// Kernel for `deltaphi` under one signature
pub(crate) fn deltaphi_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairScalarKernel {
    let p1 = to_phi(k1);
    let p2 = to_phi(k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| {
        rectify(lib, p1(lib, a1, a2) - p2(lib, b1, b2))
    })
}

/// Kernel for `cosdeltaphi` under one signature
pub(crate) fn cosdeltaphi_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairScalarKernel {
    match (k1, k2) {
        (AzimuthalKind::Xy, AzimuthalKind::Xy) => Box::new(cosdeltaphi_xy_xy),
        _ => {
            let p1 = to_phi(k1);
            let p2 = to_phi(k2);
            Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| {
                lib.cos(p1(lib, a1, a2) - p2(lib, b1, b2))
            })
        }
    }
}

type PairScalarTable = DispatchTable<(AzimuthalKind, AzimuthalKind), AzPairScalarKernel, ()>;

fn pair_scalar_table(
    operation: &'static str,
    kernel: fn(AzimuthalKind, AzimuthalKind) -> AzPairScalarKernel,
) -> PairScalarTable {
    let mut table = DispatchTable::new(operation);
    for k1 in AzimuthalKind::ALL {
        for k2 in AzimuthalKind::ALL {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

pub(crate) static DELTAPHI: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("planar.deltaphi", deltaphi_kernel));

pub(crate) static COSDELTAPHI: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("planar.cosdeltaphi", cosdeltaphi_kernel));

pub(crate) static ROTATE_Z: Lazy<DispatchTable<AzimuthalKind, AzParamVectorKernel, AzimuthalKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("planar.rotate_z");
        table.register(AzimuthalKind::Xy, Box::new(rotate_z_xy) as AzParamVectorKernel, AzimuthalKind::Xy);
        table.register(AzimuthalKind::RhoPhi, Box::new(rotate_z_rhophi), AzimuthalKind::RhoPhi);
        table.built()
    });

pub(crate) static TRANSFORM2D: Lazy<
    DispatchTable<AzimuthalKind, AzMatrixVectorKernel, AzimuthalKind>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("planar.transform2d");
    for kind in AzimuthalKind::ALL {
        let kernel: AzMatrixVectorKernel = match kind {
            AzimuthalKind::Xy => Box::new(transform2d_xy),
            AzimuthalKind::RhoPhi => {
                let (x, y) = (to_x(kind), to_y(kind));
                Box::new(move |lib: &dyn MathLib, xx, xy, yx, yy, a1, a2| {
                    transform2d_xy(lib, xx, xy, yx, yy, x(lib, a1, a2), y(lib, a1, a2))
                })
            }
        };
        table.register(kind, kernel, AzimuthalKind::Xy);
    }
    table.built()
});

//! Spatial separations: `deltaangle`, `deltaeta`, `delta_r`, `delta_r2`
//!
//! All four are compositions of projections, so every signature is
//! generated; there are no hand-written natives beyond the projections
//! themselves.

use crate::{
    backend::MathLib,
    compute::{
        convert::{to_eta, to_mag},
        planar, SpPairScalarKernel,
    },
    coords::{SpatialKind, SPATIAL_KINDS},
    dispatch::DispatchTable,
};

use once_cell::sync::Lazy;

/// Kernel for `deltaangle` under one signature
pub(crate) fn deltaangle_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairScalarKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let mag1 = to_mag(k1);
    let mag2 = to_mag(k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
        let v1m = mag1(lib, a1, a2, a3);
        let v2m = mag2(lib, b1, b2, b3);
        lib.arccos(dot(lib, a1, a2, a3, b1, b2, b3) / v1m / v2m)
    })
}

/// Kernel for `deltaeta` under one signature
pub(crate) fn deltaeta_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairScalarKernel {
    let eta1 = to_eta(k1);
    let eta2 = to_eta(k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
        eta1(lib, a1, a2, a3) - eta2(lib, b1, b2, b3)
    })
}

/// Kernel for `delta_r2` under one signature
pub(crate) fn delta_r2_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairScalarKernel {
    let deltaphi = planar::angles::deltaphi_kernel(k1.0, k2.0);
    let deltaeta = deltaeta_kernel(k1, k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
        deltaphi(lib, a1, a2, b1, b2).powi(2) + deltaeta(lib, a1, a2, a3, b1, b2, b3).powi(2)
    })
}

/// Kernel for `delta_r` under one signature
pub(crate) fn delta_r_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairScalarKernel {
    let delta_r2 = delta_r2_kernel(k1, k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
        lib.sqrt(delta_r2(lib, a1, a2, a3, b1, b2, b3))
    })
}

type PairScalarTable = DispatchTable<(SpatialKind, SpatialKind), SpPairScalarKernel, ()>;

fn pair_scalar_table(
    operation: &'static str,
    kernel: fn(SpatialKind, SpatialKind) -> SpPairScalarKernel,
) -> PairScalarTable {
    let mut table = DispatchTable::new(operation);
    for k1 in SPATIAL_KINDS {
        for k2 in SPATIAL_KINDS {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

pub(crate) static DELTAANGLE: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("spatial.deltaangle", deltaangle_kernel));

pub(crate) static DELTAETA: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("spatial.deltaeta", deltaeta_kernel));

pub(crate) static DELTA_R: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("spatial.delta_r", delta_r_kernel));

pub(crate) static DELTA_R2: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("spatial.delta_r2", delta_r2_kernel));

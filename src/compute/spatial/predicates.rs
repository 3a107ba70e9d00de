//! Spatial comparisons: `equal`, `not_equal`, `isclose`, `is_parallel`,
//! `is_antiparallel`, `is_perpendicular`
//!
//! Policy: mixed-kind operands are turned into `(x, y, z)` before
//! comparing.

use crate::{
    backend::MathLib,
    compute::{
        convert::{spatial_to_cartesian, to_mag},
        SpPairBoolKernel, SpPairCloseKernel, SpPairToleranceKernel,
    },
    coords::{SpatialKind, SPATIAL_KINDS},
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

// same kinds
#[allow(clippy::float_cmp)]
fn equal_components(
    _lib: &dyn MathLib,
    a1: Float,
    a2: Float,
    a3: Float,
    b1: Float,
    b2: Float,
    b3: Float,
) -> bool {
    (a1 == b1) & (a2 == b2) & (a3 == b3)
}

fn isclose_components(
    lib: &dyn MathLib,
    rtol: Float,
    atol: Float,
    equal_nan: bool,
    a1: Float,
    a2: Float,
    a3: Float,
    b1: Float,
    b2: Float,
    b3: Float,
) -> bool {
    lib.isclose(a1, b1, rtol, atol, equal_nan)
        & lib.isclose(a2, b2, rtol, atol, equal_nan)
        & lib.isclose(a3, b3, rtol, atol, equal_nan)
}

/// Kernel for `equal` under one signature
pub(crate) fn equal_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairBoolKernel {
    if k1 == k2 {
        Box::new(equal_components)
    } else {
        let (x1, y1, z1) = spatial_to_cartesian(k1);
        let (x2, y2, z2) = spatial_to_cartesian(k2);
        Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| {
            equal_components(
                lib,
                x1(lib, a1, a2),
                y1(lib, a1, a2),
                z1(lib, a1, a2, a3),
                x2(lib, b1, b2),
                y2(lib, b1, b2),
                z2(lib, b1, b2, b3),
            )
        })
    }
}

/// Kernel for `not_equal` under one signature
pub(crate) fn not_equal_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairBoolKernel {
    let equal = equal_kernel(k1, k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, b1, b2, b3| !equal(lib, a1, a2, a3, b1, b2, b3))
}

/// Kernel for `isclose` under one signature
pub(crate) fn isclose_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairCloseKernel {
    if k1 == k2 {
        Box::new(isclose_components)
    } else {
        let (x1, y1, z1) = spatial_to_cartesian(k1);
        let (x2, y2, z2) = spatial_to_cartesian(k2);
        Box::new(
            move |lib: &dyn MathLib, rtol, atol, equal_nan, a1, a2, a3, b1, b2, b3| {
                isclose_components(
                    lib,
                    rtol,
                    atol,
                    equal_nan,
                    x1(lib, a1, a2),
                    y1(lib, a1, a2),
                    z1(lib, a1, a2, a3),
                    x2(lib, b1, b2),
                    y2(lib, b1, b2),
                    z2(lib, b1, b2, b3),
                )
            },
        )
    }
}

/// Kernel for `is_parallel` under one signature
pub(crate) fn is_parallel_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairToleranceKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let mag1 = to_mag(k1);
    let mag2 = to_mag(k2);
    Box::new(move |lib: &dyn MathLib, tolerance, a1, a2, a3, b1, b2, b3| {
        dot(lib, a1, a2, a3, b1, b2, b3)
            > (1.0 - lib.absolute(tolerance)) * mag1(lib, a1, a2, a3) * mag2(lib, b1, b2, b3)
    })
}

/// Kernel for `is_antiparallel` under one signature
pub(crate) fn is_antiparallel_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairToleranceKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let mag1 = to_mag(k1);
    let mag2 = to_mag(k2);
    Box::new(move |lib: &dyn MathLib, tolerance, a1, a2, a3, b1, b2, b3| {
        dot(lib, a1, a2, a3, b1, b2, b3)
            < (lib.absolute(tolerance) - 1.0) * mag1(lib, a1, a2, a3) * mag2(lib, b1, b2, b3)
    })
}

/// Kernel for `is_perpendicular` under one signature
pub(crate) fn is_perpendicular_kernel(k1: SpatialKind, k2: SpatialKind) -> SpPairToleranceKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let mag1 = to_mag(k1);
    let mag2 = to_mag(k2);
    Box::new(move |lib: &dyn MathLib, tolerance, a1, a2, a3, b1, b2, b3| {
        dot(lib, a1, a2, a3, b1, b2, b3)
            < lib.absolute(tolerance) * mag1(lib, a1, a2, a3) * mag2(lib, b1, b2, b3)
    })
}

type PairBoolTable = DispatchTable<(SpatialKind, SpatialKind), SpPairBoolKernel, ()>;
type PairToleranceTable = DispatchTable<(SpatialKind, SpatialKind), SpPairToleranceKernel, ()>;

fn pair_bool_table(
    operation: &'static str,
    kernel: fn(SpatialKind, SpatialKind) -> SpPairBoolKernel,
) -> PairBoolTable {
    let mut table = DispatchTable::new(operation);
    for k1 in SPATIAL_KINDS {
        for k2 in SPATIAL_KINDS {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

fn pair_tolerance_table(
    operation: &'static str,
    kernel: fn(SpatialKind, SpatialKind) -> SpPairToleranceKernel,
) -> PairToleranceTable {
    let mut table = DispatchTable::new(operation);
    for k1 in SPATIAL_KINDS {
        for k2 in SPATIAL_KINDS {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

pub(crate) static EQUAL: Lazy<PairBoolTable> =
    Lazy::new(|| pair_bool_table("spatial.equal", equal_kernel));

pub(crate) static NOT_EQUAL: Lazy<PairBoolTable> =
    Lazy::new(|| pair_bool_table("spatial.not_equal", not_equal_kernel));

pub(crate) static ISCLOSE: Lazy<DispatchTable<(SpatialKind, SpatialKind), SpPairCloseKernel, ()>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("spatial.isclose");
        for k1 in SPATIAL_KINDS {
            for k2 in SPATIAL_KINDS {
                table.register((k1, k2), isclose_kernel(k1, k2), ());
            }
        }
        table.built()
    });

pub(crate) static IS_PARALLEL: Lazy<PairToleranceTable> =
    Lazy::new(|| pair_tolerance_table("spatial.is_parallel", is_parallel_kernel));

pub(crate) static IS_ANTIPARALLEL: Lazy<PairToleranceTable> =
    Lazy::new(|| pair_tolerance_table("spatial.is_antiparallel", is_antiparallel_kernel));

pub(crate) static IS_PERPENDICULAR: Lazy<PairToleranceTable> =
    Lazy::new(|| pair_tolerance_table("spatial.is_perpendicular", is_perpendicular_kernel));

//! Azimuthal comparisons: `equal`, `not_equal`, `isclose`,
//! `is_parallel`, `is_antiparallel`, `is_perpendicular`
//!
//! Policy: mixed-kind operands are turned into `(x, y)` before comparing.
//! Exact equality is exact floating-point equality on the (converted)
//! components; the alignment predicates compare the dot product against
//! the product of magnitudes within a caller-supplied tolerance.

use crate::{
    backend::MathLib,
    compute::{
        convert::{to_rho, to_x, to_y},
        AzPairBoolKernel, AzPairCloseKernel, AzPairToleranceKernel,
    },
    coords::AzimuthalKind,
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

// same kinds
#[allow(clippy::float_cmp)]
fn equal_xy_xy(_lib: &dyn MathLib, x1: Float, y1: Float, x2: Float, y2: Float) -> bool {
    (x1 == x2) & (y1 == y2)
}

// same kinds
#[allow(clippy::float_cmp)]
fn equal_rhophi_rhophi(
    _lib: &dyn MathLib,
    rho1: Float,
    phi1: Float,
    rho2: Float,
    phi2: Float,
) -> bool {
    (rho1 == rho2) & (phi1 == phi2)
}

fn isclose_xy_xy(
    lib: &dyn MathLib,
    rtol: Float,
    atol: Float,
    equal_nan: bool,
    x1: Float,
    y1: Float,
    x2: Float,
    y2: Float,
) -> bool {
    lib.isclose(x1, x2, rtol, atol, equal_nan) & lib.isclose(y1, y2, rtol, atol, equal_nan)
}

fn isclose_rhophi_rhophi(
    lib: &dyn MathLib,
    rtol: Float,
    atol: Float,
    equal_nan: bool,
    rho1: Float,
    phi1: Float,
    rho2: Float,
    phi2: Float,
) -> bool {
    lib.isclose(rho1, rho2, rtol, atol, equal_nan) & lib.isclose(phi1, phi2, rtol, atol, equal_nan)
}

/// Kernel for `equal` under one signature
pub(crate) fn equal_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairBoolKernel {
    match (k1, k2) {
        (AzimuthalKind::Xy, AzimuthalKind::Xy) => Box::new(equal_xy_xy),
        (AzimuthalKind::RhoPhi, AzimuthalKind::RhoPhi) => Box::new(equal_rhophi_rhophi),
        _ => {
            let (x1, y1) = (to_x(k1), to_y(k1));
            let (x2, y2) = (to_x(k2), to_y(k2));
            Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| {
                equal_xy_xy(lib, x1(lib, a1, a2), y1(lib, a1, a2), x2(lib, b1, b2), y2(lib, b1, b2))
            })
        }
    }
}

/// Kernel for `not_equal` under one signature
pub(crate) fn not_equal_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairBoolKernel {
    let equal = equal_kernel(k1, k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, b1, b2| !equal(lib, a1, a2, b1, b2))
}

/// Kernel for `isclose` under one signature
pub(crate) fn isclose_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairCloseKernel {
    match (k1, k2) {
        (AzimuthalKind::Xy, AzimuthalKind::Xy) => Box::new(isclose_xy_xy),
        (AzimuthalKind::RhoPhi, AzimuthalKind::RhoPhi) => Box::new(isclose_rhophi_rhophi),
        _ => {
            let (x1, y1) = (to_x(k1), to_y(k1));
            let (x2, y2) = (to_x(k2), to_y(k2));
            Box::new(
                move |lib: &dyn MathLib, rtol, atol, equal_nan, a1, a2, b1, b2| {
                    isclose_xy_xy(
                        lib,
                        rtol,
                        atol,
                        equal_nan,
                        x1(lib, a1, a2),
                        y1(lib, a1, a2),
                        x2(lib, b1, b2),
                        y2(lib, b1, b2),
                    )
                },
            )
        }
    }
}

/// Kernel for `is_parallel` under one signature
pub(crate) fn is_parallel_kernel(k1: AzimuthalKind, k2: AzimuthalKind) -> AzPairToleranceKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let rho1 = to_rho(k1);
    let rho2 = to_rho(k2);
    Box::new(move |lib: &dyn MathLib, tolerance, a1, a2, b1, b2| {
        dot(lib, a1, a2, b1, b2)
            > (1.0 - lib.absolute(tolerance)) * rho1(lib, a1, a2) * rho2(lib, b1, b2)
    })
}

/// Kernel for `is_antiparallel` under one signature
pub(crate) fn is_antiparallel_kernel(
    k1: AzimuthalKind,
    k2: AzimuthalKind,
) -> AzPairToleranceKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let rho1 = to_rho(k1);
    let rho2 = to_rho(k2);
    Box::new(move |lib: &dyn MathLib, tolerance, a1, a2, b1, b2| {
        dot(lib, a1, a2, b1, b2)
            < (lib.absolute(tolerance) - 1.0) * rho1(lib, a1, a2) * rho2(lib, b1, b2)
    })
}

/// Kernel for `is_perpendicular` under one signature
pub(crate) fn is_perpendicular_kernel(
    k1: AzimuthalKind,
    k2: AzimuthalKind,
) -> AzPairToleranceKernel {
    let dot = super::arithmetic::dot_kernel(k1, k2);
    let rho1 = to_rho(k1);
    let rho2 = to_rho(k2);
    Box::new(move |lib: &dyn MathLib, tolerance, a1, a2, b1, b2| {
        dot(lib, a1, a2, b1, b2)
            < lib.absolute(tolerance) * rho1(lib, a1, a2) * rho2(lib, b1, b2)
    })
}

type PairBoolTable = DispatchTable<(AzimuthalKind, AzimuthalKind), AzPairBoolKernel, ()>;
type PairToleranceTable = DispatchTable<(AzimuthalKind, AzimuthalKind), AzPairToleranceKernel, ()>;

fn pair_bool_table(
    operation: &'static str,
    kernel: fn(AzimuthalKind, AzimuthalKind) -> AzPairBoolKernel,
) -> PairBoolTable {
    let mut table = DispatchTable::new(operation);
    for k1 in AzimuthalKind::ALL {
        for k2 in AzimuthalKind::ALL {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

fn pair_tolerance_table(
    operation: &'static str,
    kernel: fn(AzimuthalKind, AzimuthalKind) -> AzPairToleranceKernel,
) -> PairToleranceTable {
    let mut table = DispatchTable::new(operation);
    for k1 in AzimuthalKind::ALL {
        for k2 in AzimuthalKind::ALL {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

pub(crate) static EQUAL: Lazy<PairBoolTable> =
    Lazy::new(|| pair_bool_table("planar.equal", equal_kernel));

pub(crate) static NOT_EQUAL: Lazy<PairBoolTable> =
    Lazy::new(|| pair_bool_table("planar.not_equal", not_equal_kernel));

pub(crate) static ISCLOSE: Lazy<
    DispatchTable<(AzimuthalKind, AzimuthalKind), AzPairCloseKernel, ()>,
> = Lazy::new(|| {
    let mut table = DispatchTable::new("planar.isclose");
    for k1 in AzimuthalKind::ALL {
        for k2 in AzimuthalKind::ALL {
            table.register((k1, k2), isclose_kernel(k1, k2), ());
        }
    }
    table.built()
});

pub(crate) static IS_PARALLEL: Lazy<PairToleranceTable> =
    Lazy::new(|| pair_tolerance_table("planar.is_parallel", is_parallel_kernel));

pub(crate) static IS_ANTIPARALLEL: Lazy<PairToleranceTable> =
    Lazy::new(|| pair_tolerance_table("planar.is_antiparallel", is_antiparallel_kernel));

pub(crate) static IS_PERPENDICULAR: Lazy<PairToleranceTable> =
    Lazy::new(|| pair_tolerance_table("planar.is_perpendicular", is_perpendicular_kernel));

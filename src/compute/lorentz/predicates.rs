//! Lorentz comparisons and causal classification: `equal`, `not_equal`,
//! `isclose`, `is_timelike`, `is_spacelike`, `is_lightlike`
//!
//! The causal predicates compare the vector's Minkowski self-product
//! against a caller-supplied tolerance. Comparisons convert mixed-kind
//! operands to Cartesian components; matching temporal kinds are
//! compared raw.

use crate::{
    backend::MathLib,
    compute::{
        convert::{lorentz_to_cartesian, to_t},
        spatial, LoPairBoolKernel, LoPairCloseKernel, LoToleranceKernel,
    },
    coords::{LorentzKind, LORENTZ_KINDS},
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
    a4: Float,
    b1: Float,
    b2: Float,
    b3: Float,
    b4: Float,
) -> bool {
    (a1 == b1) & (a2 == b2) & (a3 == b3) & (a4 == b4)
}

/// Kernel for `equal` under one signature
pub(crate) fn equal_kernel(k1: LorentzKind, k2: LorentzKind) -> LoPairBoolKernel {
    if k1 == k2 {
        Box::new(equal_components)
    } else {
        let (x1, y1, z1, t1) = lorentz_to_cartesian(k1);
        let (x2, y2, z2, t2) = lorentz_to_cartesian(k2);
        Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
            equal_components(
                lib,
                x1(lib, a1, a2),
                y1(lib, a1, a2),
                z1(lib, a1, a2, a3),
                t1(lib, a1, a2, a3, a4),
                x2(lib, b1, b2),
                y2(lib, b1, b2),
                z2(lib, b1, b2, b3),
                t2(lib, b1, b2, b3, b4),
            )
        })
    }
}

/// Kernel for `not_equal` under one signature
pub(crate) fn not_equal_kernel(k1: LorentzKind, k2: LorentzKind) -> LoPairBoolKernel {
    let equal = equal_kernel(k1, k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
        !equal(lib, a1, a2, a3, a4, b1, b2, b3, b4)
    })
}

/// Kernel for `isclose` under one signature
pub(crate) fn isclose_kernel(k1: LorentzKind, k2: LorentzKind) -> LoPairCloseKernel {
    let spatial_isclose = spatial::predicates::isclose_kernel((k1.0, k1.1), (k2.0, k2.1));
    if k1.2 == k2.2 {
        Box::new(
            move |lib: &dyn MathLib, rtol, atol, equal_nan, a1, a2, a3, a4, b1, b2, b3, b4| {
                lib.isclose(a4, b4, rtol, atol, equal_nan)
                    & spatial_isclose(lib, rtol, atol, equal_nan, a1, a2, a3, b1, b2, b3)
            },
        )
    } else {
        let t1 = to_t(k1);
        let t2 = to_t(k2);
        Box::new(
            move |lib: &dyn MathLib, rtol, atol, equal_nan, a1, a2, a3, a4, b1, b2, b3, b4| {
                lib.isclose(
                    t1(lib, a1, a2, a3, a4),
                    t2(lib, b1, b2, b3, b4),
                    rtol,
                    atol,
                    equal_nan,
                ) & spatial_isclose(lib, rtol, atol, equal_nan, a1, a2, a3, b1, b2, b3)
            },
        )
    }
}

/// Kernel for `is_timelike` under one signature
pub(crate) fn is_timelike_kernel(kind: LorentzKind) -> LoToleranceKernel {
    let self_dot = super::arithmetic::dot_kernel(kind, kind);
    Box::new(move |lib: &dyn MathLib, tolerance, c1, c2, c3, c4| {
        self_dot(lib, c1, c2, c3, c4, c1, c2, c3, c4) > lib.absolute(tolerance)
    })
}

/// Kernel for `is_spacelike` under one signature
pub(crate) fn is_spacelike_kernel(kind: LorentzKind) -> LoToleranceKernel {
    let self_dot = super::arithmetic::dot_kernel(kind, kind);
    Box::new(move |lib: &dyn MathLib, tolerance, c1, c2, c3, c4| {
        self_dot(lib, c1, c2, c3, c4, c1, c2, c3, c4) < lib.absolute(tolerance)
    })
}

/// Kernel for `is_lightlike` under one signature
pub(crate) fn is_lightlike_kernel(kind: LorentzKind) -> LoToleranceKernel {
    let self_dot = super::arithmetic::dot_kernel(kind, kind);
    Box::new(move |lib: &dyn MathLib, tolerance, c1, c2, c3, c4| {
        lib.absolute(self_dot(lib, c1, c2, c3, c4, c1, c2, c3, c4)) < lib.absolute(tolerance)
    })
}

type PairBoolTable = DispatchTable<(LorentzKind, LorentzKind), LoPairBoolKernel, ()>;
type ToleranceTable = DispatchTable<LorentzKind, LoToleranceKernel, ()>;

fn pair_bool_table(
    operation: &'static str,
    kernel: fn(LorentzKind, LorentzKind) -> LoPairBoolKernel,
) -> PairBoolTable {
    let mut table = DispatchTable::new(operation);
    for k1 in LORENTZ_KINDS {
        for k2 in LORENTZ_KINDS {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

fn tolerance_table(
    operation: &'static str,
    kernel: fn(LorentzKind) -> LoToleranceKernel,
) -> ToleranceTable {
    let mut table = DispatchTable::new(operation);
    for kind in LORENTZ_KINDS {
        table.register(kind, kernel(kind), ());
    }
    table.built()
}

pub(crate) static EQUAL: Lazy<PairBoolTable> =
    Lazy::new(|| pair_bool_table("lorentz.equal", equal_kernel));

pub(crate) static NOT_EQUAL: Lazy<PairBoolTable> =
    Lazy::new(|| pair_bool_table("lorentz.not_equal", not_equal_kernel));

pub(crate) static ISCLOSE: Lazy<DispatchTable<(LorentzKind, LorentzKind), LoPairCloseKernel, ()>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("lorentz.isclose");
        for k1 in LORENTZ_KINDS {
            for k2 in LORENTZ_KINDS {
                table.register((k1, k2), isclose_kernel(k1, k2), ());
            }
        }
        table.built()
    });

pub(crate) static IS_TIMELIKE: Lazy<ToleranceTable> =
    Lazy::new(|| tolerance_table("lorentz.is_timelike", is_timelike_kernel));

pub(crate) static IS_SPACELIKE: Lazy<ToleranceTable> =
    Lazy::new(|| tolerance_table("lorentz.is_spacelike", is_spacelike_kernel));

pub(crate) static IS_LIGHTLIKE: Lazy<ToleranceTable> =
    Lazy::new(|| tolerance_table("lorentz.is_lightlike", is_lightlike_kernel));

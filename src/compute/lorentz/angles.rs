//! Rapidity-based separations: `delta_rapidity_phi`,
//! `delta_rapidity_phi2`
//!
//! Both are pure converter compositions, generated over the full 144
//! signature pairs.

use crate::{
    backend::MathLib,
    compute::{planar, LoPairScalarKernel},
    coords::{LorentzKind, LORENTZ_KINDS},
    dispatch::DispatchTable,
};

use once_cell::sync::Lazy;

use super::coords::rapidity_native;

/// Kernel for `delta_rapidity_phi2` under one signature
pub(crate) fn delta_rapidity_phi2_kernel(k1: LorentzKind, k2: LorentzKind) -> LoPairScalarKernel {
    let rapidity1 = rapidity_native(k1);
    let rapidity2 = rapidity_native(k2);
    let deltaphi = planar::angles::deltaphi_kernel(k1.0, k2.0);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
        (rapidity1(lib, a1, a2, a3, a4) - rapidity2(lib, b1, b2, b3, b4)).powi(2)
            + deltaphi(lib, a1, a2, b1, b2).powi(2)
    })
}

/// Kernel for `delta_rapidity_phi` under one signature
pub(crate) fn delta_rapidity_phi_kernel(k1: LorentzKind, k2: LorentzKind) -> LoPairScalarKernel {
    let squared = delta_rapidity_phi2_kernel(k1, k2);
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
        lib.sqrt(squared(lib, a1, a2, a3, a4, b1, b2, b3, b4))
    })
}

type PairScalarTable = DispatchTable<(LorentzKind, LorentzKind), LoPairScalarKernel, ()>;

fn pair_scalar_table(
    operation: &'static str,
    kernel: fn(LorentzKind, LorentzKind) -> LoPairScalarKernel,
) -> PairScalarTable {
    let mut table = DispatchTable::new(operation);
    for k1 in LORENTZ_KINDS {
        for k2 in LORENTZ_KINDS {
            table.register((k1, k2), kernel(k1, k2), ());
        }
    }
    table.built()
}

pub(crate) static DELTA_RAPIDITY_PHI: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("lorentz.delta_rapidity_phi", delta_rapidity_phi_kernel));

pub(crate) static DELTA_RAPIDITY_PHI2: Lazy<PairScalarTable> =
    Lazy::new(|| pair_scalar_table("lorentz.delta_rapidity_phi2", delta_rapidity_phi2_kernel));

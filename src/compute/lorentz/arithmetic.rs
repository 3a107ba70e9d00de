//! Lorentz arithmetic: `add`, `subtract`, `dot`, `scale`, `unit`,
//! `to_beta3`
//!
//! The Minkowski metric convention is `(+, -, -, -)`: the dot product is
//! `t1*t2 - (spatial dot)`. `add`/`subtract` delegate the spatial part
//! to the spatial kernels (so same-kind pairs keep their kind) and
//! produce a `T` temporal result when either operand carries `t`; when
//! both carry `tau`, the proper time of the combined vector is recomputed
//! from the result components.

use crate::{
    backend::MathLib,
    compute::{
        convert::{from_t, to_t},
        spatial, LoPairScalarKernel, LoPairVectorKernel, LoParamVectorKernel,
        LoSpatialVectorKernel, LoVectorKernel, SpPairVectorKernel,
    },
    coords::{
        AzimuthalKind::{RhoPhi, Xy},
        LongitudinalKind::{Eta, Theta, Z},
        LorentzKind, SpatialKind,
        TemporalKind::{Tau, T},
        LORENTZ_KINDS,
    },
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

use super::coords::{
    t_rhophi_eta_tau, t_rhophi_theta_tau, t_rhophi_z_tau, t_xy_eta_tau, t_xy_theta_tau, t_xy_z_tau,
};

// ### unit (normalized to unit proper time) ###

pub(crate) fn unit_xy_z_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    z: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let squared = super::coords::tau2_xy_z_t(lib, x, y, z, t);
    let norm = lib.sqrt(lib.absolute(squared));
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        lib.nan_to_num(z / norm, 0.0, inf, -inf),
        lib.nan_to_num(t / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_xy_z_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    z: Float,
    tau: Float,
) -> (Float, Float, Float, Float) {
    let norm = lib.absolute(tau);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        lib.nan_to_num(z / norm, 0.0, inf, -inf),
        lib.copysign(1.0, tau),
    )
}

pub(crate) fn unit_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let squared = super::coords::tau2_xy_theta_t(lib, x, y, theta, t);
    let norm = lib.sqrt(lib.absolute(squared));
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        theta,
        lib.nan_to_num(t / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> (Float, Float, Float, Float) {
    let norm = lib.absolute(tau);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        theta,
        lib.copysign(1.0, tau),
    )
}

pub(crate) fn unit_xy_eta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let squared = super::coords::tau2_xy_eta_t(lib, x, y, eta, t);
    let norm = lib.sqrt(lib.absolute(squared));
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        eta,
        lib.nan_to_num(t / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> (Float, Float, Float, Float) {
    let norm = lib.absolute(tau);
    let inf = lib.inf();
    (
        lib.nan_to_num(x / norm, 0.0, inf, -inf),
        lib.nan_to_num(y / norm, 0.0, inf, -inf),
        eta,
        lib.copysign(1.0, tau),
    )
}

pub(crate) fn unit_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let squared = super::coords::tau2_rhophi_z_t(lib, rho, phi, z, t);
    let norm = lib.sqrt(lib.absolute(squared));
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        lib.nan_to_num(z / norm, 0.0, inf, -inf),
        lib.nan_to_num(t / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> (Float, Float, Float, Float) {
    let norm = lib.absolute(tau);
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        lib.nan_to_num(z / norm, 0.0, inf, -inf),
        lib.copysign(1.0, tau),
    )
}

pub(crate) fn unit_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let squared = super::coords::tau2_rhophi_theta_t(lib, rho, phi, theta, t);
    let norm = lib.sqrt(lib.absolute(squared));
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        theta,
        lib.nan_to_num(t / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> (Float, Float, Float, Float) {
    let norm = lib.absolute(tau);
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        theta,
        lib.copysign(1.0, tau),
    )
}

pub(crate) fn unit_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> (Float, Float, Float, Float) {
    let squared = super::coords::tau2_rhophi_eta_t(lib, rho, phi, eta, t);
    let norm = lib.sqrt(lib.absolute(squared));
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        eta,
        lib.nan_to_num(t / norm, 0.0, inf, -inf),
    )
}

pub(crate) fn unit_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> (Float, Float, Float, Float) {
    let norm = lib.absolute(tau);
    let inf = lib.inf();
    (
        lib.nan_to_num(rho / norm, 0.0, inf, -inf),
        phi,
        eta,
        lib.copysign(1.0, tau),
    )
}

// ### to_beta3 (the spatial velocity; angles are scale-invariant) ###

pub(crate) fn to_beta3_xy_z_t(
    _lib: &dyn MathLib,
    x: Float,
    y: Float,
    z: Float,
    t: Float,
) -> (Float, Float, Float) {
    (x / t, y / t, z / t)
}

pub(crate) fn to_beta3_xy_z_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    z: Float,
    tau: Float,
) -> (Float, Float, Float) {
    to_beta3_xy_z_t(lib, x, y, z, t_xy_z_tau(lib, x, y, z, tau))
}

pub(crate) fn to_beta3_xy_theta_t(
    _lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> (Float, Float, Float) {
    (x / t, y / t, theta)
}

pub(crate) fn to_beta3_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> (Float, Float, Float) {
    to_beta3_xy_theta_t(lib, x, y, theta, t_xy_theta_tau(lib, x, y, theta, tau))
}

pub(crate) fn to_beta3_xy_eta_t(
    _lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    t: Float,
) -> (Float, Float, Float) {
    (x / t, y / t, eta)
}

pub(crate) fn to_beta3_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> (Float, Float, Float) {
    to_beta3_xy_eta_t(lib, x, y, eta, t_xy_eta_tau(lib, x, y, eta, tau))
}

pub(crate) fn to_beta3_rhophi_z_t(
    _lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> (Float, Float, Float) {
    (rho / t, phi, z / t)
}

pub(crate) fn to_beta3_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> (Float, Float, Float) {
    to_beta3_rhophi_z_t(lib, rho, phi, z, t_rhophi_z_tau(lib, rho, phi, z, tau))
}

pub(crate) fn to_beta3_rhophi_theta_t(
    _lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> (Float, Float, Float) {
    (rho / t, phi, theta)
}

pub(crate) fn to_beta3_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> (Float, Float, Float) {
    to_beta3_rhophi_theta_t(lib, rho, phi, theta, t_rhophi_theta_tau(lib, rho, phi, theta, tau))
}

pub(crate) fn to_beta3_rhophi_eta_t(
    _lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> (Float, Float, Float) {
    (rho / t, phi, eta)
}

pub(crate) fn to_beta3_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> (Float, Float, Float) {
    to_beta3_rhophi_eta_t(lib, rho, phi, eta, t_rhophi_eta_tau(lib, rho, phi, eta, tau))
}

/// Kernel for `dot` under one signature
pub(crate) fn dot_kernel(k1: LorentzKind, k2: LorentzKind) -> LoPairScalarKernel {
    let t1 = to_t(k1);
    let t2 = to_t(k2);
    let spatial_dot = spatial::arithmetic::dot_kernel((k1.0, k1.1), (k2.0, k2.1));
    Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
        t1(lib, a1, a2, a3, a4) * t2(lib, b1, b2, b3, b4)
            - spatial_dot(lib, a1, a2, a3, b1, b2, b3)
    })
}

/// Kernel and result kind for `add`/`subtract` under one signature
fn additive_kernel(
    k1: LorentzKind,
    k2: LorentzKind,
    spatial_kernel: fn(SpatialKind, SpatialKind) -> (SpPairVectorKernel, SpatialKind),
    combine: fn(Float, Float) -> Float,
) -> (LoPairVectorKernel, LorentzKind) {
    let (spatial_part, spatial_result) = spatial_kernel((k1.0, k1.1), (k2.0, k2.1));
    let t1 = to_t(k1);
    let t2 = to_t(k2);
    if (k1.2 == T) | (k2.2 == T) {
        let result = (spatial_result.0, spatial_result.1, T);
        let kernel: LoPairVectorKernel =
            Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
                let (c1, c2, c3) = spatial_part(lib, a1, a2, a3, b1, b2, b3);
                (
                    c1,
                    c2,
                    c3,
                    combine(t1(lib, a1, a2, a3, a4), t2(lib, b1, b2, b3, b4)),
                )
            });
        (kernel, result)
    } else {
        let result = (spatial_result.0, spatial_result.1, Tau);
        let tau_back = from_t(result);
        let kernel: LoPairVectorKernel =
            Box::new(move |lib: &dyn MathLib, a1, a2, a3, a4, b1, b2, b3, b4| {
                let (c1, c2, c3) = spatial_part(lib, a1, a2, a3, b1, b2, b3);
                let t = combine(t1(lib, a1, a2, a3, a4), t2(lib, b1, b2, b3, b4));
                (c1, c2, c3, tau_back(lib, c1, c2, c3, t))
            });
        (kernel, result)
    }
}

fn sum_t(t1: Float, t2: Float) -> Float {
    t1 + t2
}

fn difference_t(t1: Float, t2: Float) -> Float {
    t1 - t2
}

/// Kernel and result kind for `add` under one signature
pub(crate) fn add_kernel(k1: LorentzKind, k2: LorentzKind) -> (LoPairVectorKernel, LorentzKind) {
    additive_kernel(k1, k2, spatial::arithmetic::add_kernel, sum_t)
}

/// Kernel and result kind for `subtract` under one signature
pub(crate) fn subtract_kernel(
    k1: LorentzKind,
    k2: LorentzKind,
) -> (LoPairVectorKernel, LorentzKind) {
    additive_kernel(k1, k2, spatial::arithmetic::subtract_kernel, difference_t)
}

/// Kernel for `scale` under one signature (kind-preserving)
pub(crate) fn scale_kernel(kind: LorentzKind) -> LoParamVectorKernel {
    let spatial_scale = spatial::arithmetic::scale_native((kind.0, kind.1));
    Box::new(move |lib: &dyn MathLib, factor, c1, c2, c3, c4| {
        let (s1, s2, s3) = spatial_scale(lib, factor, c1, c2, c3);
        (s1, s2, s3, c4 * factor)
    })
}

fn unit_native(kind: LorentzKind) -> LoVectorKernel {
    match kind {
        (Xy, Z, T) => Box::new(unit_xy_z_t),
        (Xy, Z, Tau) => Box::new(unit_xy_z_tau),
        (Xy, Theta, T) => Box::new(unit_xy_theta_t),
        (Xy, Theta, Tau) => Box::new(unit_xy_theta_tau),
        (Xy, Eta, T) => Box::new(unit_xy_eta_t),
        (Xy, Eta, Tau) => Box::new(unit_xy_eta_tau),
        (RhoPhi, Z, T) => Box::new(unit_rhophi_z_t),
        (RhoPhi, Z, Tau) => Box::new(unit_rhophi_z_tau),
        (RhoPhi, Theta, T) => Box::new(unit_rhophi_theta_t),
        (RhoPhi, Theta, Tau) => Box::new(unit_rhophi_theta_tau),
        (RhoPhi, Eta, T) => Box::new(unit_rhophi_eta_t),
        (RhoPhi, Eta, Tau) => Box::new(unit_rhophi_eta_tau),
    }
}

fn to_beta3_native(kind: LorentzKind) -> LoSpatialVectorKernel {
    match kind {
        (Xy, Z, T) => Box::new(to_beta3_xy_z_t),
        (Xy, Z, Tau) => Box::new(to_beta3_xy_z_tau),
        (Xy, Theta, T) => Box::new(to_beta3_xy_theta_t),
        (Xy, Theta, Tau) => Box::new(to_beta3_xy_theta_tau),
        (Xy, Eta, T) => Box::new(to_beta3_xy_eta_t),
        (Xy, Eta, Tau) => Box::new(to_beta3_xy_eta_tau),
        (RhoPhi, Z, T) => Box::new(to_beta3_rhophi_z_t),
        (RhoPhi, Z, Tau) => Box::new(to_beta3_rhophi_z_tau),
        (RhoPhi, Theta, T) => Box::new(to_beta3_rhophi_theta_t),
        (RhoPhi, Theta, Tau) => Box::new(to_beta3_rhophi_theta_tau),
        (RhoPhi, Eta, T) => Box::new(to_beta3_rhophi_eta_t),
        (RhoPhi, Eta, Tau) => Box::new(to_beta3_rhophi_eta_tau),
    }
}

pub(crate) static DOT: Lazy<DispatchTable<(LorentzKind, LorentzKind), LoPairScalarKernel, ()>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("lorentz.dot");
        for k1 in LORENTZ_KINDS {
            for k2 in LORENTZ_KINDS {
                table.register((k1, k2), dot_kernel(k1, k2), ());
            }
        }
        table.built()
    });

type PairVectorTable = DispatchTable<(LorentzKind, LorentzKind), LoPairVectorKernel, LorentzKind>;

fn pair_vector_table(
    operation: &'static str,
    kernel: fn(LorentzKind, LorentzKind) -> (LoPairVectorKernel, LorentzKind),
) -> PairVectorTable {
    let mut table = DispatchTable::new(operation);
    for k1 in LORENTZ_KINDS {
        for k2 in LORENTZ_KINDS {
            let (f, returns) = kernel(k1, k2);
            table.register((k1, k2), f, returns);
        }
    }
    table.built()
}

pub(crate) static ADD: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("lorentz.add", add_kernel));

pub(crate) static SUBTRACT: Lazy<PairVectorTable> =
    Lazy::new(|| pair_vector_table("lorentz.subtract", subtract_kernel));

pub(crate) static SCALE: Lazy<DispatchTable<LorentzKind, LoParamVectorKernel, LorentzKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("lorentz.scale");
        for kind in LORENTZ_KINDS {
            table.register(kind, scale_kernel(kind), kind);
        }
        table.built()
    });

pub(crate) static UNIT: Lazy<DispatchTable<LorentzKind, LoVectorKernel, LorentzKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("lorentz.unit");
        for kind in LORENTZ_KINDS {
            table.register(kind, unit_native(kind), kind);
        }
        table.built()
    });

pub(crate) static TO_BETA3: Lazy<DispatchTable<LorentzKind, LoSpatialVectorKernel, SpatialKind>> =
    Lazy::new(|| {
        let mut table = DispatchTable::new("lorentz.to_beta3");
        for kind in LORENTZ_KINDS {
            table.register(kind, to_beta3_native(kind), (kind.0, kind.1));
        }
        table.built()
    });

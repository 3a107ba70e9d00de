//! Temporal projections: `t`, `t2`, `tau`, `tau2`, `beta`, `gamma`,
//! `rapidity`, `et`, `et2`, `mt`, `mt2`
//!
//! Mass-sign policy: `tau` and `tau2` preserve the sign of the
//! mass-squared (spacelike vectors yield negative values via `copysign`
//! rather than NaN), while the derived quantities `t2` and `mt2`
//! computed from a `tau`-carrying vector are clamped at zero with
//! `maximum`. Each kernel group states which side of that split it is
//! on.
//!
//! NaN policies: `beta` of a zero-energy vector is 0, `gamma` of a
//! lightlike vector is +inf; both substitutions happen here, inside the
//! kernels, so that batch callers never see exceptions.

use crate::{
    backend::MathLib,
    compute::LoProjection,
    coords::{
        AzimuthalKind::{RhoPhi, Xy},
        LongitudinalKind::{Eta, Theta, Z},
        LorentzKind,
        TemporalKind::{Tau, T},
        LORENTZ_KINDS,
    },
    dispatch::DispatchTable,
    numeric::Float,
};

use once_cell::sync::Lazy;

use super::super::spatial::coords::{
    mag2_rhophi_eta, mag2_rhophi_theta, mag2_rhophi_z, mag2_xy_eta, mag2_xy_theta, mag2_xy_z,
    mag_rhophi_eta, mag_rhophi_theta, mag_rhophi_z, mag_xy_eta, mag_xy_theta, mag_xy_z,
    z_rhophi_eta, z_rhophi_theta, z_xy_eta, z_xy_theta,
};

// ### t ###

pub(crate) fn t_xy_z_t(_lib: &dyn MathLib, _x: Float, _y: Float, _z: Float, t: Float) -> Float {
    t
}

pub(crate) fn t_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    lib.sqrt(t2_xy_z_tau(lib, x, y, z, tau))
}

pub(crate) fn t_xy_theta_t(
    _lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _theta: Float,
    t: Float,
) -> Float {
    t
}

pub(crate) fn t_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(t2_xy_theta_tau(lib, x, y, theta, tau))
}

pub(crate) fn t_xy_eta_t(_lib: &dyn MathLib, _x: Float, _y: Float, _eta: Float, t: Float) -> Float {
    t
}

pub(crate) fn t_xy_eta_tau(lib: &dyn MathLib, x: Float, y: Float, eta: Float, tau: Float) -> Float {
    lib.sqrt(t2_xy_eta_tau(lib, x, y, eta, tau))
}

pub(crate) fn t_rhophi_z_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _z: Float,
    t: Float,
) -> Float {
    t
}

pub(crate) fn t_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    lib.sqrt(t2_rhophi_z_tau(lib, rho, phi, z, tau))
}

pub(crate) fn t_rhophi_theta_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _theta: Float,
    t: Float,
) -> Float {
    t
}

pub(crate) fn t_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(t2_rhophi_theta_tau(lib, rho, phi, theta, tau))
}

pub(crate) fn t_rhophi_eta_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _eta: Float,
    t: Float,
) -> Float {
    t
}

pub(crate) fn t_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(t2_rhophi_eta_tau(lib, rho, phi, eta, tau))
}

// ### t2 (clamped at zero when derived from tau) ###

pub(crate) fn t2_xy_z_t(_lib: &dyn MathLib, _x: Float, _y: Float, _z: Float, t: Float) -> Float {
    t.powi(2)
}

pub(crate) fn t2_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    lib.maximum(tau2_xy_z_tau(lib, x, y, z, tau) + mag2_xy_z(lib, x, y, z), 0.0)
}

pub(crate) fn t2_xy_theta_t(
    _lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _theta: Float,
    t: Float,
) -> Float {
    t.powi(2)
}

pub(crate) fn t2_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_xy_theta_tau(lib, x, y, theta, tau) + mag2_xy_theta(lib, x, y, theta),
        0.0,
    )
}

pub(crate) fn t2_xy_eta_t(
    _lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _eta: Float,
    t: Float,
) -> Float {
    t.powi(2)
}

pub(crate) fn t2_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_xy_eta_tau(lib, x, y, eta, tau) + mag2_xy_eta(lib, x, y, eta),
        0.0,
    )
}

pub(crate) fn t2_rhophi_z_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _z: Float,
    t: Float,
) -> Float {
    t.powi(2)
}

pub(crate) fn t2_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_rhophi_z_tau(lib, rho, phi, z, tau) + mag2_rhophi_z(lib, rho, phi, z),
        0.0,
    )
}

pub(crate) fn t2_rhophi_theta_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _theta: Float,
    t: Float,
) -> Float {
    t.powi(2)
}

pub(crate) fn t2_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_rhophi_theta_tau(lib, rho, phi, theta, tau) + mag2_rhophi_theta(lib, rho, phi, theta),
        0.0,
    )
}

pub(crate) fn t2_rhophi_eta_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _eta: Float,
    t: Float,
) -> Float {
    t.powi(2)
}

pub(crate) fn t2_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_rhophi_eta_tau(lib, rho, phi, eta, tau) + mag2_rhophi_eta(lib, rho, phi, eta),
        0.0,
    )
}

// ### tau2 (sign-preserving) ###

pub(crate) fn tau2_xy_z_t(lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    t.powi(2) - mag2_xy_z(lib, x, y, z)
}

pub(crate) fn tau2_xy_z_tau(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _z: Float,
    tau: Float,
) -> Float {
    lib.copysign(tau.powi(2), tau)
}

pub(crate) fn tau2_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    t.powi(2) - mag2_xy_theta(lib, x, y, theta)
}

pub(crate) fn tau2_xy_theta_tau(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _theta: Float,
    tau: Float,
) -> Float {
    lib.copysign(tau.powi(2), tau)
}

pub(crate) fn tau2_xy_eta_t(lib: &dyn MathLib, x: Float, y: Float, eta: Float, t: Float) -> Float {
    t.powi(2) - mag2_xy_eta(lib, x, y, eta)
}

pub(crate) fn tau2_xy_eta_tau(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _eta: Float,
    tau: Float,
) -> Float {
    lib.copysign(tau.powi(2), tau)
}

pub(crate) fn tau2_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> Float {
    t.powi(2) - mag2_rhophi_z(lib, rho, phi, z)
}

pub(crate) fn tau2_rhophi_z_tau(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _z: Float,
    tau: Float,
) -> Float {
    lib.copysign(tau.powi(2), tau)
}

pub(crate) fn tau2_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    t.powi(2) - mag2_rhophi_theta(lib, rho, phi, theta)
}

pub(crate) fn tau2_rhophi_theta_tau(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _theta: Float,
    tau: Float,
) -> Float {
    lib.copysign(tau.powi(2), tau)
}

pub(crate) fn tau2_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    t.powi(2) - mag2_rhophi_eta(lib, rho, phi, eta)
}

pub(crate) fn tau2_rhophi_eta_tau(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _eta: Float,
    tau: Float,
) -> Float {
    lib.copysign(tau.powi(2), tau)
}

// ### tau (sign-preserving) ###

pub(crate) fn tau_xy_z_t(lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    let squared = tau2_xy_z_t(lib, x, y, z, t);
    lib.copysign(lib.sqrt(lib.absolute(squared)), squared)
}

pub(crate) fn tau_xy_z_tau(
    _lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _z: Float,
    tau: Float,
) -> Float {
    tau
}

pub(crate) fn tau_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    let squared = tau2_xy_theta_t(lib, x, y, theta, t);
    lib.copysign(lib.sqrt(lib.absolute(squared)), squared)
}

pub(crate) fn tau_xy_theta_tau(
    _lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _theta: Float,
    tau: Float,
) -> Float {
    tau
}

pub(crate) fn tau_xy_eta_t(lib: &dyn MathLib, x: Float, y: Float, eta: Float, t: Float) -> Float {
    let squared = tau2_xy_eta_t(lib, x, y, eta, t);
    lib.copysign(lib.sqrt(lib.absolute(squared)), squared)
}

pub(crate) fn tau_xy_eta_tau(
    _lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    _eta: Float,
    tau: Float,
) -> Float {
    tau
}

pub(crate) fn tau_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> Float {
    let squared = tau2_rhophi_z_t(lib, rho, phi, z, t);
    lib.copysign(lib.sqrt(lib.absolute(squared)), squared)
}

pub(crate) fn tau_rhophi_z_tau(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _z: Float,
    tau: Float,
) -> Float {
    tau
}

pub(crate) fn tau_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    let squared = tau2_rhophi_theta_t(lib, rho, phi, theta, t);
    lib.copysign(lib.sqrt(lib.absolute(squared)), squared)
}

pub(crate) fn tau_rhophi_theta_tau(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _theta: Float,
    tau: Float,
) -> Float {
    tau
}

pub(crate) fn tau_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    let squared = tau2_rhophi_eta_t(lib, rho, phi, eta, t);
    lib.copysign(lib.sqrt(lib.absolute(squared)), squared)
}

pub(crate) fn tau_rhophi_eta_tau(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    _eta: Float,
    tau: Float,
) -> Float {
    tau
}

// ### beta (NaN from 0/0 maps to 0) ###

pub(crate) fn beta_xy_z_t(lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(mag_xy_z(lib, x, y, z) / t, 0.0, inf, -inf)
}

pub(crate) fn beta_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        mag_xy_z(lib, x, y, z) / t_xy_z_tau(lib, x, y, z, tau),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn beta_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(mag_xy_theta(lib, x, y, theta) / t, 0.0, inf, -inf)
}

pub(crate) fn beta_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        mag_xy_theta(lib, x, y, theta) / t_xy_theta_tau(lib, x, y, theta, tau),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn beta_xy_eta_t(lib: &dyn MathLib, x: Float, y: Float, eta: Float, t: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(mag_xy_eta(lib, x, y, eta) / t, 0.0, inf, -inf)
}

pub(crate) fn beta_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        mag_xy_eta(lib, x, y, eta) / t_xy_eta_tau(lib, x, y, eta, tau),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn beta_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(mag_rhophi_z(lib, rho, phi, z) / t, 0.0, inf, -inf)
}

pub(crate) fn beta_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        mag_rhophi_z(lib, rho, phi, z) / t_rhophi_z_tau(lib, rho, phi, z, tau),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn beta_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(mag_rhophi_theta(lib, rho, phi, theta) / t, 0.0, inf, -inf)
}

pub(crate) fn beta_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        mag_rhophi_theta(lib, rho, phi, theta) / t_rhophi_theta_tau(lib, rho, phi, theta, tau),
        0.0,
        inf,
        -inf,
    )
}

pub(crate) fn beta_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(mag_rhophi_eta(lib, rho, phi, eta) / t, 0.0, inf, -inf)
}

pub(crate) fn beta_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        mag_rhophi_eta(lib, rho, phi, eta) / t_rhophi_eta_tau(lib, rho, phi, eta, tau),
        0.0,
        inf,
        -inf,
    )
}

// ### gamma (NaN from 0/0 maps to +inf: lightlike limit) ###

pub(crate) fn gamma_xy_z_t(lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t / tau_xy_z_t(lib, x, y, z, t), inf, inf, -inf)
}

pub(crate) fn gamma_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t_xy_z_tau(lib, x, y, z, tau) / tau, inf, inf, -inf)
}

pub(crate) fn gamma_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t / tau_xy_theta_t(lib, x, y, theta, t), inf, inf, -inf)
}

pub(crate) fn gamma_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t_xy_theta_tau(lib, x, y, theta, tau) / tau, inf, inf, -inf)
}

pub(crate) fn gamma_xy_eta_t(lib: &dyn MathLib, x: Float, y: Float, eta: Float, t: Float) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t / tau_xy_eta_t(lib, x, y, eta, t), inf, inf, -inf)
}

pub(crate) fn gamma_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t_xy_eta_tau(lib, x, y, eta, tau) / tau, inf, inf, -inf)
}

pub(crate) fn gamma_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t / tau_rhophi_z_t(lib, rho, phi, z, t), inf, inf, -inf)
}

pub(crate) fn gamma_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t_rhophi_z_tau(lib, rho, phi, z, tau) / tau, inf, inf, -inf)
}

pub(crate) fn gamma_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t / tau_rhophi_theta_t(lib, rho, phi, theta, t), inf, inf, -inf)
}

pub(crate) fn gamma_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(
        t_rhophi_theta_tau(lib, rho, phi, theta, tau) / tau,
        inf,
        inf,
        -inf,
    )
}

pub(crate) fn gamma_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t / tau_rhophi_eta_t(lib, rho, phi, eta, t), inf, inf, -inf)
}

pub(crate) fn gamma_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    let inf = lib.inf();
    lib.nan_to_num(t_rhophi_eta_tau(lib, rho, phi, eta, tau) / tau, inf, inf, -inf)
}

// ### rapidity ###

pub(crate) fn rapidity_xy_z_t(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    z: Float,
    t: Float,
) -> Float {
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_xy_z_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    z: Float,
    tau: Float,
) -> Float {
    let t = t_xy_z_tau(lib, x, y, z, tau);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    let z = z_xy_theta(lib, x, y, theta);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    let z = z_xy_theta(lib, x, y, theta);
    let t = t_xy_theta_tau(lib, x, y, theta, tau);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_xy_eta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    t: Float,
) -> Float {
    let z = z_xy_eta(lib, x, y, eta);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    let z = z_xy_eta(lib, x, y, eta);
    let t = t_xy_eta_tau(lib, x, y, eta, tau);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_rhophi_z_t(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    z: Float,
    t: Float,
) -> Float {
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    let t = t_rhophi_z_tau(lib, rho, phi, z, tau);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    let z = z_rhophi_theta(lib, rho, phi, theta);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    let z = z_rhophi_theta(lib, rho, phi, theta);
    let t = t_rhophi_theta_tau(lib, rho, phi, theta, tau);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    let z = z_rhophi_eta(lib, rho, phi, eta);
    0.5 * lib.ln((t + z) / (t - z))
}

pub(crate) fn rapidity_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    let z = z_rhophi_eta(lib, rho, phi, eta);
    let t = t_rhophi_eta_tau(lib, rho, phi, eta, tau);
    0.5 * lib.ln((t + z) / (t - z))
}

// ### et2 ###

pub(crate) fn et2_xy_z_t(_lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    let pt2 = x.powi(2) + y.powi(2);
    t.powi(2) * pt2 / (pt2 + z.powi(2))
}

pub(crate) fn et2_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    et2_xy_z_t(lib, x, y, z, t_xy_z_tau(lib, x, y, z, tau))
}

pub(crate) fn et2_xy_theta_t(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    theta: Float,
    t: Float,
) -> Float {
    (t * lib.sin(theta)).powi(2)
}

pub(crate) fn et2_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    et2_xy_theta_t(lib, x, y, theta, t_xy_theta_tau(lib, x, y, theta, tau))
}

pub(crate) fn et2_xy_eta_t(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    eta: Float,
    t: Float,
) -> Float {
    let expmeta = lib.exp(-eta);
    (t * (2.0 / (expmeta + 1.0 / expmeta))).powi(2)
}

pub(crate) fn et2_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    et2_xy_eta_t(lib, x, y, eta, t_xy_eta_tau(lib, x, y, eta, tau))
}

pub(crate) fn et2_rhophi_z_t(
    _lib: &dyn MathLib,
    rho: Float,
    _phi: Float,
    z: Float,
    t: Float,
) -> Float {
    let pt2 = rho.powi(2);
    t.powi(2) * pt2 / (pt2 + z.powi(2))
}

pub(crate) fn et2_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    et2_rhophi_z_t(lib, rho, phi, z, t_rhophi_z_tau(lib, rho, phi, z, tau))
}

pub(crate) fn et2_rhophi_theta_t(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    (t * lib.sin(theta)).powi(2)
}

pub(crate) fn et2_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    et2_rhophi_theta_t(lib, rho, phi, theta, t_rhophi_theta_tau(lib, rho, phi, theta, tau))
}

pub(crate) fn et2_rhophi_eta_t(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    let expmeta = lib.exp(-eta);
    (t * (2.0 / (expmeta + 1.0 / expmeta))).powi(2)
}

pub(crate) fn et2_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    et2_rhophi_eta_t(lib, rho, phi, eta, t_rhophi_eta_tau(lib, rho, phi, eta, tau))
}

// ### et ###

pub(crate) fn et_xy_z_t(lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    lib.sqrt(et2_xy_z_t(lib, x, y, z, t))
}

pub(crate) fn et_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    et_xy_z_t(lib, x, y, z, t_xy_z_tau(lib, x, y, z, tau))
}

pub(crate) fn et_xy_theta_t(
    lib: &dyn MathLib,
    _x: Float,
    _y: Float,
    theta: Float,
    t: Float,
) -> Float {
    t * lib.sin(theta)
}

pub(crate) fn et_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    et_xy_theta_t(lib, x, y, theta, t_xy_theta_tau(lib, x, y, theta, tau))
}

pub(crate) fn et_xy_eta_t(lib: &dyn MathLib, _x: Float, _y: Float, eta: Float, t: Float) -> Float {
    let expmeta = lib.exp(-eta);
    t * (2.0 / (expmeta + 1.0 / expmeta))
}

pub(crate) fn et_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    et_xy_eta_t(lib, x, y, eta, t_xy_eta_tau(lib, x, y, eta, tau))
}

pub(crate) fn et_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    _phi: Float,
    z: Float,
    t: Float,
) -> Float {
    t * rho / lib.sqrt(rho.powi(2) + z.powi(2))
}

pub(crate) fn et_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    et_rhophi_z_t(lib, rho, phi, z, t_rhophi_z_tau(lib, rho, phi, z, tau))
}

pub(crate) fn et_rhophi_theta_t(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    t * lib.sin(theta)
}

pub(crate) fn et_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    et_rhophi_theta_t(lib, rho, phi, theta, t_rhophi_theta_tau(lib, rho, phi, theta, tau))
}

pub(crate) fn et_rhophi_eta_t(
    lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    let expmeta = lib.exp(-eta);
    t * (2.0 / (expmeta + 1.0 / expmeta))
}

pub(crate) fn et_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    et_rhophi_eta_t(lib, rho, phi, eta, t_rhophi_eta_tau(lib, rho, phi, eta, tau))
}

// ### mt2 (clamped at zero when derived from tau) ###

pub(crate) fn mt2_xy_z_t(_lib: &dyn MathLib, _x: Float, _y: Float, z: Float, t: Float) -> Float {
    t.powi(2) - z.powi(2)
}

pub(crate) fn mt2_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    lib.maximum(
        tau2_xy_z_tau(lib, x, y, z, tau) + x.powi(2) + y.powi(2),
        0.0,
    )
}

pub(crate) fn mt2_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    mt2_xy_z_t(lib, x, y, z_xy_theta(lib, x, y, theta), t)
}

pub(crate) fn mt2_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_xy_theta_tau(lib, x, y, theta, tau) + x.powi(2) + y.powi(2),
        0.0,
    )
}

pub(crate) fn mt2_xy_eta_t(lib: &dyn MathLib, x: Float, y: Float, eta: Float, t: Float) -> Float {
    mt2_xy_z_t(lib, x, y, z_xy_eta(lib, x, y, eta), t)
}

pub(crate) fn mt2_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_xy_eta_tau(lib, x, y, eta, tau) + x.powi(2) + y.powi(2),
        0.0,
    )
}

pub(crate) fn mt2_rhophi_z_t(
    _lib: &dyn MathLib,
    _rho: Float,
    _phi: Float,
    z: Float,
    t: Float,
) -> Float {
    t.powi(2) - z.powi(2)
}

pub(crate) fn mt2_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    lib.maximum(tau2_rhophi_z_tau(lib, rho, phi, z, tau) + rho.powi(2), 0.0)
}

pub(crate) fn mt2_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    mt2_rhophi_z_t(lib, rho, phi, z_rhophi_theta(lib, rho, phi, theta), t)
}

pub(crate) fn mt2_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_rhophi_theta_tau(lib, rho, phi, theta, tau) + rho.powi(2),
        0.0,
    )
}

pub(crate) fn mt2_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    mt2_rhophi_z_t(lib, rho, phi, z_rhophi_eta(lib, rho, phi, eta), t)
}

pub(crate) fn mt2_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.maximum(
        tau2_rhophi_eta_tau(lib, rho, phi, eta, tau) + rho.powi(2),
        0.0,
    )
}

// ### mt ###

pub(crate) fn mt_xy_z_t(lib: &dyn MathLib, x: Float, y: Float, z: Float, t: Float) -> Float {
    lib.sqrt(mt2_xy_z_t(lib, x, y, z, t))
}

pub(crate) fn mt_xy_z_tau(lib: &dyn MathLib, x: Float, y: Float, z: Float, tau: Float) -> Float {
    lib.sqrt(mt2_xy_z_tau(lib, x, y, z, tau))
}

pub(crate) fn mt_xy_theta_t(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    t: Float,
) -> Float {
    lib.sqrt(mt2_xy_theta_t(lib, x, y, theta, t))
}

pub(crate) fn mt_xy_theta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(mt2_xy_theta_tau(lib, x, y, theta, tau))
}

pub(crate) fn mt_xy_eta_t(lib: &dyn MathLib, x: Float, y: Float, eta: Float, t: Float) -> Float {
    lib.sqrt(mt2_xy_eta_t(lib, x, y, eta, t))
}

pub(crate) fn mt_xy_eta_tau(
    lib: &dyn MathLib,
    x: Float,
    y: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(mt2_xy_eta_tau(lib, x, y, eta, tau))
}

pub(crate) fn mt_rhophi_z_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    t: Float,
) -> Float {
    lib.sqrt(mt2_rhophi_z_t(lib, rho, phi, z, t))
}

pub(crate) fn mt_rhophi_z_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    z: Float,
    tau: Float,
) -> Float {
    lib.sqrt(mt2_rhophi_z_tau(lib, rho, phi, z, tau))
}

pub(crate) fn mt_rhophi_theta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    t: Float,
) -> Float {
    lib.sqrt(mt2_rhophi_theta_t(lib, rho, phi, theta, t))
}

pub(crate) fn mt_rhophi_theta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    theta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(mt2_rhophi_theta_tau(lib, rho, phi, theta, tau))
}

pub(crate) fn mt_rhophi_eta_t(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    t: Float,
) -> Float {
    lib.sqrt(mt2_rhophi_eta_t(lib, rho, phi, eta, t))
}

pub(crate) fn mt_rhophi_eta_tau(
    lib: &dyn MathLib,
    rho: Float,
    phi: Float,
    eta: Float,
    tau: Float,
) -> Float {
    lib.sqrt(mt2_rhophi_eta_tau(lib, rho, phi, eta, tau))
}

/// Table of one temporal projection
type Projection = DispatchTable<LorentzKind, LoProjection, ()>;

fn projection(operation: &'static str, native: fn(LorentzKind) -> LoProjection) -> Projection {
    let mut table = DispatchTable::new(operation);
    for kind in LORENTZ_KINDS {
        table.register(kind, native(kind), ());
    }
    table.built()
}

fn t2_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => t2_xy_z_t,
        (Xy, Z, Tau) => t2_xy_z_tau,
        (Xy, Theta, T) => t2_xy_theta_t,
        (Xy, Theta, Tau) => t2_xy_theta_tau,
        (Xy, Eta, T) => t2_xy_eta_t,
        (Xy, Eta, Tau) => t2_xy_eta_tau,
        (RhoPhi, Z, T) => t2_rhophi_z_t,
        (RhoPhi, Z, Tau) => t2_rhophi_z_tau,
        (RhoPhi, Theta, T) => t2_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => t2_rhophi_theta_tau,
        (RhoPhi, Eta, T) => t2_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => t2_rhophi_eta_tau,
    }
}

pub(crate) fn tau2_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => tau2_xy_z_t,
        (Xy, Z, Tau) => tau2_xy_z_tau,
        (Xy, Theta, T) => tau2_xy_theta_t,
        (Xy, Theta, Tau) => tau2_xy_theta_tau,
        (Xy, Eta, T) => tau2_xy_eta_t,
        (Xy, Eta, Tau) => tau2_xy_eta_tau,
        (RhoPhi, Z, T) => tau2_rhophi_z_t,
        (RhoPhi, Z, Tau) => tau2_rhophi_z_tau,
        (RhoPhi, Theta, T) => tau2_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => tau2_rhophi_theta_tau,
        (RhoPhi, Eta, T) => tau2_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => tau2_rhophi_eta_tau,
    }
}

fn beta_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => beta_xy_z_t,
        (Xy, Z, Tau) => beta_xy_z_tau,
        (Xy, Theta, T) => beta_xy_theta_t,
        (Xy, Theta, Tau) => beta_xy_theta_tau,
        (Xy, Eta, T) => beta_xy_eta_t,
        (Xy, Eta, Tau) => beta_xy_eta_tau,
        (RhoPhi, Z, T) => beta_rhophi_z_t,
        (RhoPhi, Z, Tau) => beta_rhophi_z_tau,
        (RhoPhi, Theta, T) => beta_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => beta_rhophi_theta_tau,
        (RhoPhi, Eta, T) => beta_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => beta_rhophi_eta_tau,
    }
}

fn gamma_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => gamma_xy_z_t,
        (Xy, Z, Tau) => gamma_xy_z_tau,
        (Xy, Theta, T) => gamma_xy_theta_t,
        (Xy, Theta, Tau) => gamma_xy_theta_tau,
        (Xy, Eta, T) => gamma_xy_eta_t,
        (Xy, Eta, Tau) => gamma_xy_eta_tau,
        (RhoPhi, Z, T) => gamma_rhophi_z_t,
        (RhoPhi, Z, Tau) => gamma_rhophi_z_tau,
        (RhoPhi, Theta, T) => gamma_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => gamma_rhophi_theta_tau,
        (RhoPhi, Eta, T) => gamma_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => gamma_rhophi_eta_tau,
    }
}

pub(crate) fn rapidity_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => rapidity_xy_z_t,
        (Xy, Z, Tau) => rapidity_xy_z_tau,
        (Xy, Theta, T) => rapidity_xy_theta_t,
        (Xy, Theta, Tau) => rapidity_xy_theta_tau,
        (Xy, Eta, T) => rapidity_xy_eta_t,
        (Xy, Eta, Tau) => rapidity_xy_eta_tau,
        (RhoPhi, Z, T) => rapidity_rhophi_z_t,
        (RhoPhi, Z, Tau) => rapidity_rhophi_z_tau,
        (RhoPhi, Theta, T) => rapidity_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => rapidity_rhophi_theta_tau,
        (RhoPhi, Eta, T) => rapidity_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => rapidity_rhophi_eta_tau,
    }
}

fn et2_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => et2_xy_z_t,
        (Xy, Z, Tau) => et2_xy_z_tau,
        (Xy, Theta, T) => et2_xy_theta_t,
        (Xy, Theta, Tau) => et2_xy_theta_tau,
        (Xy, Eta, T) => et2_xy_eta_t,
        (Xy, Eta, Tau) => et2_xy_eta_tau,
        (RhoPhi, Z, T) => et2_rhophi_z_t,
        (RhoPhi, Z, Tau) => et2_rhophi_z_tau,
        (RhoPhi, Theta, T) => et2_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => et2_rhophi_theta_tau,
        (RhoPhi, Eta, T) => et2_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => et2_rhophi_eta_tau,
    }
}

fn et_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => et_xy_z_t,
        (Xy, Z, Tau) => et_xy_z_tau,
        (Xy, Theta, T) => et_xy_theta_t,
        (Xy, Theta, Tau) => et_xy_theta_tau,
        (Xy, Eta, T) => et_xy_eta_t,
        (Xy, Eta, Tau) => et_xy_eta_tau,
        (RhoPhi, Z, T) => et_rhophi_z_t,
        (RhoPhi, Z, Tau) => et_rhophi_z_tau,
        (RhoPhi, Theta, T) => et_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => et_rhophi_theta_tau,
        (RhoPhi, Eta, T) => et_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => et_rhophi_eta_tau,
    }
}

fn mt2_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => mt2_xy_z_t,
        (Xy, Z, Tau) => mt2_xy_z_tau,
        (Xy, Theta, T) => mt2_xy_theta_t,
        (Xy, Theta, Tau) => mt2_xy_theta_tau,
        (Xy, Eta, T) => mt2_xy_eta_t,
        (Xy, Eta, Tau) => mt2_xy_eta_tau,
        (RhoPhi, Z, T) => mt2_rhophi_z_t,
        (RhoPhi, Z, Tau) => mt2_rhophi_z_tau,
        (RhoPhi, Theta, T) => mt2_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => mt2_rhophi_theta_tau,
        (RhoPhi, Eta, T) => mt2_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => mt2_rhophi_eta_tau,
    }
}

fn mt_native(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => mt_xy_z_t,
        (Xy, Z, Tau) => mt_xy_z_tau,
        (Xy, Theta, T) => mt_xy_theta_t,
        (Xy, Theta, Tau) => mt_xy_theta_tau,
        (Xy, Eta, T) => mt_xy_eta_t,
        (Xy, Eta, Tau) => mt_xy_eta_tau,
        (RhoPhi, Z, T) => mt_rhophi_z_t,
        (RhoPhi, Z, Tau) => mt_rhophi_z_tau,
        (RhoPhi, Theta, T) => mt_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => mt_rhophi_theta_tau,
        (RhoPhi, Eta, T) => mt_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => mt_rhophi_eta_tau,
    }
}

pub(crate) static T_TABLE: Lazy<Projection> =
    Lazy::new(|| projection("lorentz.t", crate::compute::convert::to_t));
pub(crate) static T2: Lazy<Projection> = Lazy::new(|| projection("lorentz.t2", t2_native));
pub(crate) static TAU_TABLE: Lazy<Projection> =
    Lazy::new(|| projection("lorentz.tau", crate::compute::convert::to_tau));
pub(crate) static TAU2: Lazy<Projection> = Lazy::new(|| projection("lorentz.tau2", tau2_native));
pub(crate) static BETA: Lazy<Projection> = Lazy::new(|| projection("lorentz.beta", beta_native));
pub(crate) static GAMMA: Lazy<Projection> = Lazy::new(|| projection("lorentz.gamma", gamma_native));
pub(crate) static RAPIDITY: Lazy<Projection> =
    Lazy::new(|| projection("lorentz.rapidity", rapidity_native));
pub(crate) static ET: Lazy<Projection> = Lazy::new(|| projection("lorentz.et", et_native));
pub(crate) static ET2: Lazy<Projection> = Lazy::new(|| projection("lorentz.et2", et2_native));
pub(crate) static MT: Lazy<Projection> = Lazy::new(|| projection("lorentz.mt", mt_native));
pub(crate) static MT2: Lazy<Projection> = Lazy::new(|| projection("lorentz.mt2", mt2_native));

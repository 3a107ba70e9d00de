//! Converter selection for kernel generation
//!
//! These factories map a coordinate kind to the native projection kernel
//! that re-expresses an operand's components in the canonical (Cartesian)
//! parameterization. Table builders call them once per kind combination
//! and close over the returned function pointers, so that every generated
//! kernel is bound to its converters explicitly at build time; nothing is
//! looked up per call.

use super::{lorentz, planar, spatial, AzProjection, LoProjection, SpProjection};
use crate::coords::{
    AzimuthalKind::{self, RhoPhi, Xy},
    LongitudinalKind::{Eta, Theta, Z},
    LorentzKind, SpatialKind,
    TemporalKind::{Tau, T},
};

/// Native kernel computing `x` from azimuthal components of `kind`
pub(crate) fn to_x(kind: AzimuthalKind) -> AzProjection {
    match kind {
        Xy => planar::coords::x_xy,
        RhoPhi => planar::coords::x_rhophi,
    }
}

/// Native kernel computing `y` from azimuthal components of `kind`
pub(crate) fn to_y(kind: AzimuthalKind) -> AzProjection {
    match kind {
        Xy => planar::coords::y_xy,
        RhoPhi => planar::coords::y_rhophi,
    }
}

/// Native kernel computing `rho` from azimuthal components of `kind`
pub(crate) fn to_rho(kind: AzimuthalKind) -> AzProjection {
    match kind {
        Xy => planar::coords::rho_xy,
        RhoPhi => planar::coords::rho_rhophi,
    }
}

/// Native kernel computing `phi` from azimuthal components of `kind`
pub(crate) fn to_phi(kind: AzimuthalKind) -> AzProjection {
    match kind {
        Xy => planar::coords::phi_xy,
        RhoPhi => planar::coords::phi_rhophi,
    }
}

/// Native kernel computing `z` from spatial components of `kind`
pub(crate) fn to_z(kind: SpatialKind) -> SpProjection {
    match kind {
        (Xy, Z) => spatial::coords::z_xy_z,
        (Xy, Theta) => spatial::coords::z_xy_theta,
        (Xy, Eta) => spatial::coords::z_xy_eta,
        (RhoPhi, Z) => spatial::coords::z_rhophi_z,
        (RhoPhi, Theta) => spatial::coords::z_rhophi_theta,
        (RhoPhi, Eta) => spatial::coords::z_rhophi_eta,
    }
}

/// Native kernel computing `theta` from spatial components of `kind`
pub(crate) fn to_theta(kind: SpatialKind) -> SpProjection {
    match kind {
        (Xy, Z) => spatial::coords::theta_xy_z,
        (Xy, Theta) => spatial::coords::theta_xy_theta,
        (Xy, Eta) => spatial::coords::theta_xy_eta,
        (RhoPhi, Z) => spatial::coords::theta_rhophi_z,
        (RhoPhi, Theta) => spatial::coords::theta_rhophi_theta,
        (RhoPhi, Eta) => spatial::coords::theta_rhophi_eta,
    }
}

/// Native kernel computing `eta` from spatial components of `kind`
pub(crate) fn to_eta(kind: SpatialKind) -> SpProjection {
    match kind {
        (Xy, Z) => spatial::coords::eta_xy_z,
        (Xy, Theta) => spatial::coords::eta_xy_theta,
        (Xy, Eta) => spatial::coords::eta_xy_eta,
        (RhoPhi, Z) => spatial::coords::eta_rhophi_z,
        (RhoPhi, Theta) => spatial::coords::eta_rhophi_theta,
        (RhoPhi, Eta) => spatial::coords::eta_rhophi_eta,
    }
}

/// Native kernel computing the spatial magnitude from components of `kind`
pub(crate) fn to_mag(kind: SpatialKind) -> SpProjection {
    match kind {
        (Xy, Z) => spatial::coords::mag_xy_z,
        (Xy, Theta) => spatial::coords::mag_xy_theta,
        (Xy, Eta) => spatial::coords::mag_xy_eta,
        (RhoPhi, Z) => spatial::coords::mag_rhophi_z,
        (RhoPhi, Theta) => spatial::coords::mag_rhophi_theta,
        (RhoPhi, Eta) => spatial::coords::mag_rhophi_eta,
    }
}

/// Native kernel computing `t` from Lorentz components of `kind`
pub(crate) fn to_t(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => lorentz::coords::t_xy_z_t,
        (Xy, Z, Tau) => lorentz::coords::t_xy_z_tau,
        (Xy, Theta, T) => lorentz::coords::t_xy_theta_t,
        (Xy, Theta, Tau) => lorentz::coords::t_xy_theta_tau,
        (Xy, Eta, T) => lorentz::coords::t_xy_eta_t,
        (Xy, Eta, Tau) => lorentz::coords::t_xy_eta_tau,
        (RhoPhi, Z, T) => lorentz::coords::t_rhophi_z_t,
        (RhoPhi, Z, Tau) => lorentz::coords::t_rhophi_z_tau,
        (RhoPhi, Theta, T) => lorentz::coords::t_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => lorentz::coords::t_rhophi_theta_tau,
        (RhoPhi, Eta, T) => lorentz::coords::t_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => lorentz::coords::t_rhophi_eta_tau,
    }
}

/// Native kernel computing `tau` from Lorentz components of `kind`
pub(crate) fn to_tau(kind: LorentzKind) -> LoProjection {
    match kind {
        (Xy, Z, T) => lorentz::coords::tau_xy_z_t,
        (Xy, Z, Tau) => lorentz::coords::tau_xy_z_tau,
        (Xy, Theta, T) => lorentz::coords::tau_xy_theta_t,
        (Xy, Theta, Tau) => lorentz::coords::tau_xy_theta_tau,
        (Xy, Eta, T) => lorentz::coords::tau_xy_eta_t,
        (Xy, Eta, Tau) => lorentz::coords::tau_xy_eta_tau,
        (RhoPhi, Z, T) => lorentz::coords::tau_rhophi_z_t,
        (RhoPhi, Z, Tau) => lorentz::coords::tau_rhophi_z_tau,
        (RhoPhi, Theta, T) => lorentz::coords::tau_rhophi_theta_t,
        (RhoPhi, Theta, Tau) => lorentz::coords::tau_rhophi_theta_tau,
        (RhoPhi, Eta, T) => lorentz::coords::tau_rhophi_eta_t,
        (RhoPhi, Eta, Tau) => lorentz::coords::tau_rhophi_eta_tau,
    }
}

/// Native kernel re-expressing a Cartesian `z` in `kind`'s longitudinal
/// parameterization, given azimuthal components of `kind`'s azimuthal
/// parameterization as the first two arguments
pub(crate) fn from_z(kind: SpatialKind) -> SpProjection {
    match kind.1 {
        Z => to_z((kind.0, Z)),
        Theta => to_theta((kind.0, Z)),
        Eta => to_eta((kind.0, Z)),
    }
}

/// Native kernel re-expressing a Cartesian `t` in `kind`'s temporal
/// parameterization, given spatial components of `kind`'s spatial
/// parameterization as the first three arguments
pub(crate) fn from_t(kind: LorentzKind) -> LoProjection {
    match kind.2 {
        T => to_t((kind.0, kind.1, T)),
        Tau => to_tau((kind.0, kind.1, T)),
    }
}

/// Converters bringing a spatial operand to Cartesian `(x, y, z)`
pub(crate) fn spatial_to_cartesian(
    kind: SpatialKind,
) -> (AzProjection, AzProjection, SpProjection) {
    (to_x(kind.0), to_y(kind.0), to_z(kind))
}

/// Converters bringing a Lorentz operand to Cartesian `(x, y, z, t)`
pub(crate) fn lorentz_to_cartesian(
    kind: LorentzKind,
) -> (AzProjection, AzProjection, SpProjection, LoProjection) {
    (to_x(kind.0), to_y(kind.0), to_z((kind.0, kind.1)), to_t(kind))
}

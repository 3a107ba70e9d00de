//! Coordinate kinds and coordinate storage
//!
//! A vector's components are grouped into up to three independent axes:
//! azimuthal (direction in the transverse plane), longitudinal (direction
//! out of the plane) and temporal (time-like component). Each axis can be
//! parameterized in a small, closed set of ways; the parameterization in
//! use is the axis's *kind*.
//!
//! Kinds serve as dispatch keys only. They are plain fieldless enums, so
//! that looking up a kernel is a direct enum-tuple table lookup, and the
//! coordinate data itself lives in the tagged unions below.

use crate::numeric::Float;

/// Azimuthal parameterizations: Cartesian or polar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AzimuthalKind {
    /// Cartesian transverse coordinates `(x, y)`
    Xy,
    /// Polar transverse coordinates `(rho, phi)`
    RhoPhi,
}
//
impl AzimuthalKind {
    /// All azimuthal kinds, in canonical order
    pub const ALL: [Self; 2] = [Self::Xy, Self::RhoPhi];
}

/// Longitudinal parameterizations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LongitudinalKind {
    /// Cartesian coordinate `z`
    Z,
    /// Polar angle from the +z axis, in radians
    Theta,
    /// Pseudorapidity `-ln(tan(theta/2))`
    Eta,
}
//
impl LongitudinalKind {
    /// All longitudinal kinds, in canonical order
    pub const ALL: [Self; 3] = [Self::Z, Self::Theta, Self::Eta];
}

/// Temporal parameterizations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TemporalKind {
    /// Coordinate time (or energy, for a 4-momentum)
    T,
    /// Proper time (or invariant mass)
    Tau,
}
//
impl TemporalKind {
    /// All temporal kinds, in canonical order
    pub const ALL: [Self; 2] = [Self::T, Self::Tau];
}

/// Kind signature of a spatial (3D) vector
pub type SpatialKind = (AzimuthalKind, LongitudinalKind);

/// Kind signature of a Lorentz (4D) vector
pub type LorentzKind = (AzimuthalKind, LongitudinalKind, TemporalKind);

/// All 6 spatial kind combinations, in canonical order
pub const SPATIAL_KINDS: [SpatialKind; 6] = [
    (AzimuthalKind::Xy, LongitudinalKind::Z),
    (AzimuthalKind::Xy, LongitudinalKind::Theta),
    (AzimuthalKind::Xy, LongitudinalKind::Eta),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Z),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Theta),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Eta),
];

/// All 12 Lorentz kind combinations, in canonical order
pub const LORENTZ_KINDS: [LorentzKind; 12] = [
    (AzimuthalKind::Xy, LongitudinalKind::Z, TemporalKind::T),
    (AzimuthalKind::Xy, LongitudinalKind::Z, TemporalKind::Tau),
    (AzimuthalKind::Xy, LongitudinalKind::Theta, TemporalKind::T),
    (AzimuthalKind::Xy, LongitudinalKind::Theta, TemporalKind::Tau),
    (AzimuthalKind::Xy, LongitudinalKind::Eta, TemporalKind::T),
    (AzimuthalKind::Xy, LongitudinalKind::Eta, TemporalKind::Tau),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Z, TemporalKind::T),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Z, TemporalKind::Tau),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Theta, TemporalKind::T),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Theta, TemporalKind::Tau),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Eta, TemporalKind::T),
    (AzimuthalKind::RhoPhi, LongitudinalKind::Eta, TemporalKind::Tau),
];

/// Euler-angle conventions, named by their axis order
///
/// The first six are proper Euler angles, the last six Tait-Bryan
/// angles. Angle names and order follow ROOT's `Math::EulerAngles`
/// convention, with `zxz` as the customary default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum EulerOrder {
    Xzx,
    Xyx,
    Yxy,
    Yzy,
    Zyz,
    Zxz,
    Xzy,
    Xyz,
    Yxz,
    Yzx,
    Zyx,
    Zxy,
}
//
impl EulerOrder {
    /// All twelve conventions, proper Euler angles first
    pub const ALL: [Self; 12] = [
        Self::Xzx,
        Self::Xyx,
        Self::Yxy,
        Self::Yzy,
        Self::Zyz,
        Self::Zxz,
        Self::Xzy,
        Self::Xyz,
        Self::Yxz,
        Self::Yzx,
        Self::Zyx,
        Self::Zxy,
    ];
}

/// Azimuthal coordinate storage
///
/// The tuple order of `elements` is part of the kernel calling convention:
/// kernels receive these values positionally, in this exact order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Azimuthal {
    /// Cartesian transverse coordinates
    Xy {
        /// x component
        x: Float,
        /// y component
        y: Float,
    },
    /// Polar transverse coordinates
    RhoPhi {
        /// Transverse magnitude
        rho: Float,
        /// Azimuthal angle in radians
        phi: Float,
    },
}
//
impl Azimuthal {
    /// Kind tag of this parameterization
    pub fn kind(&self) -> AzimuthalKind {
        match self {
            Self::Xy { .. } => AzimuthalKind::Xy,
            Self::RhoPhi { .. } => AzimuthalKind::RhoPhi,
        }
    }

    /// Raw components, in kernel argument order
    pub fn elements(&self) -> [Float; 2] {
        match *self {
            Self::Xy { x, y } => [x, y],
            Self::RhoPhi { rho, phi } => [rho, phi],
        }
    }

    /// Rebuild coordinates of a given kind from raw components
    pub fn from_elements(kind: AzimuthalKind, elements: [Float; 2]) -> Self {
        let [e1, e2] = elements;
        match kind {
            AzimuthalKind::Xy => Self::Xy { x: e1, y: e2 },
            AzimuthalKind::RhoPhi => Self::RhoPhi { rho: e1, phi: e2 },
        }
    }
}

/// Longitudinal coordinate storage
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Longitudinal {
    /// Cartesian coordinate
    Z(Float),
    /// Polar angle from the +z axis, in radians
    Theta(Float),
    /// Pseudorapidity
    Eta(Float),
}
//
impl Longitudinal {
    /// Kind tag of this parameterization
    pub fn kind(&self) -> LongitudinalKind {
        match self {
            Self::Z(_) => LongitudinalKind::Z,
            Self::Theta(_) => LongitudinalKind::Theta,
            Self::Eta(_) => LongitudinalKind::Eta,
        }
    }

    /// Raw component
    pub fn element(&self) -> Float {
        match *self {
            Self::Z(z) => z,
            Self::Theta(theta) => theta,
            Self::Eta(eta) => eta,
        }
    }

    /// Rebuild a coordinate of a given kind from its raw component
    pub fn from_element(kind: LongitudinalKind, element: Float) -> Self {
        match kind {
            LongitudinalKind::Z => Self::Z(element),
            LongitudinalKind::Theta => Self::Theta(element),
            LongitudinalKind::Eta => Self::Eta(element),
        }
    }
}

/// Temporal coordinate storage
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Temporal {
    /// Coordinate time / energy
    T(Float),
    /// Proper time / invariant mass
    Tau(Float),
}
//
impl Temporal {
    /// Kind tag of this parameterization
    pub fn kind(&self) -> TemporalKind {
        match self {
            Self::T(_) => TemporalKind::T,
            Self::Tau(_) => TemporalKind::Tau,
        }
    }

    /// Raw component
    pub fn element(&self) -> Float {
        match *self {
            Self::T(t) => t,
            Self::Tau(tau) => tau,
        }
    }

    /// Rebuild a coordinate of a given kind from its raw component
    pub fn from_element(kind: TemporalKind, element: Float) -> Self {
        match kind {
            TemporalKind::T => Self::T(element),
            TemporalKind::Tau => Self::Tau(element),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_enumerations_cover_the_cross_product() {
        assert_eq!(SPATIAL_KINDS.len(), 6);
        assert_eq!(LORENTZ_KINDS.len(), 12);
        for az in AzimuthalKind::ALL {
            for lon in LongitudinalKind::ALL {
                assert!(SPATIAL_KINDS.contains(&(az, lon)));
                for tem in TemporalKind::ALL {
                    assert!(LORENTZ_KINDS.contains(&(az, lon, tem)));
                }
            }
        }
    }

    #[test]
    fn elements_round_trip() {
        let az = Azimuthal::RhoPhi { rho: 5.0, phi: 0.5 };
        assert_eq!(Azimuthal::from_elements(az.kind(), az.elements()), az);
        let lon = Longitudinal::Eta(-1.5);
        assert_eq!(Longitudinal::from_element(lon.kind(), lon.element()), lon);
        let tem = Temporal::Tau(3.0);
        assert_eq!(Temporal::from_element(tem.kind(), tem.element()), tem);
    }
}

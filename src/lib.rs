//! momenta: coordinate-dispatch vector algebra for physics computations
//!
//!
//! # Introduction (for the physicist)
//!
//! This crate manipulates 2D, 3D and 4D Euclidean and Lorentz vectors in
//! whatever coordinates your analysis keeps them in: Cartesian or polar
//! in the transverse plane, Cartesian z, polar angle or pseudorapidity
//! along the beam, coordinate time or proper time for the fourth
//! component. Kinematic quantities (momenta, rapidities, invariant
//! masses, boosts, ΔR separations) come out the same whichever
//! parameterization holds the data, and nothing is converted behind your
//! back: a vector built in (ρ, φ, η, τ) stays in those coordinates until
//! you ask for something else.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! Every operation is implemented once per *native* coordinate
//! combination as a small, branch-free kernel over raw components, and
//! every other combination is synthesized from per-axis conversion
//! kernels composed with the native one. Degenerate inputs (zero
//! transverse momentum, lightlike vectors, division by zero) produce
//! well-defined substituted values instead of errors, so batch
//! computations never abort halfway through.
//!
//!
//! # Introduction (for the computer guy)
//!
//! The core is a set of dispatch tables, one per operation, mapping
//! tuples of coordinate-kind enums to `(kernel, result kinds)` entries.
//! Tables are built exactly once, on first use: native kernels are
//! registered first, then a generation pass walks the full cross product
//! of kind combinations (2 azimuthal × 3 longitudinal × 2 temporal, and
//! pairs thereof for binary operations) and fills every remaining slot
//! with a converter composition. Lookups are exact-match and O(1); an
//! absent signature is a [`error::VectorError::Dispatch`] naming the
//! operation and the offending kind tuple. Kernels call elementary math
//! only through the [`backend::MathLib`] trait, which is what makes the
//! numeric backend pluggable.

#![warn(missing_docs)]

pub mod backend;
pub(crate) mod compute;
pub mod coords;
pub mod dispatch;
pub mod error;
pub mod numeric;
pub mod vector;

/// Crate-wide result type over the dispatch error vocabulary
pub type Result<T> = std::result::Result<T, error::VectorError>;

pub use crate::{
    backend::{MathLib, StdLib, STD},
    coords::{
        Azimuthal, AzimuthalKind, EulerOrder, Longitudinal, LongitudinalKind, LorentzKind,
        SpatialKind, Temporal, TemporalKind, LORENTZ_KINDS, SPATIAL_KINDS,
    },
    error::VectorError,
    numeric::Float,
    vector::{Lorentz, Planar, Spatial},
};

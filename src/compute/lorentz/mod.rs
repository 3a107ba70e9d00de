//! Kernels for the full azimuthal + longitudinal + temporal axis set of
//! 4D Lorentz vectors

pub(crate) mod angles;
pub(crate) mod arithmetic;
pub(crate) mod boosts;
pub(crate) mod coords;
pub(crate) mod predicates;

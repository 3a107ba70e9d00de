//! Kernels for the azimuthal axis, shared by 2D, 3D and 4D vectors

pub(crate) mod angles;
pub(crate) mod arithmetic;
pub(crate) mod coords;
pub(crate) mod predicates;

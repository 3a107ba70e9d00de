//! Kernels for the azimuthal + longitudinal axes, shared by 3D and 4D
//! vectors

pub(crate) mod angles;
pub(crate) mod arithmetic;
pub(crate) mod coords;
pub(crate) mod predicates;
pub(crate) mod rotations;

//! Compute kernels and their dispatch tables
//!
//! Kernels are pure functions taking a backend handle and raw coordinate
//! components as positional arguments, in canonical axis order
//! (azimuthal, then longitudinal, then temporal; operand 1 before
//! operand 2). They return either a scalar/boolean or a tuple of raw
//! components for the caller to re-wrap.
//!
//! Kernel bodies are restricted to straight-line arithmetic, calls to
//! other kernels and calls through the backend handle: no branches, no
//! loops, no assumptions about the backend beyond the [`MathLib`]
//! contract. Everything with a per-kind decision in it happens at table
//! build time, inside the factory functions that select converters and
//! compose them with native kernels.
//!
//! Native kernels exist for a canonical subset of kind combinations
//! (typically the Cartesian-like ones, plus same-kind specializations);
//! the remaining combinations are populated by composing the per-axis
//! converters of [`convert`] with a native kernel. Composition depth is
//! always exactly one conversion layer, since converters always target
//! the single canonical combination.

pub(crate) mod convert;
pub(crate) mod lorentz;
pub(crate) mod planar;
pub(crate) mod spatial;

use crate::{backend::MathLib, numeric::Float};

/// Wrap an angle into (-pi, pi]
///
/// The `%` operator follows the dividend's sign, hence `rem_euclid`.
pub(crate) fn rectify(lib: &dyn MathLib, phi: Float) -> Float {
    (phi + lib.pi()).rem_euclid(2.0 * lib.pi()) - lib.pi()
}

// ### NATIVE PROJECTION SIGNATURES ###
//
// Projections compute one scalar from one operand's components. Every
// kind combination has a hand-written native, so the tables store plain
// function pointers and the converter factories can hand them out for
// composition.

/// Scalar of an azimuthal pair of components
pub(crate) type AzProjection = fn(&dyn MathLib, Float, Float) -> Float;

/// Scalar of a spatial triple of components
pub(crate) type SpProjection = fn(&dyn MathLib, Float, Float, Float) -> Float;

/// Scalar of a Lorentz quadruple of components
pub(crate) type LoProjection = fn(&dyn MathLib, Float, Float, Float, Float) -> Float;

// ### GENERATED KERNEL SIGNATURES ###
//
// Generated kernels are closures over the converters selected for their
// kind combination, so they are stored boxed; native kernels registered
// in the same tables are wrapped the same way.

/// Planar binary operation returning a scalar
pub(crate) type AzPairScalarKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float, Float) -> Float + Send + Sync>;

/// Planar binary operation returning a boolean
pub(crate) type AzPairBoolKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float, Float) -> bool + Send + Sync>;

/// Planar binary predicate with a tolerance parameter
pub(crate) type AzPairToleranceKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float) -> bool + Send + Sync>;

/// Planar binary closeness test (rtol, atol, equal_nan)
pub(crate) type AzPairCloseKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, bool, Float, Float, Float, Float) -> bool + Send + Sync>;

/// Planar binary operation returning azimuthal components
pub(crate) type AzPairVectorKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float) + Send + Sync>;

/// Planar unary operation returning azimuthal components
pub(crate) type AzVectorKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float) -> (Float, Float) + Send + Sync>;

/// Planar unary operation with one scalar parameter
pub(crate) type AzParamVectorKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float) -> (Float, Float) + Send + Sync>;

/// Planar linear transform (xx, xy, yx, yy matrix elements first)
pub(crate) type AzMatrixVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> (Float, Float) + Send + Sync,
>;

/// Spatial binary operation returning a scalar
pub(crate) type SpPairScalarKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> Float + Send + Sync,
>;

/// Spatial binary operation returning a boolean
pub(crate) type SpPairBoolKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> bool + Send + Sync,
>;

/// Spatial binary predicate with a tolerance parameter
pub(crate) type SpPairToleranceKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float, Float) -> bool + Send + Sync,
>;

/// Spatial binary closeness test (rtol, atol, equal_nan)
pub(crate) type SpPairCloseKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, bool, Float, Float, Float, Float, Float, Float) -> bool
        + Send
        + Sync,
>;

/// Spatial binary operation returning spatial components
pub(crate) type SpPairVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> (Float, Float, Float)
        + Send
        + Sync,
>;

/// Spatial unary operation returning spatial components
pub(crate) type SpVectorKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float) -> (Float, Float, Float) + Send + Sync>;

/// Spatial unary operation with one scalar parameter
pub(crate) type SpParamVectorKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float, Float) + Send + Sync>;

/// Rotation of operand 2 around the axis given by operand 1
pub(crate) type SpAxisVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float, Float) -> (Float, Float, Float)
        + Send
        + Sync,
>;

/// Euler rotation with three angles (phi, theta, psi first)
pub(crate) type SpEulerVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float) -> (Float, Float, Float)
        + Send
        + Sync,
>;

/// Quaternion rotation (u, i, j, k components first)
pub(crate) type SpQuaternionVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float, Float) -> (Float, Float, Float)
        + Send
        + Sync,
>;

/// Spatial linear transform (nine row-major matrix elements first)
#[allow(clippy::type_complexity)]
pub(crate) type SpMatrixVectorKernel = Box<
    dyn Fn(
            &dyn MathLib,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
        ) -> (Float, Float, Float)
        + Send
        + Sync,
>;

/// Lorentz binary operation returning a scalar
pub(crate) type LoPairScalarKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float, Float, Float) -> Float
        + Send
        + Sync,
>;

/// Lorentz binary operation returning a boolean
pub(crate) type LoPairBoolKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float, Float, Float, Float) -> bool
        + Send
        + Sync,
>;

/// Lorentz binary closeness test (rtol, atol, equal_nan)
#[allow(clippy::type_complexity)]
pub(crate) type LoPairCloseKernel = Box<
    dyn Fn(
            &dyn MathLib,
            Float,
            Float,
            bool,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
        ) -> bool
        + Send
        + Sync,
>;

/// Lorentz unary predicate with a tolerance parameter
pub(crate) type LoToleranceKernel =
    Box<dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float) -> bool + Send + Sync>;

/// Lorentz binary operation returning Lorentz components
#[allow(clippy::type_complexity)]
pub(crate) type LoPairVectorKernel = Box<
    dyn Fn(
            &dyn MathLib,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
        ) -> (Float, Float, Float, Float)
        + Send
        + Sync,
>;

/// Lorentz unary operation returning Lorentz components
pub(crate) type LoVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float, Float, Float) + Send + Sync,
>;

/// Lorentz unary operation with one scalar parameter
pub(crate) type LoParamVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float, Float) -> (Float, Float, Float, Float)
        + Send
        + Sync,
>;

/// Lorentz unary operation returning spatial components
pub(crate) type LoSpatialVectorKernel = Box<
    dyn Fn(&dyn MathLib, Float, Float, Float, Float) -> (Float, Float, Float) + Send + Sync,
>;

/// Boost of a Lorentz operand by a spatial velocity operand
#[allow(clippy::type_complexity)]
pub(crate) type LoBoostSpatialKernel = Box<
    dyn Fn(
            &dyn MathLib,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
        ) -> (Float, Float, Float, Float)
        + Send
        + Sync,
>;

/// Boost of a Lorentz operand into the rest frame of a Lorentz operand
#[allow(clippy::type_complexity)]
pub(crate) type LoBoostLorentzKernel = Box<
    dyn Fn(
            &dyn MathLib,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
        ) -> (Float, Float, Float, Float)
        + Send
        + Sync,
>;

/// Lorentz linear transform (sixteen row-major matrix elements first)
#[allow(clippy::type_complexity)]
pub(crate) type LoMatrixVectorKernel = Box<
    dyn Fn(
            &dyn MathLib,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
            Float,
        ) -> (Float, Float, Float, Float)
        + Send
        + Sync,
>;

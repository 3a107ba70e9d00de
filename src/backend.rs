//! Elementary math interface between kernels and numeric backends
//!
//! Every compute kernel receives a backend handle as its first argument
//! and calls elementary math exclusively through it. This is the only
//! coupling between the kernel bodies and any concrete math
//! implementation, which is what keeps the kernels mechanically
//! retargetable: a backend is pluggable as soon as it satisfies the
//! [`MathLib`] contract.
//!
//! The method names follow the array-math convention (`arctan2` rather
//! than `atan2`, `absolute` rather than `abs`) because several of them
//! (`nan_to_num`, `isclose`, `sign`) carry that convention's exact
//! degenerate-value semantics, which kernels rely on.

use crate::{
    error::VectorError,
    numeric::{floats, Float},
};

use prefix_num_ops::real::*;

/// Elementary math operations a numeric backend must provide
///
/// Implementations may branch freely; the straight-line restriction
/// applies to kernels, not to backends.
pub trait MathLib: Send + Sync {
    /// Identifies the backend. Two handles with equal names are the same
    /// backend; binary operations refuse to mix different names.
    fn name(&self) -> &'static str;

    /// Square root
    fn sqrt(&self, x: Float) -> Float;
    /// Natural exponential
    fn exp(&self, x: Float) -> Float;
    /// Natural logarithm
    fn ln(&self, x: Float) -> Float;
    /// Sine
    fn sin(&self, x: Float) -> Float;
    /// Cosine
    fn cos(&self, x: Float) -> Float;
    /// Tangent
    fn tan(&self, x: Float) -> Float;
    /// Hyperbolic sine
    fn sinh(&self, x: Float) -> Float;
    /// Hyperbolic cosine
    fn cosh(&self, x: Float) -> Float;
    /// Hyperbolic tangent
    fn tanh(&self, x: Float) -> Float;
    /// Inverse sine
    fn arcsin(&self, x: Float) -> Float;
    /// Inverse cosine
    fn arccos(&self, x: Float) -> Float;
    /// Inverse tangent
    fn arctan(&self, x: Float) -> Float;
    /// Quadrant-aware inverse tangent of `y/x`
    fn arctan2(&self, y: Float, x: Float) -> Float;
    /// Inverse hyperbolic sine
    fn arcsinh(&self, x: Float) -> Float;
    /// Inverse hyperbolic cosine
    fn arccosh(&self, x: Float) -> Float;
    /// Inverse hyperbolic tangent
    fn arctanh(&self, x: Float) -> Float;
    /// Absolute value
    fn absolute(&self, x: Float) -> Float;
    /// Sign with `sign(0) == 0` and NaN passed through
    fn sign(&self, x: Float) -> Float;
    /// Magnitude of `magnitude` with the sign of `sign`
    fn copysign(&self, magnitude: Float, sign: Float) -> Float;
    /// NaN-propagating maximum
    fn maximum(&self, a: Float, b: Float) -> Float;
    /// NaN-propagating minimum
    fn minimum(&self, a: Float, b: Float) -> Float;

    /// Approximate equality: `|a - b| <= atol + rtol * |b|`, with NaN
    /// equal to NaN iff `equal_nan`
    fn isclose(&self, a: Float, b: Float, rtol: Float, atol: Float, equal_nan: bool) -> bool;

    /// Substitute NaN and signed infinities by the given values
    ///
    /// Passing `self.inf()` / `-self.inf()` for the infinity slots leaves
    /// infinite values untouched.
    fn nan_to_num(&self, x: Float, nan: Float, posinf: Float, neginf: Float) -> Float;

    /// The circle constant
    fn pi(&self) -> Float;
    /// Positive infinity
    fn inf(&self) -> Float;
}

/// Standard scalar backend
#[derive(Clone, Copy, Debug, Default)]
pub struct StdLib;

/// Process-wide handle to the standard backend
pub static STD: StdLib = StdLib;

impl MathLib for StdLib {
    fn name(&self) -> &'static str {
        "std"
    }

    fn sqrt(&self, x: Float) -> Float {
        sqrt(x)
    }

    fn exp(&self, x: Float) -> Float {
        exp(x)
    }

    fn ln(&self, x: Float) -> Float {
        ln(x)
    }

    fn sin(&self, x: Float) -> Float {
        sin(x)
    }

    fn cos(&self, x: Float) -> Float {
        cos(x)
    }

    fn tan(&self, x: Float) -> Float {
        tan(x)
    }

    fn sinh(&self, x: Float) -> Float {
        sinh(x)
    }

    fn cosh(&self, x: Float) -> Float {
        cosh(x)
    }

    fn tanh(&self, x: Float) -> Float {
        tanh(x)
    }

    fn arcsin(&self, x: Float) -> Float {
        asin(x)
    }

    fn arccos(&self, x: Float) -> Float {
        acos(x)
    }

    fn arctan(&self, x: Float) -> Float {
        atan(x)
    }

    fn arctan2(&self, y: Float, x: Float) -> Float {
        atan2(y, x)
    }

    fn arcsinh(&self, x: Float) -> Float {
        asinh(x)
    }

    fn arccosh(&self, x: Float) -> Float {
        acosh(x)
    }

    fn arctanh(&self, x: Float) -> Float {
        atanh(x)
    }

    fn absolute(&self, x: Float) -> Float {
        abs(x)
    }

    fn sign(&self, x: Float) -> Float {
        // Unlike Float::signum, zero maps to zero and NaN passes through
        if x > 0.0 {
            1.0
        } else if x < 0.0 {
            -1.0
        } else {
            x
        }
    }

    fn copysign(&self, magnitude: Float, sign: Float) -> Float {
        magnitude.copysign(sign)
    }

    fn maximum(&self, a: Float, b: Float) -> Float {
        // Float::max would discard a NaN operand
        if a.is_nan() || b.is_nan() {
            Float::NAN
        } else {
            max(a, b)
        }
    }

    fn minimum(&self, a: Float, b: Float) -> Float {
        if a.is_nan() || b.is_nan() {
            Float::NAN
        } else {
            min(a, b)
        }
    }

    fn isclose(&self, a: Float, b: Float, rtol: Float, atol: Float, equal_nan: bool) -> bool {
        if a.is_nan() || b.is_nan() {
            equal_nan && a.is_nan() && b.is_nan()
        } else {
            abs(a - b) <= atol + rtol * abs(b)
        }
    }

    fn nan_to_num(&self, x: Float, nan: Float, posinf: Float, neginf: Float) -> Float {
        if x.is_nan() {
            nan
        } else if x == Float::INFINITY {
            posinf
        } else if x == Float::NEG_INFINITY {
            neginf
        } else {
            x
        }
    }

    fn pi(&self) -> Float {
        floats::consts::PI
    }

    fn inf(&self) -> Float {
        Float::INFINITY
    }
}

/// Verify that both operands of a binary operation share a backend
pub(crate) fn check_same_backend(
    operation: &'static str,
    lhs: &dyn MathLib,
    rhs: &dyn MathLib,
) -> Result<(), VectorError> {
    if lhs.name() == rhs.name() {
        Ok(())
    } else {
        Err(VectorError::BackendMismatch {
            operation,
            lhs: lhs.name(),
            rhs: rhs.name(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_follows_array_semantics() {
        assert_eq!(STD.sign(3.5), 1.0);
        assert_eq!(STD.sign(-0.1), -1.0);
        assert_eq!(STD.sign(0.0), 0.0);
        assert!(STD.sign(Float::NAN).is_nan());
    }

    #[test]
    fn nan_to_num_substitutes_each_slot() {
        let inf = Float::INFINITY;
        assert_eq!(STD.nan_to_num(Float::NAN, 0.5, inf, -inf), 0.5);
        assert_eq!(STD.nan_to_num(inf, 0.0, 7.0, -7.0), 7.0);
        assert_eq!(STD.nan_to_num(-inf, 0.0, 7.0, -7.0), -7.0);
        assert_eq!(STD.nan_to_num(2.0, 0.0, 7.0, -7.0), 2.0);
    }

    #[test]
    fn isclose_handles_nan_policy() {
        assert!(STD.isclose(1.0, 1.0 + 1e-9, 1e-6, 0.0, false));
        assert!(!STD.isclose(Float::NAN, Float::NAN, 1e-6, 0.0, false));
        assert!(STD.isclose(Float::NAN, Float::NAN, 1e-6, 0.0, true));
    }

    #[test]
    fn maximum_propagates_nan() {
        assert_eq!(STD.maximum(1.0, 2.0), 2.0);
        assert!(STD.maximum(Float::NAN, 2.0).is_nan());
    }
}

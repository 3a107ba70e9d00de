//! Error vocabulary of the dispatch engine
//!
//! Only two things can go wrong when an operation is invoked: the operand
//! kind combination has no registered kernel, or the operands of a binary
//! operation live on different numeric backends. Degenerate numerics
//! (division by zero, domain edges) are never errors; kernels substitute
//! well-defined values instead, so that batch computations do not abort on
//! a single degenerate element.

use thiserror::Error;

/// Failure modes of a dispatched operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// The operand kind combination has no entry in the operation's
    /// dispatch table.
    ///
    /// The combination space is finite and fully enumerated when the table
    /// is built, so this indicates an unsupported coordinate kind or a
    /// registration bug, and the message spells out the exact signature.
    #[error("operation `{operation}` has no kernel for coordinate signature {signature}")]
    Dispatch {
        /// Canonical name of the operation, e.g. `lorentz.dot`
        operation: &'static str,
        /// The kind tuple that was looked up, in operand order
        signature: String,
    },

    /// A binary operation was invoked across two different numeric
    /// backends. Backends are never silently coerced.
    #[error("operation `{operation}` mixes numeric backends `{lhs}` and `{rhs}`")]
    BackendMismatch {
        /// Canonical name of the operation
        operation: &'static str,
        /// Backend of the first operand
        lhs: &'static str,
        /// Backend of the second operand
        rhs: &'static str,
    },
}

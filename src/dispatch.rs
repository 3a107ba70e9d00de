//! Dispatch tables: from coordinate-kind tuples to kernels
//!
//! Every operation owns one table mapping the kind signature of its
//! operands to the kernel that handles that signature, together with the
//! coordinate kinds the kernel's output is expressed in. Tables are
//! populated exactly once, inside `Lazy` statics, by first registering
//! the hand-written native kernels and then the generated conversion
//! compositions; afterwards they are read-only, so lookups are safe from
//! any thread.
//!
//! Lookup is exact-match only. There is no fuzzy or partial matching and
//! no fallback search: the combination space is finite, fully enumerated
//! at build time, and a miss is reported as a [`VectorError::Dispatch`]
//! naming the operation and the exact signature.

use crate::error::VectorError;

use log::debug;

use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Lookup table of one operation
///
/// `K` is the kind-tuple key (operand 1's kinds in canonical axis order,
/// then operand 2's for binary operations), `F` the kernel type and `R`
/// the result-kind declaration (`()` for scalar and boolean results).
pub struct DispatchTable<K, F, R> {
    /// Canonical operation name, quoted by lookup errors
    operation: &'static str,

    /// Registered kernels and their declared result kinds
    entries: HashMap<K, (F, R)>,
}
//
impl<K, F, R> DispatchTable<K, F, R>
where
    K: Copy + Eq + Hash + Debug,
    R: Copy,
{
    /// Start building the table of the named operation
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            entries: HashMap::new(),
        }
    }

    /// Canonical name of the operation this table serves
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Register a kernel for one kind signature
    ///
    /// Each signature must be registered exactly once; a second
    /// registration indicates a generation bug.
    pub fn register(&mut self, key: K, kernel: F, returns: R) {
        let previous = self.entries.insert(key, (kernel, returns));
        debug_assert!(
            previous.is_none(),
            "duplicate kernel registered for `{}` signature {:?}",
            self.operation,
            key
        );
    }

    /// Finish building, leaving a trace of the generation pass
    pub fn built(self) -> Self {
        debug!(
            "dispatch table `{}` holds {} kernels",
            self.operation,
            self.entries.len()
        );
        self
    }

    /// Look up the kernel and result kinds for a kind signature
    pub fn resolve(&self, key: K) -> Result<(&F, R), VectorError> {
        match self.entries.get(&key) {
            Some((kernel, returns)) => Ok((kernel, *returns)),
            None => Err(VectorError::Dispatch {
                operation: self.operation,
                signature: format!("{key:?}"),
            }),
        }
    }

    /// Number of registered signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no signature has been registered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backend::{MathLib, STD},
        coords::AzimuthalKind,
        numeric::Float,
    };

    fn double(_lib: &dyn MathLib, x: Float, _y: Float) -> Float {
        2.0 * x
    }

    #[test]
    fn resolve_finds_registered_kernels() {
        let mut table: DispatchTable<AzimuthalKind, fn(&dyn MathLib, Float, Float) -> Float, ()> =
            DispatchTable::new("test.double");
        table.register(AzimuthalKind::Xy, double, ());
        let table = table.built();
        let (kernel, ()) = table.resolve(AzimuthalKind::Xy).unwrap();
        assert_eq!(kernel(&STD, 3.0, 0.0), 6.0);
    }

    #[test]
    fn resolve_misses_report_operation_and_signature() {
        let table: DispatchTable<AzimuthalKind, fn(&dyn MathLib, Float, Float) -> Float, ()> =
            DispatchTable::new("test.double");
        let err = table.resolve(AzimuthalKind::RhoPhi).unwrap_err();
        match err {
            VectorError::Dispatch {
                operation,
                signature,
            } => {
                assert_eq!(operation, "test.double");
                assert!(signature.contains("RhoPhi"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}

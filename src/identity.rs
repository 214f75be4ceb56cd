//! Process-wide identity allocation for error values.
//!
//! Every [`ErrorValue`](crate::ErrorValue) receives an `ErrorId` exactly once,
//! at construction. The id is the value's *logical* identity: every copy
//! produced by the fluent `with_*` surface keeps it, no matter how far the
//! code, message, or detail streams drift from the original. Two values with
//! the same id are the same logical error.
//!
//! # Allocation
//!
//! Ids come from a single process-wide `AtomicU64`, incremented with a relaxed
//! `fetch_add`. This is the only shared mutable state in the whole crate, so
//! construction is safe from any number of threads without locking. Ids start
//! at 1 and are never reused within a process.
//!
//! # What an id is not
//!
//! - Not stable across processes or restarts. Never persist one.
//! - Not part of the client-safe wire shape. It never leaves the process
//!   through [`Serialize`](crate::ErrorValue).
//! - Not ordered in any meaningful way beyond allocation sequence.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque logical identity of an error value.
///
/// Compare ids only for equality; their numeric value is an allocation detail
/// exposed solely for trusted diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorId(u64);

impl ErrorId {
    /// Allocate a fresh id. Called once per `new`/`wrap` (and once per
    /// deserialization, see [`wire`](crate::wire)).
    #[inline]
    pub(crate) fn allocate() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, for trusted diagnostics only.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

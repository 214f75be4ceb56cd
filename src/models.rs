//! The error value core: identity, copy-on-write derivation, and rendering.
//!
//! # Design
//!
//! [`ErrorValue`] is an immutable-by-convention error object. Construction
//! (`new`/`wrap`) is the only point where a logical identity is allocated;
//! every `with_*` call copies the receiver, applies one change, and keeps the
//! identity. The receiver is never touched, so a single package-level template
//! can be derived from by any number of concurrent call sites without
//! cross-talk between their detail lists.
//!
//! # Two detail streams, one hard boundary
//!
//! - `details` — technical context for logs. Reaches the outside world only
//!   through [`Display`](fmt::Display), [`fmt::Debug`], and
//!   [`diagnostics`](ErrorValue::diagnostics), all of which are trusted-sink
//!   surfaces.
//! - `user_details` — pre-vetted strings safe to expose. The only detail
//!   stream the client-safe wire shape ([`serde::Serialize`]) will ever carry.
//!
//! Nothing is promoted between the streams, ever.
//!
//! # Memory hygiene
//!
//! Technical details are the tier that tends to accumulate paths, identifiers,
//! and query fragments. Their owned buffers are wiped on drop via `zeroize`.
//! This protects against casual memory inspection; it is not HSM-grade wiping.
//!
//! # Equality
//!
//! `PartialEq`/`Eq`/`Hash` are implemented over the identity alone. A value
//! that has been re-coded, re-worded, and annotated still compares equal to
//! the template it was derived from. Structural comparison is intentionally
//! absent; compare renderings if you need it.

use crate::identity::ErrorId;
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use zeroize::Zeroize;

/// Fallback returned by [`ErrorValue::user_message`] when the message is empty.
const UNKNOWN_ERROR_MESSAGE: &str = "unknown error occurred";

/// Detail streams stay inline for the common few-entry case.
pub(crate) type DetailList = SmallVec<[String; 4]>;

/// A structured error value with a stable logical identity.
///
/// Carries an HTTP-style `code`, a human `message`, two independent detail
/// streams (technical vs. user-safe), and an optional wrapped cause. All
/// `with_*` methods are copy-on-write: they return a new value and leave the
/// receiver untouched, preserving the identity allocated at construction.
///
/// # Example
///
/// ```rust
/// use facade_errors::ErrorValue;
///
/// let not_found = ErrorValue::new(404, "user not found");
/// let err = not_found
///     .with_detail("user_id: 123")
///     .with_user_detail("User not found");
///
/// // Derivation keeps the logical identity...
/// assert!(err.matches(&not_found));
/// // ...and never mutates the template.
/// assert!(not_found.details().is_empty());
/// ```
#[must_use = "errors should be handled or logged"]
#[derive(Clone)]
pub struct ErrorValue {
    id: ErrorId,
    code: u16,
    message: String,
    details: DetailList,
    user_details: DetailList,
    // Reference-shared across derived copies; causes are opaque and read-only.
    cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl ErrorValue {
    /// Create a fresh error value with the given code and message.
    ///
    /// Allocates a new logical identity. Any code is accepted; the type is
    /// intentionally wider than strict HTTP status codes.
    #[inline]
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            id: ErrorId::allocate(),
            code,
            message: message.into(),
            details: DetailList::new(),
            user_details: DetailList::new(),
            cause: None,
        }
    }

    /// Create a fresh error value that wraps `cause`.
    ///
    /// `cause` may be any error type, not only another `ErrorValue`; foreign
    /// errors participate in chain traversal through their
    /// [`Error::source`] capability.
    ///
    /// Cause chains must be acyclic. The chain walk descends one link per
    /// step with no cycle guard, so a cyclic graph would make
    /// [`causes`](ErrorValue::causes) loop forever.
    #[inline]
    pub fn wrap<E>(cause: E, code: u16, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let mut value = Self::new(code, message);
        value.cause = Some(Arc::new(cause));
        value
    }

    /// Rebuild a value from its client-safe wire parts. Allocates a fresh
    /// identity; see the [`wire`](crate::wire) module for why.
    pub(crate) fn from_wire_parts(code: u16, message: String, user_details: Vec<String>) -> Self {
        let mut value = Self::new(code, message);
        value.user_details = user_details.into_iter().collect();
        value
    }

    // ------------------------------------------------------------------------
    // Fluent derivation - every method copies, none mutates the receiver
    // ------------------------------------------------------------------------

    /// Return a copy with a different code. Identity is preserved.
    #[inline]
    pub fn with_code(&self, code: u16) -> Self {
        let mut next = self.clone();
        next.code = code;
        next
    }

    /// Return a copy with a different message. Identity is preserved.
    #[inline]
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.message = message.into();
        next
    }

    /// Return a copy wrapping `cause`, replacing any previous cause.
    ///
    /// Only one direct cause is held; wrapping again overwrites the link
    /// rather than appending. The same acyclicity contract as
    /// [`wrap`](ErrorValue::wrap) applies.
    #[inline]
    pub fn with_wrap<E>(&self, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let mut next = self.clone();
        next.cause = Some(Arc::new(cause));
        next
    }

    /// Return a copy with `detail` appended to the technical detail stream.
    ///
    /// The stream is deep-copied before the append, so sibling derivations of
    /// a shared template never observe each other's details.
    #[inline]
    pub fn with_detail(&self, detail: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.details.push(detail.into());
        next
    }

    /// Return a copy with `detail` appended to the user-safe detail stream.
    ///
    /// Same copy-then-append semantics as [`with_detail`](ErrorValue::with_detail).
    /// Only strings pre-vetted for external exposure belong here.
    #[inline]
    pub fn with_user_detail(&self, detail: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.user_details.push(detail.into());
        next
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Logical identity, assigned once at construction.
    #[inline]
    pub const fn id(&self) -> ErrorId {
        self.id
    }

    /// HTTP-style error code.
    #[inline]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Primary human-readable message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Technical details, for logging and debugging only.
    #[inline]
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// User-safe details, vetted for external exposure.
    #[inline]
    pub fn user_details(&self) -> &[String] {
        &self.user_details
    }

    /// Direct cause, one level. Same link as [`Error::source`].
    #[inline]
    pub fn cause(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }

    // ------------------------------------------------------------------------
    // Identity-based matching
    // ------------------------------------------------------------------------

    /// True iff `other` is the same logical error, regardless of how far the
    /// two copies have diverged in code, message, or details.
    #[inline]
    pub fn matches(&self, other: &ErrorValue) -> bool {
        self.id == other.id
    }

    /// Chain-searching equality: true if `self` or any `ErrorValue` link in
    /// its cause chain matches `target`.
    ///
    /// This is how a deeply wrapped error is still recognized as "the same
    /// logical error" as the unwrapped template it descends from.
    pub fn is(&self, target: &ErrorValue) -> bool {
        if self.matches(target) {
            return true;
        }
        self.causes().any(|link| {
            link.downcast_ref::<ErrorValue>()
                .is_some_and(|value| value.matches(target))
        })
    }

    /// Check whether the error currently carries `code`.
    #[inline]
    pub const fn is_code(&self, code: u16) -> bool {
        self.code == code
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// The message if non-empty, else a fixed fallback literal.
    ///
    /// Never includes details or cause. This is the only rendering guaranteed
    /// safe to show an end user without further filtering.
    #[inline]
    pub fn user_message(&self) -> &str {
        if self.message.is_empty() {
            UNKNOWN_ERROR_MESSAGE
        } else {
            &self.message
        }
    }
}

impl fmt::Display for ErrorValue {
    /// Full diagnostic one-liner, for trusted sinks.
    ///
    /// Format: `message: {msg}, code: {code}` followed by
    /// `, details: [a, b]` when technical details exist, followed by
    /// `, wrapped: {cause}` rendering the direct cause's own error text
    /// (one level; the cause decides how much of *its* chain that shows).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message: {}, code: {}", self.message, self.code)?;

        if !self.details.is_empty() {
            f.write_str(", details: [")?;
            for (i, detail) in self.details.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                f.write_str(detail)?;
            }
            f.write_str("]")?;
        }

        if let Some(cause) = self.cause() {
            write!(f, ", wrapped: {cause}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorValue")
            .field("id", &self.id)
            .field("code", &self.code)
            .field("message", &self.message)
            .field("details", &self.details)
            .field("user_details", &self.user_details)
            .field("cause", &self.cause.as_ref().map(|cause| cause.to_string()))
            .finish()
    }
}

impl Error for ErrorValue {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause()
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for ErrorValue {}

impl Hash for ErrorValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Zeroize for ErrorValue {
    /// Wipe the technical detail buffers. The user-safe stream and message
    /// are exposure-vetted by definition and are left intact.
    fn zeroize(&mut self) {
        for detail in self.details.iter_mut() {
            detail.zeroize();
        }
        self.details.clear();
    }
}

impl Drop for ErrorValue {
    fn drop(&mut self) {
        self.zeroize();
    }
}

//! # Facade Errors
//!
//! Structured error values with a stable logical identity and a two-tier
//! exposure policy.
//!
//! ## Design Philosophy
//!
//! 1. **Identity outlives mutation.** Every error is assigned a process-unique
//!    identity at construction. Every fluent `with_*` call copies the value
//!    and keeps the identity, so a re-coded, re-worded, annotated copy is
//!    still "the same logical error" as the template it came from.
//! 2. **Two detail streams, never conflated.** Technical details are for logs;
//!    user details are pre-vetted for external exposure. Nothing is ever
//!    promoted from one stream to the other.
//! 3. **Serialization is two-tier.** The serde `Serialize` impl emits only the
//!    client-safe shape (`message`, `code`, user details). The full picture —
//!    technical details, identity, the expanded cause chain — flows only
//!    through [`ErrorValue::diagnostics`], which is for trusted sinks.
//! 4. **Templates are cheap and safe to share.** Derivation copies detail
//!    storage before appending, so any number of call sites can derive from
//!    one package-level template concurrently without cross-talk.
//!
//! ## Quick Start
//!
//! ```rust
//! use facade_errors::{ErrorValue, catalog::ERR_USER_NOT_FOUND};
//!
//! fn load_user(id: u64) -> facade_errors::Result<()> {
//!     Err(ERR_USER_NOT_FOUND
//!         .with_detail(format!("user_id: {id}"))
//!         .with_user_detail("User not found"))
//! }
//!
//! let err = load_user(123).unwrap_err();
//!
//! // Still the same logical error as the template:
//! assert!(err.matches(&ERR_USER_NOT_FOUND));
//!
//! // Client-safe wire shape - the technical detail never leaves the process:
//! assert_eq!(
//!     err.to_json(),
//!     r#"{"message":"user not found","code":404,"details":["User not found"]}"#
//! );
//!
//! // Full diagnostics, for trusted logging sinks only:
//! let diag = err.diagnostics();
//! assert_eq!(diag.details, ["user_id: 123"]);
//! ```
//!
//! ## Wrapping and chain traversal
//!
//! Causes may be any [`std::error::Error`], not only other `ErrorValue`s, and
//! foreign errors participate in the chain walk through their `source()`
//! capability:
//!
//! ```rust
//! use facade_errors::ErrorValue;
//! use std::io;
//!
//! let io_err = io::Error::other("connection reset");
//! let err = ErrorValue::wrap(io_err, 502, "upstream failed");
//!
//! assert_eq!(err.causes().count(), 1);
//! assert_eq!(err.to_string(), "message: upstream failed, code: 502, wrapped: connection reset");
//! ```
//!
//! Cause chains must be acyclic; the walk carries no cycle guard by design.
//!
//! ## Crossing process boundaries
//!
//! The wire shape round-trips `message`, `code`, and user details exactly.
//! Identity does not cross the wire: a deserialized value gets a fresh
//! identity and matches nothing local. Match on `code` after a boundary
//! crossing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod chain;
pub mod diagnostics;
pub mod identity;
pub mod models;
pub mod wire;

pub use chain::Causes;
pub use diagnostics::{ChainLink, Diagnostics};
pub use identity::ErrorId;
pub use models::ErrorValue;
pub use wire::DecodeError;

/// Type alias for Results carrying an [`ErrorValue`].
pub type Result<T> = std::result::Result<T, ErrorValue>;

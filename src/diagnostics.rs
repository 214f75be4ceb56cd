//! Full diagnostic records for trusted logging sinks.
//!
//! This is the counterpart of the client-safe wire shape in
//! [`wire`](crate::wire): it exposes *everything* — message, code, both detail
//! streams, and a record per link of the entire cause chain. Feed it only to
//! sinks you trust with technical context (structured logs, monitoring,
//! forensics). The shape is serializable but not guaranteed wire-stable.
//!
//! # Chain expansion
//!
//! Unlike [`Display`](std::fmt::Display), which shows one level of cause
//! text, [`ErrorValue::diagnostics`] walks the whole chain. `ErrorValue`
//! links contribute their full field set; foreign links contribute only their
//! rendered text. The identity is not part of the record: it is meaningless
//! outside the producing process.

use crate::models::ErrorValue;
use serde::Serialize;
use std::error::Error;

/// Complete structured view of an error, including the expanded cause chain.
///
/// Produced by [`ErrorValue::diagnostics`]. Empty sections are skipped during
/// serialization so log lines stay compact.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostics {
    /// Primary message.
    pub message: String,
    /// HTTP-style code.
    pub code: u16,
    /// Technical details. Skipped when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// User-safe details. Skipped when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub user_details: Vec<String>,
    /// One record per link of the cause chain, outermost first. Skipped when
    /// there is no cause.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub wrapped: Vec<ChainLink>,
}

/// A single link of an expanded cause chain.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ChainLink {
    /// A structured link: the full field set of an `ErrorValue`.
    Value {
        /// The link's message.
        message: String,
        /// The link's code.
        code: u16,
        /// The link's technical details. Skipped when empty.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        details: Vec<String>,
        /// The link's user-safe details. Skipped when empty.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        user_details: Vec<String>,
    },
    /// A foreign link: only its rendered error text is known.
    Foreign {
        /// The link's `Display` rendering.
        message: String,
    },
}

impl ChainLink {
    fn from_link(link: &(dyn Error + 'static)) -> Self {
        match link.downcast_ref::<ErrorValue>() {
            Some(value) => Self::Value {
                message: value.message().to_owned(),
                code: value.code(),
                details: value.details().to_vec(),
                user_details: value.user_details().to_vec(),
            },
            None => Self::Foreign { message: link.to_string() },
        }
    }
}

impl ErrorValue {
    /// Build the full diagnostic record, expanding the entire cause chain.
    ///
    /// For trusted sinks only; this is the one serialization path that carries
    /// technical details and causes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facade_errors::ErrorValue;
    /// use std::io;
    ///
    /// let cause = io::Error::other("connection reset");
    /// let err = ErrorValue::wrap(cause, 502, "upstream failed")
    ///     .with_detail("host: db-03");
    ///
    /// let diag = err.diagnostics();
    /// assert_eq!(diag.code, 502);
    /// assert_eq!(diag.details, ["host: db-03"]);
    /// assert_eq!(diag.wrapped.len(), 1);
    /// ```
    pub fn diagnostics(&self) -> Diagnostics {
        Diagnostics {
            message: self.message().to_owned(),
            code: self.code(),
            details: self.details().to_vec(),
            user_details: self.user_details().to_vec(),
            wrapped: self.causes().map(ChainLink::from_link).collect(),
        }
    }
}

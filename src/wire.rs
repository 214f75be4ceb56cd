//! The client-safe wire shape.
//!
//! # Hard security boundary
//!
//! Serializing an [`ErrorValue`] with serde produces exactly
//! `{"message": ..., "code": ..., "details": [...]}` where `details` carries
//! the **user-safe** stream and is omitted when empty. Technical details, the
//! cause chain, and the identity are excluded unconditionally. No code path
//! through this module may widen that shape; anything richer belongs to
//! [`diagnostics`](crate::diagnostics), which is for trusted sinks only.
//!
//! # Deserialization and identity
//!
//! The wire shape cannot carry an identity, so a deserialized value receives
//! a **fresh** one. It will therefore never match its origin or any local
//! template by identity; match on `code` instead. A zero/sentinel identity
//! was rejected because it would make equality over ids unlawful (two
//! unrelated deserialized values would compare equal, or `PartialEq` would
//! lose reflexivity).

use crate::models::ErrorValue;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::error::Error;
use std::fmt;

/// Mirror of the wire shape. Field order is the wire order.
#[derive(serde::Serialize, serde::Deserialize)]
struct WireError {
    message: String,
    code: u16,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl Serialize for ErrorValue {
    /// Client-safe serialization. See the module docs for the boundary this
    /// enforces.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireError {
            message: self.message().to_owned(),
            code: self.code(),
            details: self.user_details().to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ErrorValue {
    /// Inverse of the wire shape. The `details` key is optional; missing means
    /// an empty user-detail stream. The result carries a fresh identity and
    /// empty technical details and cause.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireError::deserialize(deserializer)?;
        Ok(ErrorValue::from_wire_parts(wire.code, wire.message, wire.details))
    }
}

/// Failure to decode a wire payload into an [`ErrorValue`].
///
/// Produced only by [`ErrorValue::from_json`]; a missing `details` key is not
/// an error, only malformed structure or wrong field types are.
#[derive(Debug)]
pub struct DecodeError(serde_json::Error);

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed error payload: {}", self.0)
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl ErrorValue {
    /// Render the client-safe JSON wire shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facade_errors::ErrorValue;
    ///
    /// let err = ErrorValue::new(404, "user not found")
    ///     .with_detail("user_id: 123")
    ///     .with_user_detail("User not found");
    ///
    /// assert_eq!(
    ///     err.to_json(),
    ///     r#"{"message":"user not found","code":404,"details":["User not found"]}"#
    /// );
    /// ```
    pub fn to_json(&self) -> String {
        // The wire shape is plain strings and a u16; serialization cannot fail.
        serde_json::to_string(self).expect("wire shape serialization cannot fail")
    }

    /// Decode the client-safe JSON wire shape.
    ///
    /// The returned value has a fresh identity; see the module docs.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when `payload` is not well-formed for the
    /// three-field wire shape.
    pub fn from_json(payload: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(payload).map_err(DecodeError)
    }
}

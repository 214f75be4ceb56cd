//! The client-safe wire shape and its limits.
//!
//! Run with: `cargo run --example wire_roundtrip`

use facade_errors::catalog::ERR_INSUFFICIENT_FUNDS;
use facade_errors::ErrorValue;

fn main() {
    let err = ERR_INSUFFICIENT_FUNDS
        .with_detail("account: 9913, balance: -4.20") // logs only
        .with_user_detail("Your balance is too low for this transfer");

    // What a client receives. The technical detail is excluded
    // unconditionally; this is a security boundary, not a formatting choice.
    let payload = err.to_json();
    println!("over the wire: {payload}");
    assert!(!payload.contains("9913"));

    // The receiving process reconstructs message, code, and user details
    // exactly...
    let decoded = ErrorValue::from_json(&payload).expect("well-formed payload");
    assert_eq!(decoded.message(), err.message());
    assert_eq!(decoded.code(), err.code());
    assert_eq!(decoded.user_details(), err.user_details());

    // ...but identity does not cross the wire: the decoded value has a fresh
    // one and matches nothing local. Match on code after a boundary crossing.
    assert!(!decoded.matches(&ERR_INSUFFICIENT_FUNDS));
    assert!(decoded.is_code(422));
    println!("decoded: {decoded}");

    // Malformed payloads fail with a scoped decode error.
    let bad = ErrorValue::from_json(r#"{"message": 42}"#).unwrap_err();
    println!("decode failure: {bad}");
}

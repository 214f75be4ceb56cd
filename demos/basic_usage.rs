//! Basic usage: templates, derivation, and identity-based matching.
//!
//! Run with: `cargo run --example basic_usage`

use facade_errors::catalog::{ERR_USER_NOT_FOUND, ERR_VALIDATION_EMAIL};
use facade_errors::ErrorValue;

fn find_user(id: u64) -> facade_errors::Result<String> {
    // Derive a context-specific error from the package-level template. The
    // template itself is never touched.
    Err(ERR_USER_NOT_FOUND
        .with_detail(format!("user_id: {id}"))
        .with_user_detail("User not found"))
}

fn validate_email(address: &str) -> facade_errors::Result<()> {
    if !address.contains('@') {
        return Err(ERR_VALIDATION_EMAIL.with_detail(format!("input: {address}")));
    }
    Ok(())
}

fn main() {
    let err = find_user(123).unwrap_err();

    // Identity survives derivation, so handler code can still dispatch on
    // the template.
    if err.matches(&ERR_USER_NOT_FOUND) {
        println!("known template: {}", ERR_USER_NOT_FOUND.message());
    }

    // Full diagnostic rendering, for logs:
    println!("log line: {err}");

    // User-facing message, safe without filtering:
    println!("user sees: {}", err.user_message());

    // Sibling derivations never see each other's details.
    let email_err = validate_email("not-an-address").unwrap_err();
    assert!(!email_err.matches(&err));
    println!("validation: {email_err}");

    // Wrapping a foreign error keeps it reachable through the chain walk.
    let io_err = std::io::Error::other("socket closed");
    let wrapped = ErrorValue::wrap(io_err, 502, "profile service unreachable");
    for (i, link) in wrapped.causes().enumerate() {
        println!("cause[{i}]: {link}");
    }
}

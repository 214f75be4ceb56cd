//! Full diagnostics for trusted logging sinks.
//!
//! Run with: `cargo run --example diagnostic_logging`

use facade_errors::catalog::ERR_DATABASE_ERROR;
use facade_errors::ErrorValue;
use std::io;

fn main() {
    // A three-layer failure: io error at the bottom, a coded database error
    // in the middle, a request-level error on top.
    let root = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
    let db = ERR_DATABASE_ERROR
        .with_detail("pool: primary, waited: 5s")
        .with_wrap(root);
    let request = ErrorValue::wrap(db, 500, "could not load dashboard")
        .with_user_detail("Please try again in a few minutes");

    // The one-line rendering shows the immediate cause's own text.
    println!("one-liner: {request}");

    // The diagnostic record expands the whole chain: structured fields for
    // ErrorValue links, rendered text for foreign ones. Trusted sinks only.
    let diag = request.diagnostics();
    let json = serde_json::to_string_pretty(&diag).expect("diagnostics serialize");
    println!("structured log entry:\n{json}");

    // Contrast with what a client would see for the same error:
    println!("client payload: {}", request.to_json());
}

//! Property-based tests for facade_errors
//!
//! These tests use proptest to generate random inputs and verify invariants hold.

use facade_errors::ErrorValue;
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// IDENTITY PROPERTIES
// ============================================================================

proptest! {
    /// Every construction allocates a distinct identity
    #[test]
    fn construction_never_reuses_identities(
        codes in prop::collection::vec(any::<u16>(), 1..50),
    ) {
        let values: Vec<ErrorValue> = codes
            .iter()
            .map(|&code| ErrorValue::new(code, "message"))
            .collect();

        let ids: HashSet<_> = values.iter().map(|v| v.id()).collect();
        assert_eq!(ids.len(), values.len());
    }

    /// Any derivation sequence preserves identity, symmetrically
    #[test]
    fn derivation_preserves_identity(
        code in any::<u16>(),
        new_code in any::<u16>(),
        message in "\\PC{0,100}",
        details in prop::collection::vec("\\PC{0,50}", 0..10),
    ) {
        let base = ErrorValue::new(code, "base");
        let mut derived = base.with_code(new_code).with_message(message);
        for detail in &details {
            derived = derived.with_detail(detail.clone());
        }

        assert!(base.matches(&derived));
        assert!(derived.matches(&base));
        assert_eq!(base, derived);
    }

    /// Identity-based equality holds even when code and message diverge
    #[test]
    fn matching_ignores_code_and_message(
        code_a in any::<u16>(),
        code_b in any::<u16>(),
        msg_a in "\\PC{0,50}",
        msg_b in "\\PC{0,50}",
    ) {
        let template = ErrorValue::new(500, "template");
        let a = template.with_code(code_a).with_message(msg_a);
        let b = template.with_code(code_b).with_message(msg_b);

        assert!(a.matches(&b));
        assert!(b.matches(&a));
    }
}

// ============================================================================
// COPY-ON-WRITE PROPERTIES
// ============================================================================

proptest! {
    /// Derivation never mutates the receiver
    #[test]
    fn receiver_is_untouched_by_derivation(
        base_details in prop::collection::vec("\\PC{0,50}", 0..8),
        appended in "\\PC{0,50}",
    ) {
        let mut base = ErrorValue::new(500, "base");
        for detail in &base_details {
            base = base.with_detail(detail.clone());
        }

        let derived = base.with_detail(appended.clone());

        assert_eq!(base.details(), base_details.as_slice());
        assert_eq!(derived.details().len(), base_details.len() + 1);
        assert_eq!(derived.details().last(), Some(&appended));
    }

    /// Sibling derivations of a shared template never cross-contaminate
    #[test]
    fn siblings_see_only_their_own_details(
        detail_a in "\\PC{1,50}",
        detail_b in "\\PC{1,50}",
    ) {
        let template = ErrorValue::new(400, "template");
        let a = template.with_user_detail(detail_a.clone());
        let b = template.with_user_detail(detail_b.clone());

        assert_eq!(a.user_details(), [detail_a]);
        assert_eq!(b.user_details(), [detail_b]);
        assert!(template.user_details().is_empty());
    }
}

// ============================================================================
// EXPOSURE BOUNDARY PROPERTIES
// ============================================================================

proptest! {
    /// The safe wire shape never contains a technical-only string.
    ///
    /// Technical details are drawn from an uppercase alphabet and everything
    /// else from lowercase, so a leak cannot hide behind a coincidental
    /// substring match.
    #[test]
    fn wire_shape_never_leaks_technical_details(
        message in "[a-z ]{0,40}",
        technical in prop::collection::vec("[A-Z]{8,20}", 1..8),
        user in prop::collection::vec("[a-z]{0,20}", 0..8),
    ) {
        let mut err = ErrorValue::new(500, message);
        for detail in &technical {
            err = err.with_detail(detail.clone());
        }
        for detail in &user {
            err = err.with_user_detail(detail.clone());
        }

        let json = err.to_json();
        for detail in &technical {
            assert!(!json.contains(detail), "technical detail leaked: {detail}");
        }
    }

    /// The user-facing message never carries details or cause text
    #[test]
    fn user_message_is_message_or_fallback(message in "\\PC{0,100}") {
        let err = ErrorValue::new(500, message.clone())
            .with_detail("TECHNICALDETAIL")
            .with_wrap(std::io::Error::other("CAUSETEXT"));

        if message.is_empty() {
            assert_eq!(err.user_message(), "unknown error occurred");
        } else {
            assert_eq!(err.user_message(), message);
        }
    }
}

// ============================================================================
// WIRE ROUND-TRIP PROPERTIES
// ============================================================================

proptest! {
    /// message, code, and user details round-trip exactly, order preserved
    #[test]
    fn wire_round_trip_is_exact(
        code in any::<u16>(),
        message in "\\PC{0,100}",
        user in prop::collection::vec("\\PC{0,50}", 0..10),
    ) {
        let mut original = ErrorValue::new(code, message);
        for detail in &user {
            original = original.with_user_detail(detail.clone());
        }

        let decoded = ErrorValue::from_json(&original.to_json()).expect("round-trip decodes");

        assert_eq!(decoded.message(), original.message());
        assert_eq!(decoded.code(), original.code());
        assert_eq!(decoded.user_details(), original.user_details());
        assert!(decoded.details().is_empty());
        assert!(decoded.cause().is_none());
    }

    /// Deserialized values never match their origin by identity
    #[test]
    fn boundary_crossing_severs_identity(code in any::<u16>(), message in "\\PC{0,50}") {
        let original = ErrorValue::new(code, message);
        let decoded = ErrorValue::from_json(&original.to_json()).expect("decodes");

        assert!(!decoded.matches(&original));
        assert!(decoded.is_code(original.code()));
    }
}

// ============================================================================
// CHAIN PROPERTIES
// ============================================================================

proptest! {
    /// A chain of n wraps walks exactly n links, outermost first
    #[test]
    fn chain_walk_visits_every_link_in_order(depth in 1usize..12) {
        let mut current = ErrorValue::new(0, "link 0");
        let mut ids = vec![current.id()];
        for i in 1..depth {
            current = ErrorValue::wrap(current, i as u16, format!("link {i}"));
            ids.push(current.id());
        }

        let walked: Vec<_> = current
            .causes()
            .map(|link| link.downcast_ref::<ErrorValue>().expect("all links are values").id())
            .collect();

        // Outermost cause first, innermost last.
        let expected: Vec<_> = ids.iter().rev().skip(1).copied().collect();
        assert_eq!(walked, expected);
    }

    /// A wrapped descendant is still recognized as its template
    #[test]
    fn chain_matching_survives_wrapping(depth in 1usize..8, message in "\\PC{0,50}") {
        let template = ErrorValue::new(404, "template");
        let mut current = template.with_message(message);
        for i in 0..depth {
            current = ErrorValue::wrap(current, 500, format!("layer {i}"));
        }

        assert!(current.is(&template));
    }
}

// ============================================================================
// RENDERING PROPERTIES
// ============================================================================

proptest! {
    /// Display never panics and always leads with the message field
    #[test]
    fn display_is_stable(
        code in any::<u16>(),
        message in "\\PC{0,200}",
        details in prop::collection::vec("\\PC{0,50}", 0..6),
    ) {
        let mut err = ErrorValue::new(code, message);
        for detail in &details {
            err = err.with_detail(detail.clone());
        }

        let rendered = err.to_string();
        assert!(rendered.starts_with("message: "));
        assert!(rendered.contains(&format!("code: {code}")));
        if details.is_empty() {
            assert!(!rendered.contains(", details: ["));
        }
    }
}

// ============================================================================
// CONCURRENT PROPERTIES
// ============================================================================

proptest! {
    /// Concurrent construction from many threads never collides on identity
    #[test]
    fn concurrent_construction_yields_distinct_ids(
        thread_count in 1usize..8,
        errors_per_thread in 1usize..100,
    ) {
        let handles: Vec<_> = (0..thread_count)
            .map(|_| {
                std::thread::spawn(move || {
                    (0..errors_per_thread)
                        .map(|_| ErrorValue::new(500, "concurrent").id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("thread panicked") {
                assert!(seen.insert(id), "identity allocated twice");
            }
        }
    }

    /// Concurrent derivation from one shared template never cross-talks
    #[test]
    fn concurrent_derivation_is_isolated(
        thread_count in 1usize..8,
        derivations in 1usize..50,
    ) {
        let template = std::sync::Arc::new(ErrorValue::new(500, "shared template"));

        let handles: Vec<_> = (0..thread_count)
            .map(|t| {
                let template = std::sync::Arc::clone(&template);
                std::thread::spawn(move || {
                    for i in 0..derivations {
                        let derived = template.with_detail(format!("thread {t} step {i}"));
                        assert_eq!(derived.details().len(), 1);
                        assert!(derived.matches(&template));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread panicked");
        }

        assert!(template.details().is_empty());
    }
}

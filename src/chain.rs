//! Cause-chain traversal.
//!
//! A cause chain mixes two kinds of links: [`ErrorValue`]s, which store their
//! cause directly, and foreign errors, which expose at most one next link
//! through [`Error::source`]. The walk descends one link per step:
//!
//! - at an `ErrorValue`, record it and descend into *its* stored cause;
//! - at a foreign error, descend through `source()` if it offers one;
//! - otherwise stop.
//!
//! # Termination contract
//!
//! There is no cycle detection. The walk terminates because well-formed cause
//! chains are finite and acyclic; a chain containing a cycle would make the
//! iterator spin forever. Acyclicity is a caller contract, deliberately not a
//! runtime check that could mask a caller bug.

use crate::models::ErrorValue;
use std::error::Error;

impl ErrorValue {
    /// Iterate over every link in the cause chain, starting from the direct
    /// cause. Yields nothing when there is no cause.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facade_errors::ErrorValue;
    /// use std::io;
    ///
    /// let c1 = io::Error::other("disk failure");
    /// let c2 = ErrorValue::wrap(c1, 500, "read failed");
    /// let c3 = ErrorValue::wrap(c2, 502, "request failed");
    ///
    /// let rendered: Vec<String> = c3.causes().map(|link| link.to_string()).collect();
    /// assert_eq!(rendered.len(), 2);
    /// assert!(rendered[0].starts_with("message: read failed"));
    /// assert_eq!(rendered[1], "disk failure");
    /// ```
    #[inline]
    pub fn causes(&self) -> Causes<'_> {
        Causes { current: self.cause() }
    }

    /// Recover the richest error view from a generic error chain.
    ///
    /// Walks `err` and its `source()` chain and returns the first link that
    /// is an `ErrorValue`, or `None` when the chain holds none. Never fails;
    /// a type mismatch is simply an absent result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use facade_errors::ErrorValue;
    /// use std::error::Error;
    ///
    /// let boxed: Box<dyn Error> = Box::new(ErrorValue::new(404, "not found"));
    /// let recovered = ErrorValue::find(boxed.as_ref()).expect("chain holds an ErrorValue");
    /// assert_eq!(recovered.code(), 404);
    /// ```
    pub fn find<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a ErrorValue> {
        if let Some(value) = err.downcast_ref::<ErrorValue>() {
            return Some(value);
        }

        let mut current = err.source();
        while let Some(link) = current {
            if let Some(value) = link.downcast_ref::<ErrorValue>() {
                return Some(value);
            }
            current = link.source();
        }
        None
    }
}

/// Iterator over the links of a cause chain.
///
/// Created by [`ErrorValue::causes`]. Strictly one link per step; see the
/// module docs for the termination contract.
pub struct Causes<'a> {
    current: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.current?;
        self.current = match link.downcast_ref::<ErrorValue>() {
            Some(value) => value.cause(),
            None => link.source(),
        };
        Some(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;

    /// Foreign error with its own source link, for exercising the
    /// foreign-unwrap branch of the walk.
    #[derive(Debug)]
    struct ForeignError {
        message: &'static str,
        inner: Option<Box<dyn Error + Send + Sync + 'static>>,
    }

    impl fmt::Display for ForeignError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for ForeignError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.inner.as_deref().map(|e| e as &(dyn Error + 'static))
        }
    }

    #[test]
    fn no_cause_yields_an_empty_walk() {
        let err = ErrorValue::new(500, "standalone");
        assert_eq!(err.causes().count(), 0);
    }

    #[test]
    fn three_deep_chain_walks_in_order() {
        let c1 = io::Error::other("root");
        let c2 = ErrorValue::wrap(c1, 500, "middle");
        let c2_id = c2.id();
        let c3 = ErrorValue::wrap(c2, 502, "outer");

        let links: Vec<_> = c3.causes().collect();
        assert_eq!(links.len(), 2);

        let first = links[0].downcast_ref::<ErrorValue>().expect("first link is an ErrorValue");
        assert_eq!(first.id(), c2_id);
        assert_eq!(links[1].to_string(), "root");
    }

    #[test]
    fn walk_descends_through_foreign_source_links() {
        let foreign = ForeignError {
            message: "adapter failed",
            inner: Some(Box::new(io::Error::other("socket closed"))),
        };
        let err = ErrorValue::wrap(foreign, 502, "gateway error");

        let rendered: Vec<String> = err.causes().map(|link| link.to_string()).collect();
        assert_eq!(rendered, ["adapter failed", "socket closed"]);
    }

    #[test]
    fn walk_stops_at_a_sourceless_foreign_link() {
        let foreign = ForeignError { message: "terminal", inner: None };
        let err = ErrorValue::wrap(foreign, 500, "outer");

        assert_eq!(err.causes().count(), 1);
    }

    #[test]
    fn find_recovers_a_value_from_the_head() {
        let err = ErrorValue::new(404, "not found");
        let found = ErrorValue::find(&err).expect("head is an ErrorValue");
        assert!(found.matches(&err));
    }

    #[test]
    fn find_recovers_a_value_buried_in_a_foreign_chain() {
        let inner = ErrorValue::new(404, "not found");
        let inner_id = inner.id();
        // Foreign head whose generic source chain leads to an ErrorValue.
        let foreign = ForeignError {
            message: "wrapper",
            inner: Some(Box::new(inner)),
        };

        let found = ErrorValue::find(&foreign).expect("chain holds an ErrorValue");
        assert_eq!(found.id(), inner_id);
    }

    #[test]
    fn find_returns_none_for_a_foreign_only_chain() {
        let err = io::Error::other("plain io");
        assert!(ErrorValue::find(&err).is_none());
    }
}

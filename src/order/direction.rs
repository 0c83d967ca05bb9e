//! The direction resolver: the decision table driving cursor traversal.

use crate::predicate::Operator;
use crate::value::Value;

use super::SortDir;

/// The traversal requested by the caller.
///
/// The carried [`Value`] is the cursor token: the tie-break value of the
/// anchor row, not the anchor's full tuple (that is re-derived per call).
#[derive(Debug, Clone, PartialEq)]
pub enum Traversal {
    /// First page; no anchor.
    None,
    /// Rows after the anchor in display order.
    After(Value),
    /// Rows before the anchor in display order.
    Before(Value),
}

impl Traversal {
    /// The cursor token, if a cursor is active.
    #[must_use]
    pub const fn token(&self) -> Option<&Value> {
        match self {
            Self::None => None,
            Self::After(token) | Self::Before(token) => Some(token),
        }
    }

    /// Whether the physical scan runs against display order, so fetched
    /// rows must be reversed.
    #[must_use]
    pub const fn is_backward(&self) -> bool {
        matches!(self, Self::Before(_))
    }
}

/// Per-column outcome of resolving a sort direction against a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Comparison operator for the seek predicate; `None` on the first page.
    pub op: Option<Operator>,
    /// Direction the storage scan uses for this column.
    pub scan: SortDir,
    /// Whether fetched rows must be reversed to restore display order.
    pub reverse: bool,
}

/// Resolve a column direction and traversal into comparison operator,
/// scan direction, and reversal flag.
///
/// | column | traversal | op   | scan | reverse |
/// |--------|-----------|------|------|---------|
/// | Asc    | None      | -    | Asc  | false   |
/// | Asc    | After     | Gt   | Asc  | false   |
/// | Asc    | Before    | Lt   | Desc | true    |
/// | Desc   | None      | -    | Desc | false   |
/// | Desc   | After     | Lt   | Desc | false   |
/// | Desc   | Before    | Gt   | Asc  | true    |
///
/// Scanning before an anchor always walks the storage order backward from
/// it, so the nearest neighbors are fetched first within `limit + 1`; the
/// reversal then restores display order in memory.
#[must_use]
pub const fn resolve(dir: SortDir, traversal: &Traversal) -> Resolved {
    match (dir, traversal) {
        (SortDir::Asc, Traversal::None) => Resolved {
            op: None,
            scan: SortDir::Asc,
            reverse: false,
        },
        (SortDir::Asc, Traversal::After(_)) => Resolved {
            op: Some(Operator::Gt),
            scan: SortDir::Asc,
            reverse: false,
        },
        (SortDir::Asc, Traversal::Before(_)) => Resolved {
            op: Some(Operator::Lt),
            scan: SortDir::Desc,
            reverse: true,
        },
        (SortDir::Desc, Traversal::None) => Resolved {
            op: None,
            scan: SortDir::Desc,
            reverse: false,
        },
        (SortDir::Desc, Traversal::After(_)) => Resolved {
            op: Some(Operator::Lt),
            scan: SortDir::Desc,
            reverse: false,
        },
        (SortDir::Desc, Traversal::Before(_)) => Resolved {
            op: Some(Operator::Gt),
            scan: SortDir::Asc,
            reverse: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after() -> Traversal {
        Traversal::After(Value::Int(1))
    }

    fn before() -> Traversal {
        Traversal::Before(Value::Int(1))
    }

    #[test]
    fn full_table() {
        let cases = [
            (SortDir::Asc, Traversal::None, None, SortDir::Asc, false),
            (SortDir::Asc, after(), Some(Operator::Gt), SortDir::Asc, false),
            (SortDir::Asc, before(), Some(Operator::Lt), SortDir::Desc, true),
            (SortDir::Desc, Traversal::None, None, SortDir::Desc, false),
            (SortDir::Desc, after(), Some(Operator::Lt), SortDir::Desc, false),
            (SortDir::Desc, before(), Some(Operator::Gt), SortDir::Asc, true),
        ];

        for (dir, traversal, op, scan, reverse) in cases {
            let resolved = resolve(dir, &traversal);
            assert_eq!(resolved.op, op, "{dir:?} {traversal:?}");
            assert_eq!(resolved.scan, scan, "{dir:?} {traversal:?}");
            assert_eq!(resolved.reverse, reverse, "{dir:?} {traversal:?}");
        }
    }

    #[test]
    fn reverse_matches_backward_traversal() {
        for traversal in [Traversal::None, after(), before()] {
            for dir in [SortDir::Asc, SortDir::Desc] {
                assert_eq!(resolve(dir, &traversal).reverse, traversal.is_backward());
            }
        }
    }

    #[test]
    fn direction_symmetry() {
        // Asc+After and Desc+Before resolve to the same operator and the same
        // physical scan; only the reversal flag differs. Scanning either way
        // therefore walks the same row set.
        let forward = resolve(SortDir::Asc, &after());
        let backward = resolve(SortDir::Desc, &before());
        assert_eq!(forward.op, backward.op);
        assert_eq!(forward.scan, backward.scan);
        assert_ne!(forward.reverse, backward.reverse);
    }

    #[test]
    fn token_access() {
        assert_eq!(Traversal::None.token(), None);
        assert_eq!(after().token(), Some(&Value::Int(1)));
        assert_eq!(before().token(), Some(&Value::Int(1)));
    }
}

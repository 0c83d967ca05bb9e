//! Page assembly: sentinel detection, display-order restore, and cursor
//! derivation.

use crate::order::{OrderSpec, Traversal};
use crate::source::RowValues;
use crate::value::Value;

/// One page of rows plus the cursors bounding it.
///
/// `rows` is always in caller display order, regardless of which direction
/// was physically scanned. `after` and `before` are raw tie-break values of
/// the boundary rows; `None` means there is nothing further on that side.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    /// Rows in display order.
    pub rows: Vec<R>,
    /// Token for continuing forward, if more rows exist past the page.
    pub after: Option<Value>,
    /// Token for continuing backward, if rows exist before the page.
    pub before: Option<Value>,
}

impl<R> Page<R> {
    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.after.is_some()
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.before.is_some()
    }
}

/// Assemble a page from rows fetched under the scan order with `limit + 1`.
///
/// The extra row is the sentinel: its presence means more data exists past
/// the page. Backward traversal scanned against display order, so rows are
/// reversed first; the sentinel is then trimmed from the far end (tail for
/// forward, head for backward), leaving the `limit` rows closest to the
/// anchor. Cursors are the tie-break values of the surviving first/last
/// rows, nil on any side with no further data.
#[must_use]
pub fn assemble<R: RowValues>(
    mut rows: Vec<R>,
    limit: u32,
    traversal: &Traversal,
    order: &OrderSpec,
) -> Page<R> {
    let has_more = rows.len() > limit as usize;

    if traversal.is_backward() {
        rows.reverse();
    }
    if has_more {
        if traversal.is_backward() {
            rows.remove(0);
        } else {
            rows.pop();
        }
    }

    let tie_break = &order.tie_break().name;
    let first = rows.first().and_then(|row| row.value(tie_break));
    let last = rows.last().and_then(|row| row.value(tie_break));

    let (after, before) = match traversal {
        Traversal::None => (if has_more { last } else { None }, None),
        Traversal::After(_) => (if has_more { last } else { None }, first),
        Traversal::Before(_) => (last, if has_more { first } else { None }),
    };

    Page { rows, after, before }
}

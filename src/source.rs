//! The storage-facing seams: row access, the queryable source contract, and
//! anchor resolution.

use crate::error::PaginateError;
use crate::order::{OrderExpr, OrderSpec};
use crate::predicate::FilterExpr;
use crate::value::Value;

/// Access to a row's ordered-column values.
///
/// Rows are opaque to the engine except for the values of columns named in
/// the order spec; nothing else is ever inspected.
pub trait RowValues {
    /// The row's value for `column`, if the row carries that column.
    fn value(&self, column: &str) -> Option<Value>;
}

/// A queryable, re-orderable row set.
///
/// Combinator methods return modified copies; the engine never mutates a
/// source in place. A pagination call issues at most two reads (anchor
/// lookup, then page fetch) - read consistency between them is the
/// implementor's contract, typically one snapshot or transaction per call.
/// Failures are propagated unchanged; the engine never retries.
pub trait RowSource: Sized {
    /// Concrete row type produced by [`execute`](Self::execute).
    type Row: RowValues;
    /// Failure type surfaced by reads.
    type Error;

    /// The source's currently configured ordering, possibly empty.
    fn ordering(&self) -> Vec<OrderExpr>;

    /// Whether `column` is a sortable attribute of this source's schema.
    fn has_column(&self, column: &str) -> bool;

    /// The natural unique identifier column, used as the default tie-break.
    fn key_column(&self) -> &str;

    /// A copy ordered by `order`, replacing any prior ordering.
    #[must_use]
    fn reorder(&self, order: &OrderSpec) -> Self;

    /// A copy with `predicate` added to the base filters.
    #[must_use]
    fn filtered(&self, predicate: &FilterExpr) -> Self;

    /// A copy limited to at most `limit` rows.
    #[must_use]
    fn limit(&self, limit: u32) -> Self;

    /// Execute and produce the ordered rows.
    fn execute(&self) -> Result<Vec<Self::Row>, Self::Error>;

    /// Fetch the single row whose `column` equals `key`, honoring the base
    /// filters but ignoring any configured ordering and limit.
    fn find_by_key(&self, column: &str, key: &Value) -> Result<Option<Self::Row>, Self::Error>;
}

/// The anchor row's values for every ordered column.
///
/// Ephemeral: rebuilt from the cursor token on every pagination call and
/// discarded with the page. Multi-column seeking needs the anchor's full
/// tuple, not just its unique key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Anchor {
    fields: Vec<(String, Value)>,
}

impl Anchor {
    /// An empty anchor.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a column value.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// The anchor's value for `column`.
    #[must_use]
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }
}

/// Resolve a cursor token into the anchor tuple for `order`'s columns.
///
/// Reads the source under its base filters, ignoring ordering and limit. A
/// token that matches no row is a stale or tampered cursor and fails with
/// [`PaginateError::AnchorNotFound`] - surfaced, never swallowed, so a dead
/// cursor is distinguishable from an empty page.
pub fn resolve_anchor<S: RowSource>(
    source: &S,
    order: &OrderSpec,
    token: &Value,
) -> Result<Anchor, PaginateError<S::Error>> {
    let tie_break = &order.tie_break().name;
    let row = source
        .find_by_key(tie_break, token)
        .map_err(PaginateError::Source)?
        .ok_or_else(|| PaginateError::AnchorNotFound(token.clone()))?;

    let mut anchor = Anchor::new();
    for col in order.columns() {
        if let Some(value) = row.value(&col.name) {
            anchor = anchor.field(col.name.clone(), value);
        }
    }
    Ok(anchor)
}

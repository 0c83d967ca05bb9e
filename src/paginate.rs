//! The pagination entry point.

use crate::error::PaginateError;
use crate::order::{OrderSpec, SortDir, Traversal};
use crate::page::{Page, assemble};
use crate::predicate::seek_predicate;
use crate::source::{RowSource, resolve_anchor};
use crate::value::Value;

/// Page size used when [`Options::limit`] is not set.
pub const DEFAULT_LIMIT: u32 = 10;

/// The traversal request: at most one of an `after` or a `before` token.
///
/// Tokens are raw tie-break values as produced by a previous [`Page`];
/// supplying both at once is a usage error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraversalParams {
    after: Option<Value>,
    before: Option<Value>,
}

impl TraversalParams {
    /// No cursor: fetch the first page.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            after: None,
            before: None,
        }
    }

    /// Continue forward from `token`.
    #[must_use]
    pub fn after(token: impl Into<Value>) -> Self {
        Self {
            after: Some(token.into()),
            before: None,
        }
    }

    /// Continue backward from `token`.
    #[must_use]
    pub fn before(token: impl Into<Value>) -> Self {
        Self {
            after: None,
            before: Some(token.into()),
        }
    }

    /// Build from optional raw tokens as they arrive from transport.
    #[must_use]
    pub fn from_tokens(after: Option<Value>, before: Option<Value>) -> Self {
        Self { after, before }
    }

    fn traversal<E>(&self) -> Result<Traversal, PaginateError<E>> {
        match (&self.after, &self.before) {
            (Some(_), Some(_)) => Err(PaginateError::InvalidTraversal),
            (Some(token), None) => Ok(Traversal::After(token.clone())),
            (None, Some(token)) => Ok(Traversal::Before(token.clone())),
            (None, None) => Ok(Traversal::None),
        }
    }
}

/// Per-call pagination options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    limit: Option<u32>,
    direction: Option<SortDir>,
    tie_break: Option<String>,
}

impl Options {
    /// Defaults: limit 10, direction `Asc`, tie-break from the source's
    /// key column.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            limit: None,
            direction: None,
            tie_break: None,
        }
    }

    /// Page size (must be at least 1).
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Base sort direction, applied to the tie-break column. Only shapes
    /// the overall order when the source carries no prior ordering.
    #[must_use]
    pub fn direction(mut self, direction: SortDir) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Tie-break column, overriding the source's key column.
    #[must_use]
    pub fn tie_break(mut self, column: impl Into<String>) -> Self {
        self.tie_break = Some(column.into());
        self
    }
}

/// Run one pagination call against `source`.
///
/// Normalizes the source's ordering into a tie-break-safe total order,
/// resolves the anchor when a cursor token is present, builds the seek
/// predicate, fetches `limit + 1` rows under the resolved scan order, and
/// assembles the page with its `after`/`before` cursors.
///
/// Stateless and re-entrant: every call is a pure function of its inputs
/// plus at most two reads against the source. Source failures propagate
/// unchanged; nothing is retried or silently dropped.
///
/// # Example
///
/// ```
/// use seekset::{MemoryRow, MemorySource, Options, TraversalParams, paginate};
///
/// let mut source = MemorySource::new("id", &["id", "name"]);
/// for (id, name) in [(1_i64, "Nissan"), (2, "Honda"), (3, "Audi")] {
///     source.push(MemoryRow::new().with("id", id).with("name", name));
/// }
///
/// let page = paginate(&source, &TraversalParams::none(), &Options::new().limit(2)).unwrap();
/// assert_eq!(page.rows.len(), 2);
/// assert!(page.has_next());
///
/// let next = paginate(
///     &source,
///     &TraversalParams::from_tokens(page.after, None),
///     &Options::new().limit(2),
/// )
/// .unwrap();
/// assert_eq!(next.rows.len(), 1);
/// assert!(!next.has_next());
/// ```
pub fn paginate<S: RowSource>(
    source: &S,
    params: &TraversalParams,
    options: &Options,
) -> Result<Page<S::Row>, PaginateError<S::Error>> {
    let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
    if limit < 1 {
        return Err(PaginateError::InvalidLimit(limit));
    }

    let traversal = params.traversal()?;
    let direction = options.direction.unwrap_or(SortDir::Asc);
    let tie_break = options
        .tie_break
        .as_deref()
        .unwrap_or_else(|| source.key_column());

    let order = OrderSpec::normalize(&source.ordering(), tie_break, direction, |column| {
        source.has_column(column)
    })?;

    let predicate = match traversal.token() {
        None => None,
        Some(token) => {
            let anchor = resolve_anchor(source, &order, token)?;
            seek_predicate(&order, &traversal, &anchor)?
        },
    };

    let scan = order.scan_order(&traversal);
    let mut query = source.reorder(&scan).limit(limit.saturating_add(1));
    if let Some(predicate) = &predicate {
        query = query.filtered(predicate);
    }
    let rows = query.execute().map_err(PaginateError::Source)?;

    Ok(assemble(rows, limit, &traversal, &order))
}

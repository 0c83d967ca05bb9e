//! The engine's error surface.

use std::error::Error as StdError;
use std::fmt;

use crate::order::OrderError;
use crate::predicate::SeekError;
use crate::value::Value;

/// Failure surfaced by [`paginate`](crate::paginate).
///
/// Everything is fail-fast and synchronous: no error is swallowed or
/// converted into an empty page, so a stale cursor never masquerades as
/// "end of data". `E` is the row source's own failure type, propagated
/// as-is.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PaginateError<E> {
    /// `limit` was below 1.
    InvalidLimit(u32),
    /// Both `after` and `before` tokens were supplied.
    InvalidTraversal,
    /// Ordering normalization failed.
    Order(OrderError),
    /// The anchor row has no value for an ordered column.
    EmptyAnchor(String),
    /// The cursor token resolved to no row (stale or tampered cursor).
    AnchorNotFound(Value),
    /// The row source failed.
    Source(E),
}

impl<E> PaginateError<E> {
    /// Whether this failure is a caller usage error (bad limit, conflicting
    /// traversal, or a rejected ordering) rather than a data condition.
    #[must_use]
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidLimit(_) | Self::InvalidTraversal | Self::Order(_)
        )
    }

    /// Whether this failure indicates a stale or tampered cursor.
    #[must_use]
    pub const fn is_stale_cursor(&self) -> bool {
        matches!(self, Self::AnchorNotFound(_))
    }
}

impl<E> From<OrderError> for PaginateError<E> {
    fn from(err: OrderError) -> Self {
        Self::Order(err)
    }
}

impl<E> From<SeekError> for PaginateError<E> {
    fn from(err: SeekError) -> Self {
        match err {
            SeekError::EmptyAnchor(column) => Self::EmptyAnchor(column),
        }
    }
}

impl<E: fmt::Display> fmt::Display for PaginateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLimit(limit) => write!(f, "limit must be at least 1 (got {limit})"),
            Self::InvalidTraversal => write!(f, "provide at most one of after/before"),
            Self::Order(err) => err.fmt(f),
            Self::EmptyAnchor(column) => {
                write!(f, "anchor has no value for ordered column '{column}'")
            },
            Self::AnchorNotFound(token) => {
                write!(f, "cursor '{token}' does not match any row")
            },
            Self::Source(err) => write!(f, "row source error: {err}"),
        }
    }
}

impl<E: StdError + 'static> StdError for PaginateError<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Source(err) => Some(err),
            Self::Order(err) => Some(err),
            _ => None,
        }
    }
}

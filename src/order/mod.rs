//! Ordering model: sort directions, order columns, and the normalized
//! [`OrderSpec`] that makes an arbitrary ordering a total order.

mod direction;

pub use direction::{Resolved, Traversal, resolve};

use std::error::Error as StdError;
use std::fmt;

use crate::validate::{assert_valid_identifier, is_valid_identifier};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    /// Ascending (smallest first).
    Asc,
    /// Descending (largest first).
    Desc,
}

impl SortDir {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A sortable column with a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderColumn {
    /// Column name.
    pub name: String,
    /// Sort direction for this column.
    pub dir: SortDir,
}

impl OrderColumn {
    /// Create a new order column.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid column identifier.
    pub fn new(name: impl Into<String>, dir: SortDir) -> Self {
        let name = name.into();
        assert_valid_identifier(&name, "order column");
        Self { name, dir }
    }

    /// Ascending column.
    pub fn asc(name: impl Into<String>) -> Self {
        Self::new(name, SortDir::Asc)
    }

    /// Descending column.
    pub fn desc(name: impl Into<String>) -> Self {
        Self::new(name, SortDir::Desc)
    }
}

/// A single entry of a row source's pre-existing ordering.
///
/// Sources report plain columns or opaque computed expressions (e.g.
/// `lower(name)`). Only entries that decompose to a single column can
/// participate in keyset traversal; everything else is rejected rather than
/// guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderExpr {
    /// A plain column reference.
    Column(OrderColumn),
    /// A computed ordering expression with a direction.
    Computed {
        /// The raw expression text.
        expr: String,
        /// Sort direction of the expression.
        dir: SortDir,
    },
}

impl OrderExpr {
    /// Ascending column entry.
    pub fn asc(name: impl Into<String>) -> Self {
        Self::Column(OrderColumn::asc(name))
    }

    /// Descending column entry.
    pub fn desc(name: impl Into<String>) -> Self {
        Self::Column(OrderColumn::desc(name))
    }

    fn decompose(&self) -> Result<OrderColumn, OrderError> {
        match self {
            Self::Column(col) => Ok(col.clone()),
            Self::Computed { expr, dir } => {
                // An expression that is exactly one bare identifier is just a
                // column reference in disguise.
                let trimmed = expr.trim();
                if is_valid_identifier(trimmed) {
                    Ok(OrderColumn::new(trimmed, *dir))
                } else {
                    Err(OrderError::UnsupportedExpression(expr.clone()))
                }
            },
        }
    }
}

/// Errors from order normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderError {
    /// The pre-existing ordering already names the tie-break column.
    ConflictingOrder(String),
    /// The tie-break column is not a sortable attribute of the row source.
    UnknownColumn(String),
    /// An ordering entry cannot be decomposed into a single comparable column.
    UnsupportedExpression(String),
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingOrder(col) => write!(
                f,
                "ordering already names tie-break column '{col}'; use the traversal direction instead"
            ),
            Self::UnknownColumn(col) => write!(f, "unknown or unsortable column '{col}'"),
            Self::UnsupportedExpression(expr) => {
                write!(f, "cannot decompose ordering expression '{expr}' into a single column")
            },
        }
    }
}

impl StdError for OrderError {}

/// A normalized, tie-break-safe total order.
///
/// Always non-empty; the last column is the designated unique tie-break and
/// no other column references it. Immutable once built - construct one with
/// [`OrderSpec::normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSpec {
    columns: Vec<OrderColumn>,
}

impl OrderSpec {
    /// Normalize a pre-existing ordering into a total order.
    ///
    /// An empty `existing` yields `[tie_break@tie_break_dir]` - the common
    /// case. A non-empty one is kept in precedence order with the tie-break
    /// appended last. `has_column` answers schema membership for the
    /// tie-break column.
    ///
    /// Fails with [`OrderError::ConflictingOrder`] when `existing` already
    /// names the tie-break column: the engine must own the tie-break's
    /// direction to be able to reverse it for backward traversal.
    pub fn normalize<F>(
        existing: &[OrderExpr],
        tie_break: &str,
        tie_break_dir: SortDir,
        mut has_column: F,
    ) -> Result<Self, OrderError>
    where
        F: FnMut(&str) -> bool,
    {
        if !has_column(tie_break) {
            return Err(OrderError::UnknownColumn(tie_break.to_string()));
        }

        let mut columns = Vec::with_capacity(existing.len() + 1);
        for entry in existing {
            let col = entry.decompose()?;
            if col.name == tie_break {
                return Err(OrderError::ConflictingOrder(col.name));
            }
            columns.push(col);
        }
        columns.push(OrderColumn::new(tie_break, tie_break_dir));

        Ok(Self { columns })
    }

    /// The columns in precedence order, most significant first.
    #[must_use]
    pub fn columns(&self) -> &[OrderColumn] {
        &self.columns
    }

    /// The unique tie-break column (always the last one).
    #[must_use]
    pub fn tie_break(&self) -> &OrderColumn {
        // normalize always appends the tie-break, so the list is never empty
        match self.columns.last() {
            Some(col) => col,
            None => unreachable!("OrderSpec is non-empty"),
        }
    }

    /// The physical scan order for a traversal: each column's direction
    /// mapped through the resolver table. Identical to `self` except for
    /// backward traversal, where every direction flips.
    #[must_use]
    pub fn scan_order(&self, traversal: &Traversal) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|col| OrderColumn {
                    name: col.name.clone(),
                    dir: resolve(col.dir, traversal).scan,
                })
                .collect(),
        }
    }
}

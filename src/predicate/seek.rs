//! Seek predicate construction: the tuple-lexicographic filter that selects
//! rows strictly past an anchor.

use std::error::Error as StdError;
use std::fmt;

use crate::order::{OrderSpec, Traversal, resolve};
use crate::source::Anchor;

use super::{CompoundFilter, Filter, FilterExpr, Operator};

/// Errors from seek predicate construction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SeekError {
    /// The anchor tuple has no value for an ordered column.
    EmptyAnchor(String),
}

impl fmt::Display for SeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAnchor(col) => {
                write!(f, "anchor has no value for ordered column '{col}'")
            },
        }
    }
}

impl StdError for SeekError {}

/// Build the seek predicate for `order` relative to `anchor`.
///
/// For columns `c1..cn` (tie-break last) the predicate is the classic
/// keyset expansion, equivalent to comparing the two n-tuples
/// lexicographically:
///
/// ```text
/// (c1 <op> a1)
/// OR (c1 = a1 AND c2 <op> a2)
/// OR (c1 = a1 AND c2 = a2 AND c3 <op> a3)
/// ...
/// ```
///
/// Equality prefixes are direction-independent; each `<op>` comes from the
/// resolver table for that column's own direction and the traversal. A
/// single-column order degenerates to one simple comparison.
///
/// Returns `Ok(None)` for [`Traversal::None`] - the first page needs no
/// predicate.
pub fn seek_predicate(
    order: &OrderSpec,
    traversal: &Traversal,
    anchor: &Anchor,
) -> Result<Option<FilterExpr>, SeekError> {
    let columns = order.columns();
    let mut or_terms: Vec<FilterExpr> = Vec::with_capacity(columns.len());

    for (i, col) in columns.iter().enumerate() {
        let op = match resolve(col.dir, traversal).op {
            Some(op) => op,
            None => return Ok(None),
        };
        let bound = anchor
            .value(&col.name)
            .ok_or_else(|| SeekError::EmptyAnchor(col.name.clone()))?;

        let mut and_terms: Vec<FilterExpr> = Vec::with_capacity(i + 1);
        for prev in &columns[..i] {
            let held = anchor
                .value(&prev.name)
                .ok_or_else(|| SeekError::EmptyAnchor(prev.name.clone()))?;
            and_terms.push(FilterExpr::Simple(Filter {
                column: prev.name.clone(),
                op: Operator::Eq,
                value: held.clone(),
            }));
        }
        and_terms.push(FilterExpr::Simple(Filter {
            column: col.name.clone(),
            op,
            value: bound.clone(),
        }));

        let term = match and_terms.len() {
            1 => and_terms.swap_remove(0),
            _ => FilterExpr::Compound(CompoundFilter::and(and_terms)),
        };
        or_terms.push(term);
    }

    Ok(Some(match or_terms.len() {
        1 => or_terms.swap_remove(0),
        _ => FilterExpr::Compound(CompoundFilter::or(or_terms)),
    }))
}

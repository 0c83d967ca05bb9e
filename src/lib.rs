// =============================================================================
// CRATE-LEVEL QUALITY LINTS (following Tokio/Serde standards)
// =============================================================================
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
#![allow(clippy::doc_markdown)] // Code items in docs - extensive doc changes needed
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::missing_panics_doc)] // # Panics sections - doc-heavy
#![allow(clippy::module_name_repetitions)] // Type names matching module - acceptable
#![allow(clippy::return_self_not_must_use)] // Builder pattern methods return Self by design
#![allow(clippy::must_use_candidate)] // Builder methods - fluent API doesn't need must_use
#![allow(clippy::cast_possible_truncation)] // Bounded by limit guards before casting
#![allow(clippy::cast_sign_loss)] // Numeric Value comparisons are total_cmp based
#![allow(clippy::cast_precision_loss)] // Int/Float cross-comparison is intentional

//! # seekset - keyset (seek) pagination engine
//!
//! Given an arbitrary multi-column sort order over a queryable row set, and
//! an optional directional cursor anchored to a previously-seen row, this
//! crate computes the filtering predicate and row ordering for the next or
//! previous page, detects whether more rows exist, and derives the
//! `after`/`before` cursor pair for continuing traversal.
//!
//! Keyset (a.k.a. seek-method) pagination filters by comparison against the
//! last seen row's values instead of skipping a row count, so pages stay
//! stable under concurrent inserts and deletes and never scan skipped rows.
//!
//! The engine is storage-agnostic: it talks to the row set through the
//! [`RowSource`] trait and hands it a [`FilterExpr`] predicate tree plus an
//! [`OrderSpec`]. A ready-made in-memory source ([`MemorySource`]) is
//! included for tests and small in-process collections.
//!
//! ## Quick start
//!
//! ```
//! use seekset::{MemoryRow, MemorySource, Options, TraversalParams, paginate};
//!
//! let mut source = MemorySource::new("id", &["id", "name"]);
//! for (id, name) in [(1_i64, "Nissan"), (2, "Honda"), (3, "Audi"), (4, "BMW")] {
//!     source.push(MemoryRow::new().with("id", id).with("name", name));
//! }
//!
//! // first page
//! let page = paginate(&source, &TraversalParams::none(), &Options::new().limit(2)).unwrap();
//! assert_eq!(page.rows.len(), 2);
//! assert!(page.has_next());
//! assert!(!page.has_prev());
//!
//! // follow the after cursor
//! let page = paginate(
//!     &source,
//!     &TraversalParams::from_tokens(page.after, None),
//!     &Options::new().limit(2),
//! )
//! .unwrap();
//! assert_eq!(page.rows.len(), 2);
//! assert!(!page.has_next());
//! assert!(page.has_prev());
//! ```
//!
//! ## How a page is computed
//!
//! 1. The source's pre-existing ordering is normalized into a total order by
//!    appending a unique tie-break column ([`OrderSpec::normalize`]).
//! 2. If a cursor token is present, the anchor row's full tuple is fetched
//!    ([`resolve_anchor`]) - multi-column seeking needs every ordered value,
//!    not just the key.
//! 3. A tuple-lexicographic seek predicate selects rows strictly past the
//!    anchor ([`seek_predicate`]).
//! 4. `limit + 1` rows are fetched under the resolved scan order; the extra
//!    sentinel row reveals whether more data exists.
//! 5. The page is assembled: reverse to display order for backward
//!    traversal, trim the sentinel, derive cursors ([`assemble`]).
//!
//! Cursor tokens are raw tie-break [`Value`]s. For transports that want a
//! single opaque string, [`encode_token`]/[`decode_token`] round-trip a
//! value through URL-safe base64.

mod error;
mod mem;
mod order;
mod page;
mod paginate;
mod predicate;
mod source;
mod token;
mod validate;
mod value;

pub use error::PaginateError;
pub use mem::{MemoryRow, MemorySource};
pub use order::{
    OrderColumn, OrderError, OrderExpr, OrderSpec, Resolved, SortDir, Traversal, resolve,
};
pub use page::{Page, assemble};
pub use paginate::{DEFAULT_LIMIT, Options, TraversalParams, paginate};
pub use predicate::{
    CompoundFilter, Filter, FilterExpr, LogicalOp, Operator, SeekError, and, not, or,
    seek_predicate, simple,
};
pub use source::{Anchor, RowSource, RowValues, resolve_anchor};
pub use token::{TokenError, decode_token, encode_token};
pub use validate::{assert_valid_identifier, is_valid_identifier};
pub use value::Value;

/// Prelude module for convenient imports.
///
/// ```
/// use seekset::prelude::*;
///
/// let mut source = MemorySource::new("id", &["id"]);
/// source.push(MemoryRow::new().with("id", 1_i64));
/// let page = paginate(&source, &TraversalParams::none(), &Options::new()).unwrap();
/// assert_eq!(page.rows.len(), 1);
/// ```
pub mod prelude {
    pub use crate::{
        Anchor, MemoryRow, MemorySource, Operator, Options, OrderColumn, OrderExpr, OrderSpec,
        Page, PaginateError, RowSource, RowValues, SortDir, Traversal, TraversalParams, Value,
        decode_token, encode_token, paginate,
    };
}

// ============================================================================
// API Contract Tests (compile-time assertions)
// ============================================================================

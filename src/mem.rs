//! An in-memory reference row source.
//!
//! [`MemorySource`] implements [`RowSource`] over owned rows: it evaluates
//! predicate trees against [`Value`]s, sorts by an [`OrderSpec`], and
//! applies limits. It backs this crate's tests and benches, and works as a
//! real source for paginating small in-process collections.
//!
//! Comparison semantics are total (see [`Value::compare`]): `Null` sorts
//! first and equals itself, unlike SQL's three-valued logic.

use std::cmp::Ordering;
use std::convert::Infallible;

use crate::order::{OrderExpr, OrderSpec, SortDir};
use crate::predicate::{Filter, FilterExpr, LogicalOp, Operator};
use crate::source::{RowSource, RowValues};
use crate::value::Value;

/// A row of named values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryRow {
    fields: Vec<(String, Value)>,
}

impl MemoryRow {
    /// An empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a column value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

impl RowValues for MemoryRow {
    fn value(&self, column: &str) -> Option<Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.clone())
    }
}

/// An in-memory row source with an explicit schema and key column.
#[derive(Debug, Clone)]
pub struct MemorySource {
    rows: Vec<MemoryRow>,
    key: String,
    columns: Vec<String>,
    ordering: Vec<OrderExpr>,
    order: Option<OrderSpec>,
    filters: Vec<FilterExpr>,
    limit: Option<u32>,
}

impl MemorySource {
    /// Create an empty source with `key` as its unique identifier column
    /// and `columns` as the schema (must include `key`).
    pub fn new(key: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            rows: Vec::new(),
            key: key.into(),
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            ordering: Vec::new(),
            order: None,
            filters: Vec::new(),
            limit: None,
        }
    }

    /// Append a row.
    pub fn push(&mut self, row: MemoryRow) {
        self.rows.push(row);
    }

    /// Set a pre-existing ordering, as a storage view would carry.
    #[must_use]
    pub fn with_ordering(mut self, ordering: Vec<OrderExpr>) -> Self {
        self.ordering = ordering;
        self
    }

    /// Add a base filter applied to every read, including key lookups.
    #[must_use]
    pub fn with_base_filter(mut self, predicate: FilterExpr) -> Self {
        self.filters.push(predicate);
        self
    }

    fn matches(&self, row: &MemoryRow) -> bool {
        self.filters.iter().all(|filter| eval(filter, row))
    }
}

impl RowSource for MemorySource {
    type Row = MemoryRow;
    type Error = Infallible;

    fn ordering(&self) -> Vec<OrderExpr> {
        self.ordering.clone()
    }

    fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    fn key_column(&self) -> &str {
        &self.key
    }

    fn reorder(&self, order: &OrderSpec) -> Self {
        let mut copy = self.clone();
        copy.order = Some(order.clone());
        copy
    }

    fn filtered(&self, predicate: &FilterExpr) -> Self {
        let mut copy = self.clone();
        copy.filters.push(predicate.clone());
        copy
    }

    fn limit(&self, limit: u32) -> Self {
        let mut copy = self.clone();
        copy.limit = Some(limit);
        copy
    }

    fn execute(&self) -> Result<Vec<MemoryRow>, Infallible> {
        let mut rows: Vec<MemoryRow> = self
            .rows
            .iter()
            .filter(|row| self.matches(row))
            .cloned()
            .collect();

        if let Some(order) = &self.order {
            rows.sort_by(|a, b| compare_rows(order, a, b));
        }
        if let Some(limit) = self.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }

    fn find_by_key(&self, column: &str, key: &Value) -> Result<Option<MemoryRow>, Infallible> {
        // ignores order and limit on purpose: key lookups see the whole
        // filtered set
        Ok(self
            .rows
            .iter()
            .filter(|row| self.matches(row))
            .find(|row| {
                row.value(column)
                    .is_some_and(|value| value.compare(key) == Ordering::Equal)
            })
            .cloned())
    }
}

fn compare_rows(order: &OrderSpec, a: &MemoryRow, b: &MemoryRow) -> Ordering {
    for col in order.columns() {
        let left = a.value(&col.name).unwrap_or(Value::Null);
        let right = b.value(&col.name).unwrap_or(Value::Null);
        let ord = match col.dir {
            SortDir::Asc => left.compare(&right),
            SortDir::Desc => left.compare(&right).reverse(),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn eval(expr: &FilterExpr, row: &MemoryRow) -> bool {
    match expr {
        FilterExpr::Simple(filter) => eval_filter(filter, row),
        FilterExpr::Compound(compound) => match compound.op {
            LogicalOp::And => compound.filters.iter().all(|f| eval(f, row)),
            LogicalOp::Or => compound.filters.iter().any(|f| eval(f, row)),
            LogicalOp::Not => !compound.filters.iter().all(|f| eval(f, row)),
        },
    }
}

fn eval_filter(filter: &Filter, row: &MemoryRow) -> bool {
    let value = row.value(&filter.column).unwrap_or(Value::Null);
    let ord = value.compare(&filter.value);
    match filter.op {
        Operator::Eq => ord == Ordering::Equal,
        Operator::Ne => ord != Ordering::Equal,
        Operator::Gt => ord == Ordering::Greater,
        Operator::Gte => ord != Ordering::Less,
        Operator::Lt => ord == Ordering::Less,
        Operator::Lte => ord != Ordering::Greater,
    }
}

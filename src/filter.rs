//! Filter engine: narrows a dataset to a date range and a supplier set.
//!
//! Filter steps only run for roles that were actually assigned and compose by
//! logical AND. Filtering always produces a fresh [`Dataset`]; the input is
//! never mutated, and applying the same [`FilterSpec`] twice yields an
//! identical result.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::{data::Value, dataset::Dataset, roles::RoleAssignment};

/// Inclusive calendar-date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// User-selected narrowing of a dataset. `None` fields mean the caller made
/// no selection: the date range defaults to the observed min/max and the
/// supplier step is skipped entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub date_range: Option<DateRange>,
    pub suppliers: Option<BTreeSet<String>>,
}

impl FilterSpec {
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn with_suppliers<I, S>(mut self, suppliers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppliers = Some(suppliers.into_iter().map(Into::into).collect());
        self
    }
}

/// Min/max over the parseable dates in the assigned Date column. `None` when
/// the role is unassigned or no cell parses to a date.
pub fn observed_date_range(dataset: &Dataset, roles: &RoleAssignment) -> Option<DateRange> {
    let date_col = roles.date?;
    let minmax = dataset
        .column_values(date_col)
        .flatten()
        .filter_map(Value::as_date)
        .minmax();
    match minmax {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(d) => Some(DateRange::new(d, d)),
        MinMaxResult::MinMax(min, max) => Some(DateRange::new(min, max)),
    }
}

/// Distinct non-missing supplier display values in first-appearance order,
/// for the presentation layer's selection widget. Empty when unassigned.
pub fn distinct_suppliers(dataset: &Dataset, roles: &RoleAssignment) -> Vec<String> {
    let Some(supplier_col) = roles.supplier else {
        return Vec::new();
    };
    let mut seen = BTreeSet::new();
    let mut suppliers = Vec::new();
    for value in dataset.column_values(supplier_col).flatten() {
        let name = value.as_display();
        if seen.insert(name.clone()) {
            suppliers.push(name);
        }
    }
    suppliers
}

/// Applies the date and supplier steps, returning the narrowed dataset.
///
/// Once the Date role is assigned, a row must carry a parseable date inside
/// the (possibly defaulted) range to survive; a dataset whose date cells all
/// fail to parse therefore filters to empty. An active supplier filter drops
/// rows with a missing supplier cell.
pub fn apply_filter(dataset: &Dataset, roles: &RoleAssignment, spec: &FilterSpec) -> Dataset {
    let date_step = roles.date.map(|col| {
        let range = spec.date_range.or_else(|| observed_date_range(dataset, roles));
        (col, range)
    });
    let supplier_step = match (roles.supplier, &spec.suppliers) {
        (Some(col), Some(allowed)) => Some((col, allowed)),
        _ => None,
    };

    dataset.retain_rows(|row| {
        if let Some((col, range)) = date_step {
            let date = row.get(col).and_then(|c| c.as_ref()).and_then(Value::as_date);
            match (date, range) {
                (Some(date), Some(range)) if range.contains(date) => {}
                _ => return false,
            }
        }
        if let Some((col, allowed)) = supplier_step {
            let supplier = row.get(col).and_then(|c| c.as_ref()).map(Value::as_display);
            match supplier {
                Some(name) if allowed.contains(&name) => {}
                _ => return false,
            }
        }
        true
    })
}

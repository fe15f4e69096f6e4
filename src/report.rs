//! Aggregations over the filtered dataset: scalar KPIs, monthly totals, and
//! the per-supplier distribution.
//!
//! Every aggregation whose prerequisite role is unassigned returns `None`
//! ("not available") instead of failing; the presentation layer treats that
//! as a first-class state and simply omits the widget.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{data::Value, dataset::Dataset, roles::RoleAssignment};

/// Scalar summary metrics. `total_amount` / `average_amount` are `None` when
/// the Amount role is unassigned or the filtered dataset has no rows — a
/// state distinct from a genuine zero total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpis {
    pub row_count: usize,
    pub total_amount: Option<f64>,
    pub average_amount: Option<f64>,
}

/// One calendar month's summed amount; `month` is the first of the month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    pub month: NaiveDate,
    pub total: f64,
}

/// One supplier's summed amount and its percentage share of the grand total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierTotal {
    pub supplier: String,
    pub total: f64,
    pub share: f64,
}

pub fn compute_kpis(dataset: &Dataset, roles: &RoleAssignment) -> Kpis {
    let row_count = dataset.row_count();
    let (total_amount, average_amount) = match roles.amount {
        Some(col) if row_count > 0 => {
            let amounts: Vec<f64> = dataset
                .column_values(col)
                .flatten()
                .filter_map(Value::as_number)
                .collect();
            let total: f64 = amounts.iter().sum();
            let average = if amounts.is_empty() {
                None
            } else {
                Some(total / amounts.len() as f64)
            };
            (Some(total), average)
        }
        _ => (None, None),
    };
    Kpis {
        row_count,
        total_amount,
        average_amount,
    }
}

/// Sums amounts per calendar month of the Date column, chronologically
/// ascending. Months without a contributing row are not emitted. `None`
/// unless both Date and Amount are assigned.
pub fn monthly_totals(dataset: &Dataset, roles: &RoleAssignment) -> Option<Vec<MonthlyTotal>> {
    let date_col = roles.date?;
    let amount_col = roles.amount?;

    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in dataset.rows() {
        let Some(date) = row.get(date_col).and_then(|c| c.as_ref()).and_then(Value::as_date)
        else {
            continue;
        };
        let month = month_start(date);
        let amount = row
            .get(amount_col)
            .and_then(|c| c.as_ref())
            .and_then(Value::as_number)
            .unwrap_or(0.0);
        *buckets.entry(month).or_insert(0.0) += amount;
    }

    Some(
        buckets
            .into_iter()
            .map(|(month, total)| MonthlyTotal { month, total })
            .collect(),
    )
}

/// Sums amounts per distinct supplier display value, in first-appearance
/// order. Rows with a missing supplier cell are excluded from grouping.
/// `None` unless both Supplier and Amount are assigned.
pub fn supplier_totals(dataset: &Dataset, roles: &RoleAssignment) -> Option<Vec<SupplierTotal>> {
    let supplier_col = roles.supplier?;
    let amount_col = roles.amount?;

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();
    for row in dataset.rows() {
        let Some(supplier) = row.get(supplier_col).and_then(|c| c.as_ref()).map(Value::as_display)
        else {
            continue;
        };
        let amount = row
            .get(amount_col)
            .and_then(|c| c.as_ref())
            .and_then(Value::as_number)
            .unwrap_or(0.0);
        if !totals.contains_key(&supplier) {
            order.push(supplier.clone());
        }
        *totals.entry(supplier).or_insert(0.0) += amount;
    }

    let grand_total: f64 = totals.values().sum();
    Some(
        order
            .into_iter()
            .map(|supplier| {
                let total = totals[&supplier];
                let share = if grand_total == 0.0 {
                    0.0
                } else {
                    total / grand_total * 100.0
                };
                SupplierTotal {
                    supplier,
                    total,
                    share,
                }
            })
            .collect(),
    )
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // day 1 always exists for a valid year/month
    date.with_day(1).unwrap_or(date)
}

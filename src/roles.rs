//! Heuristic column-role inference.
//!
//! Column names are matched case-insensitively against fixed keyword sets
//! (English and Italian). Roles are resolved in priority order Date, Amount,
//! Supplier; within a role the first matching column in source order wins,
//! and a column claimed by an earlier role is not eligible for later ones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    Date,
    Amount,
    Supplier,
}

impl ColumnRole {
    /// Priority order used during inference.
    pub const ALL: [ColumnRole; 3] = [ColumnRole::Date, ColumnRole::Amount, ColumnRole::Supplier];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ColumnRole::Date => &["date", "data"],
            ColumnRole::Amount => &["amount", "importo"],
            ColumnRole::Supplier => &["supplier", "fornitore"],
        }
    }

    fn matches(self, column_name: &str) -> bool {
        let lowered = column_name.to_lowercase();
        self.keywords().iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Column indices claimed by each role. An unassigned role turns every
/// downstream feature that needs it into a no-op, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub date: Option<usize>,
    pub amount: Option<usize>,
    pub supplier: Option<usize>,
}

pub fn infer_roles(columns: &[String]) -> RoleAssignment {
    let mut assignment = RoleAssignment::default();
    let mut claimed = vec![false; columns.len()];

    for role in ColumnRole::ALL {
        let found = columns
            .iter()
            .enumerate()
            .find(|(idx, name)| !claimed[*idx] && role.matches(name));
        if let Some((idx, _)) = found {
            claimed[idx] = true;
            match role {
                ColumnRole::Date => assignment.date = Some(idx),
                ColumnRole::Amount => assignment.amount = Some(idx),
                ColumnRole::Supplier => assignment.supplier = Some(idx),
            }
        }
    }
    assignment
}

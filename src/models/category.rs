//! Expense categories
//!
//! Aggregation works over a closed set of six buckets. Expenses store
//! their category as a free-form string so unrecognized values survive a
//! storage round trip; only the aggregation step maps labels into the
//! closed set, folding anything unknown into `Other`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six fixed classification buckets for expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Accommodation,
    Food,
    Transportation,
    Activities,
    Shopping,
    Other,
}

impl ExpenseCategory {
    /// All buckets, in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Accommodation,
        Self::Food,
        Self::Transportation,
        Self::Activities,
        Self::Shopping,
        Self::Other,
    ];

    /// Map a stored category label into a bucket
    ///
    /// Unrecognized labels fold into `Other`; the stored string itself is
    /// never rewritten.
    pub fn from_label(label: &str) -> Self {
        match label {
            "accommodation" => Self::Accommodation,
            "food" => Self::Food,
            "transportation" => Self::Transportation,
            "activities" => Self::Activities,
            "shopping" => Self::Shopping,
            _ => Self::Other,
        }
    }

    /// The canonical lowercase label for this bucket
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Activities => "activities",
            Self::Shopping => "shopping",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Budget engine: pure derived metrics over trip snapshots
//!
//! Everything in this module is a deterministic function of its inputs.
//! The engine never touches storage; the presentation layer fetches a
//! trip from the store and asks the engine for the numbers it renders.

pub mod format;
pub mod metrics;
pub mod schedule;

pub use format::format_currency;
pub use metrics::{
    budget_progress_percent, category_percentages, daily_budget, daily_spending,
    expenses_by_category, is_over_budget, remaining_budget, total_expenses,
};
pub use schedule::{
    date_range_label, date_range_label_at, enumerate_date_range, trip_duration_days, trip_status,
    trip_status_on, TripStatus,
};

//! Read-only aggregations over integration snapshots.
//!
//! Everything here is a pure function of the integrations passed in and the
//! supplied timestamp.

mod actions;
mod dashboard;
mod sprint;

pub use actions::{BLOCKED_TITLES_SHOWN, RecommendedActions, stage_checklist};
pub use dashboard::{Dashboard, RecentUpdate};
pub use sprint::{SprintReport, SprintSummary, sprint_report};

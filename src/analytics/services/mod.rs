//! Application services for reporting.

mod aggregation;

pub use aggregation::AnalyticsService;

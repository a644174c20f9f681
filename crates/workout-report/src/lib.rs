//! Report driver for workout packages.
//!
//! Feeds a list of raw sensor packages through [`workouts`] and writes one
//! summary line per package, in input order.

pub mod config;
pub mod runner;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ErrorPolicy, Package, ReportConfig};
    pub use crate::runner::{ReportStats, summarize_packages, write_report};
}

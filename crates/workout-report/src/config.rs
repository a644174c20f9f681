//! Configuration for report runs.

use serde::{Deserialize, Serialize};

/// A raw sensor package: a type code and its positional readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub type_code: String,
    pub fields: Vec<f64>,
}

impl Package {
    pub fn new(type_code: impl Into<String>, fields: impl Into<Vec<f64>>) -> Self {
        Self {
            type_code: type_code.into(),
            fields: fields.into(),
        }
    }
}

/// What to do when a package cannot be turned into a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first invalid package.
    #[default]
    Abort,
    /// Log the invalid package and continue with the rest.
    Skip,
}

/// Configuration for a report run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Packages to report on, in output order.
    pub packages: Vec<Package>,

    /// Handling of invalid packages.
    pub on_error: ErrorPolicy,

    /// Whether summaries are computed on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            packages: sample_packages(),
            on_error: ErrorPolicy::default(),
            parallel: false,
        }
    }
}

impl ReportConfig {
    /// Creates a configuration for the given packages with default settings.
    pub fn with_packages(packages: Vec<Package>) -> Self {
        Self {
            packages,
            ..Default::default()
        }
    }

    pub fn on_error(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// The built-in sensor packages reported by the `report` binary.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

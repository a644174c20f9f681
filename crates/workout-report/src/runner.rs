//! Runs packages through the calculators and writes report lines.

use std::io::Write;

use anyhow::Context;
use rayon::prelude::*;
use tracing::{info, warn};
use workouts::prelude::*;

use crate::config::{ErrorPolicy, Package, ReportConfig};

/// Counts from a finished report run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub written: usize,
    pub skipped: usize,
}

fn summarize_package(package: &Package) -> Result<Summary> {
    create_record(&package.type_code, &package.fields).map(|record| record.summarize())
}

/// Computes summaries for every configured package, in input order.
///
/// Invalid packages either abort the run or are dropped, depending on
/// [`ReportConfig::on_error`].
pub fn summarize_packages(config: &ReportConfig) -> anyhow::Result<(Vec<Summary>, ReportStats)> {
    let results: Vec<Result<Summary>> = if config.parallel {
        config.packages.par_iter().map(summarize_package).collect()
    } else {
        config.packages.iter().map(summarize_package).collect()
    };

    let mut stats = ReportStats::default();
    let mut summaries = Vec::with_capacity(results.len());

    for (index, (package, result)) in config.packages.iter().zip(results).enumerate() {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) if config.on_error == ErrorPolicy::Skip => {
                warn!(index, type_code = %package.type_code, "Skipping invalid package: {e}");
                stats.skipped += 1;
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Invalid package #{index} ({})", package.type_code)
                });
            }
        }
    }

    Ok((summaries, stats))
}

/// Writes one report line per valid package to `out`.
///
/// Nothing is written if the run aborts on an invalid package.
pub fn write_report(config: &ReportConfig, out: &mut impl Write) -> anyhow::Result<ReportStats> {
    let (summaries, mut stats) = summarize_packages(config)?;

    for summary in &summaries {
        writeln!(out, "{summary}")?;
        stats.written += 1;
    }

    info!(
        written = stats.written,
        skipped = stats.skipped,
        "Report completed"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(config: &ReportConfig) -> anyhow::Result<(String, ReportStats)> {
        let mut out = Vec::new();
        let stats = write_report(config, &mut out)?;
        Ok((String::from_utf8(out)?, stats))
    }

    #[test]
    fn test_default_report() {
        let (text, stats) = report(&ReportConfig::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(stats, ReportStats { written: 3, skipped: 0 });
        assert!(lines[0].starts_with("Тип тренировки: Swimming;"));
        assert!(lines[1].starts_with("Тип тренировки: Running;"));
        assert!(lines[2].starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_abort_on_invalid_package() {
        let config = ReportConfig::with_packages(vec![
            Package::new("RUN", [15000.0, 1.0, 75.0]),
            Package::new("XYZ", [1.0, 1.0, 1.0]),
        ]);

        let err = report(&config).unwrap_err();
        assert_eq!(err.to_string(), "Invalid package #1 (XYZ)");
        assert_eq!(
            err.downcast_ref::<WorkoutError>(),
            Some(&WorkoutError::UnknownWorkoutType("XYZ".to_string()))
        );
    }

    #[test]
    fn test_skip_invalid_packages() {
        let config = ReportConfig::with_packages(vec![
            Package::new("RUN", [1.0, 2.0]),
            Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
            Package::new("SWM", [720.0, 0.0, 80.0, 25.0, 40.0]),
        ])
        .on_error(ErrorPolicy::Skip);

        let (text, stats) = report(&config).unwrap();
        assert_eq!(stats, ReportStats { written: 1, skipped: 2 });
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_parallel_preserves_order() {
        let packages: Vec<Package> = (1..=50)
            .map(|i| Package::new("RUN", [f64::from(i) * 1000.0, 1.0, 75.0]))
            .collect();
        let config = ReportConfig::with_packages(packages);

        let (sequential, _) = summarize_packages(&config).unwrap();
        let (parallel, _) = summarize_packages(&config.clone().parallel(true)).unwrap();

        assert_eq!(sequential, parallel);
        assert!(
            parallel
                .windows(2)
                .all(|w| w[0].distance_km < w[1].distance_km)
        );
    }
}

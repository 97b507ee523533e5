//! Integration tests verifying the public module structure.

#[test]
fn test_descriptive_exports() {
    use randstat_stats::descriptive::DescriptiveStatistics;

    let stats = DescriptiveStatistics::new(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(stats.mean().unwrap(), 2.0);
    assert_eq!(stats.len(), 3);
}

#[test]
fn test_histogram_exports() {
    use randstat_stats::histogram::{Histogram, PRINT_SCALE};

    let hist = Histogram::from_samples(&[0.0, 1.0, 2.0, 3.0]).unwrap();
    assert!(hist.bins() >= 1);
    assert!(PRINT_SCALE > 0.0);
}

#[test]
fn test_proportion_exports() {
    use randstat_stats::proportion::{ci95, ci99, confidence_interval};

    let counts = [1.0, 0.0, 1.0, 1.0];
    assert!(confidence_interval(&counts, 0.9).is_ok());
    assert!(ci95(&counts).is_ok());
    assert!(ci99(&counts).is_ok());
}

#[test]
fn test_crate_root_reexports() {
    use randstat_stats::{DescriptiveStatistics, Histogram, StatsError};

    let err = StatsError::EmptySample;
    assert_eq!(err.to_string(), "Sample set is empty");

    let stats = DescriptiveStatistics::new(&[0.0, 5.0, 10.0]).unwrap();
    assert!(Histogram::with_bins(&stats, 2).is_ok());
}

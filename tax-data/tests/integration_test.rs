//! Integration tests for loading schedules from files on disk.

use std::fs::File;
use std::io::Write;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::calculations::TaxReportBuilder;
use tax_core::{ScheduleError, ScheduleSet};
use tax_data::{ScheduleLoader, ScheduleLoaderError};

const REFERENCE_CSV: &str = include_str!("../test-data/reference_schedules.csv");

#[test]
fn test_reference_csv_matches_built_in_tables() {
    let set = ScheduleLoader::load(REFERENCE_CSV.as_bytes()).expect("Failed to load CSV");

    assert_eq!(set, ScheduleSet::reference());
}

#[test]
fn test_reference_csv_replaces_all_four_schedules() {
    let records = ScheduleLoader::parse(REFERENCE_CSV.as_bytes()).expect("Failed to parse CSV");
    let mut set = ScheduleSet::reference();

    let replaced = ScheduleLoader::apply(&mut set, &records).expect("Failed to apply");

    assert_eq!(records.len(), 15);
    assert_eq!(replaced.len(), 4);
}

#[test]
fn test_loaded_schedules_drive_report() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("flat_state.csv");
    let mut file = File::create(&path).expect("Failed to create CSV");
    writeln!(file, "schedule,rate,upper_bound").unwrap();
    writeln!(file, "state,0.04,").unwrap();
    drop(file);

    let set = ScheduleLoader::load(File::open(&path).unwrap()).expect("Failed to load CSV");
    let report = TaxReportBuilder::new(&set).build(dec!(50000)).unwrap();

    assert_eq!(report.state_tax, dec!(2000.00));
    assert_eq!(report.federal_tax, dec!(6790.00));
    assert_eq!(report.total_tax, dec!(12615.00));
    assert_eq!(report.net_income, dec!(37385.00));
}

#[test]
fn test_interleaved_rows_keep_bracket_order() {
    let csv = "schedule,rate,upper_bound
medicare,0.01,1000
state,0.02,
medicare,0.03,
";

    let set = ScheduleLoader::load(csv.as_bytes()).expect("Failed to load CSV");

    assert_eq!(set.medicare.brackets().len(), 2);
    assert_eq!(set.medicare.brackets()[0].upper_bound, Some(dec!(1000)));
    assert_eq!(set.medicare.brackets()[1].upper_bound, None);
}

#[test]
fn test_misconfigured_schedule_fails_fast() {
    let csv = "schedule,rate,upper_bound
federal,0.10,9875
federal,0.37,
federal,0.40,
";

    let err = ScheduleLoader::load(csv.as_bytes()).expect_err("Should reject schedule");

    match err {
        ScheduleLoaderError::Schedule(ScheduleError::UnboundedBeforeEnd { schedule, index }) => {
            assert_eq!(schedule, "federal");
            assert_eq!(index, 1);
        }
        other => panic!("expected UnboundedBeforeEnd, got {other:?}"),
    }
}

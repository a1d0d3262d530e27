use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{Bracket, BracketSchedule, ScheduleError, ScheduleKind, ScheduleSet};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading bracket schedules.
#[derive(Debug, Error)]
pub enum ScheduleLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Unknown schedule '{0}' (expected federal, state, medicare or social_security)")]
    UnknownSchedule(String),

    #[error("Invalid schedule: {0}")]
    Schedule(#[from] ScheduleError),
}

impl From<csv::Error> for ScheduleLoaderError {
    fn from(err: csv::Error) -> Self {
        ScheduleLoaderError::CsvParse(err.to_string())
    }
}

/// A single bracket row from a schedules CSV file.
///
/// - `schedule`: federal, state, medicare or social_security
/// - `rate`: the marginal rate as a fraction (e.g. 0.12 for 12%)
/// - `upper_bound`: the bracket ceiling, empty for the unbounded top bracket
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub schedule: String,
    pub rate: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedules stored as CSV.
///
/// Rows are grouped by schedule name; within a schedule, row order is bracket
/// order. Schedules missing from the file keep their reference values.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse bracket records from a CSV reader.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketRecord>, ScheduleLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Group records into validated schedules, in order of first appearance.
    pub fn build(
        records: &[BracketRecord]
    ) -> Result<Vec<(ScheduleKind, BracketSchedule)>, ScheduleLoaderError> {
        let mut groups: Vec<(ScheduleKind, Vec<Bracket>)> = Vec::new();

        for record in records {
            let kind = ScheduleKind::parse(&record.schedule)
                .ok_or_else(|| ScheduleLoaderError::UnknownSchedule(record.schedule.clone()))?;
            let bracket = Bracket {
                rate: record.rate,
                upper_bound: record.upper_bound,
            };

            match groups.iter_mut().find(|(k, _)| *k == kind) {
                Some((_, brackets)) => brackets.push(bracket),
                None => groups.push((kind, vec![bracket])),
            }
        }

        groups
            .into_iter()
            .map(|(kind, brackets)| {
                let schedule = BracketSchedule::new(kind.as_str(), brackets)?;
                Ok((kind, schedule))
            })
            .collect()
    }

    /// Replace the schedules named in `records` within `set`.
    ///
    /// Returns the kinds that were replaced. Nothing is replaced if any
    /// schedule fails validation.
    pub fn apply(
        set: &mut ScheduleSet,
        records: &[BracketRecord],
    ) -> Result<Vec<ScheduleKind>, ScheduleLoaderError> {
        let schedules = Self::build(records)?;
        let mut replaced = Vec::with_capacity(schedules.len());

        for (kind, schedule) in schedules {
            debug!(
                schedule = kind.as_str(),
                brackets = schedule.brackets().len(),
                "replacing schedule"
            );
            set.replace(kind, schedule);
            replaced.push(kind);
        }

        Ok(replaced)
    }

    /// Read a CSV into a full [`ScheduleSet`], starting from the reference tables.
    pub fn load<R: Read>(reader: R) -> Result<ScheduleSet, ScheduleLoaderError> {
        let records = Self::parse(reader)?;
        let mut set = ScheduleSet::reference();
        let replaced = Self::apply(&mut set, &records)?;

        info!(
            records = records.len(),
            schedules = replaced.len(),
            "loaded bracket schedules"
        );

        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const TEST_CSV: &str = r#"schedule,rate,upper_bound
federal,0.10,9875
federal,0.12,40125
federal,0.22,
state,0.05,
"#;

    #[test]
    fn test_parse_csv_bounded_row() {
        let csv = "schedule,rate,upper_bound\nfederal,0.10,9875";

        let records = ScheduleLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(
            records,
            vec![BracketRecord {
                schedule: "federal".to_string(),
                rate: dec!(0.10),
                upper_bound: Some(dec!(9875)),
            }]
        );
    }

    #[test]
    fn test_parse_csv_unbounded_row() {
        let csv = "schedule,rate,upper_bound\nfederal,0.37,";

        let records = ScheduleLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records[0].upper_bound, None);
        assert_eq!(records[0].rate, dec!(0.37));
    }

    #[test]
    fn test_parse_csv_whitespace_bound_is_unbounded() {
        let csv = "schedule,rate,upper_bound\nstate,0.0765,  ";

        let records = ScheduleLoader::parse(csv.as_bytes()).expect("Failed to parse CSV");

        assert_eq!(records[0].upper_bound, None);
    }

    #[test]
    fn test_parse_invalid_csv_missing_column() {
        let csv = "schedule,rate\nfederal,0.10";

        let err = ScheduleLoader::parse(csv.as_bytes()).expect_err("Should fail for missing column");

        let ScheduleLoaderError::CsvParse(msg) = err else {
            panic!("Expected CsvParse error, got: {:?}", err);
        };
        assert!(msg.contains("missing field"), "got: {}", msg);
    }

    #[test]
    fn test_parse_invalid_csv_bad_decimal() {
        let csv = "schedule,rate,upper_bound\nfederal,0.10,lots";

        let err = ScheduleLoader::parse(csv.as_bytes()).expect_err("Should fail for invalid decimal");

        assert!(matches!(err, ScheduleLoaderError::CsvParse(_)));
    }

    #[test]
    fn test_build_groups_rows_by_schedule() {
        let records = ScheduleLoader::parse(TEST_CSV.as_bytes()).unwrap();

        let schedules = ScheduleLoader::build(&records).expect("Should build schedules");

        assert_eq!(schedules.len(), 2);
        assert_eq!(schedules[0].0, ScheduleKind::Federal);
        assert_eq!(
            schedules[0].1.brackets(),
            &[
                Bracket::bounded(dec!(0.10), dec!(9875)),
                Bracket::bounded(dec!(0.12), dec!(40125)),
                Bracket::unbounded(dec!(0.22)),
            ]
        );
        assert_eq!(schedules[1].0, ScheduleKind::State);
    }

    #[test]
    fn test_build_rejects_unknown_schedule() {
        let csv = "schedule,rate,upper_bound\nwisconsin,0.05,";
        let records = ScheduleLoader::parse(csv.as_bytes()).unwrap();

        match ScheduleLoader::build(&records) {
            Err(ScheduleLoaderError::UnknownSchedule(name)) => assert_eq!(name, "wisconsin"),
            other => panic!("expected UnknownSchedule, got {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_schedule_without_unbounded_bracket() {
        let csv = "schedule,rate,upper_bound\nsocial_security,0.062,137000";
        let records = ScheduleLoader::parse(csv.as_bytes()).unwrap();

        let err = ScheduleLoader::build(&records).unwrap_err();

        assert!(matches!(
            err,
            ScheduleLoaderError::Schedule(ScheduleError::MissingUnboundedBracket { .. })
        ));
    }

    #[test]
    fn test_apply_leaves_set_untouched_on_error() {
        let csv = "schedule,rate,upper_bound\nstate,0.05,\nmedicare,0.01,100";
        let records = ScheduleLoader::parse(csv.as_bytes()).unwrap();
        let mut set = ScheduleSet::reference();

        assert!(ScheduleLoader::apply(&mut set, &records).is_err());
        assert_eq!(set, ScheduleSet::reference());
    }

    #[test]
    fn test_load_overrides_only_listed_schedules() {
        let set = ScheduleLoader::load(TEST_CSV.as_bytes()).expect("Should load");
        let reference = ScheduleSet::reference();

        assert_eq!(set.federal.brackets().len(), 3);
        assert_eq!(set.state.brackets(), &[Bracket::unbounded(dec!(0.05))]);
        assert_eq!(set.medicare, reference.medicare);
        assert_eq!(set.social_security, reference.social_security);
    }

    #[test]
    fn test_load_empty_csv_is_reference() {
        let set = ScheduleLoader::load("schedule,rate,upper_bound\n".as_bytes()).unwrap();

        assert_eq!(set, ScheduleSet::reference());
    }
}

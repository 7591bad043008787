//! Raw time series of observations (e.g. hourly electricity load or solar output).
use anyhow::{Context, Result, bail, ensure};
use chrono::{Duration, DurationRound, NaiveDateTime};
use std::path::Path;

/// Accepted formats for timestamps in time series files
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A series of timestamped observations, in chronological order
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    points: Vec<(NaiveDateTime, f64)>,
}

impl TimeSeries {
    /// Create a time series from the given points, which are sorted by time
    pub fn new(mut points: Vec<(NaiveDateTime, f64)>) -> Result<Self> {
        ensure!(!points.is_empty(), "Time series cannot be empty");
        ensure!(
            points.iter().all(|(_, value)| value.is_finite()),
            "Time series values must be finite numbers"
        );
        points.sort_by_key(|(time, _)| *time);

        Ok(Self { points })
    }

    /// Create a time series of consecutive hourly values beginning at `start`
    pub fn hourly(start: NaiveDateTime, values: &[f64]) -> Result<Self> {
        let mut time = start;
        let mut points = Vec::with_capacity(values.len());
        for value in values {
            points.push((time, *value));
            time += Duration::hours(1);
        }

        Self::new(points)
    }

    /// Read a time series from a CSV file.
    ///
    /// The first column must contain timestamps and the second the observed values. The file must
    /// have a header row. Rows with no value are ignored.
    pub fn from_csv(file_path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(file_path)
            .with_context(|| format!("Could not open {}", file_path.display()))?;

        let mut points = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.with_context(|| input_row_msg(file_path, row))?;
            let (time, value): (String, Option<f64>) = record
                .deserialize(None)
                .with_context(|| input_row_msg(file_path, row))?;
            if let Some(value) = value {
                let time = parse_timestamp(&time).with_context(|| input_row_msg(file_path, row))?;
                points.push((time, value));
            }
        }

        Self::new(points).with_context(|| format!("Error reading {}", file_path.display()))
    }

    /// The number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false, as empty time series cannot be constructed
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the observations in chronological order
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.points.iter().copied()
    }

    /// The largest observed value
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|(_, value)| *value)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Average the observations falling within each clock hour.
    ///
    /// The returned series has one point per hour for which there was at least one observation.
    pub fn hourly_means(&self) -> Result<Vec<(NaiveDateTime, f64)>> {
        let mut means: Vec<(NaiveDateTime, f64, u32)> = Vec::new();
        for (time, value) in self.iter() {
            let hour = time
                .duration_trunc(Duration::hours(1))
                .with_context(|| format!("Could not truncate {time} to the hour"))?;
            match means.last_mut() {
                Some((last, sum, count)) if *last == hour => {
                    *sum += value;
                    *count += 1;
                }
                _ => means.push((hour, value, 1)),
            }
        }

        Ok(means
            .into_iter()
            .map(|(hour, sum, count)| (hour, sum / f64::from(count)))
            .collect())
    }
}

/// Parse a timestamp in one of the accepted formats
fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(time) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(time);
        }
    }

    bail!("Invalid timestamp: {s}")
}

fn input_row_msg(file_path: &Path, row: usize) -> String {
    format!("Error reading {} (data row {})", file_path.display(), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn datetime(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_timestamp() {
        let expected = datetime(1, 2, 3, 30);
        assert_eq!(parse_timestamp("2019-01-02 03:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp("2019-01-02T03:30:00").unwrap(), expected);
        assert_eq!(parse_timestamp(" 2019-01-02 03:30 ").unwrap(), expected);
        assert_error!(parse_timestamp("02/01/2019"), "Invalid timestamp: 02/01/2019");
    }

    #[test]
    fn test_from_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("load.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(
                file,
                "time,kw\n\
                2019-01-01 01:00:00,2.0\n\
                2019-01-01 00:00:00,1.0\n\
                2019-01-01 02:00:00,\n\
                2019-01-01 03:00:00,4.0"
            )
            .unwrap();
        }

        let series = TimeSeries::from_csv(&file_path).unwrap();
        assert_eq!(
            series.iter().collect::<Vec<_>>(),
            [
                (datetime(1, 1, 0, 0), 1.0),
                (datetime(1, 1, 1, 0), 2.0),
                (datetime(1, 1, 3, 0), 4.0)
            ]
        );
        assert_approx_eq!(f64, series.max_value(), 4.0);
    }

    #[test]
    fn test_from_csv_bad_value() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("load.csv");
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "time,kw\n2019-01-01 00:00:00,lots").unwrap();
        }

        assert!(TimeSeries::from_csv(&file_path).is_err());
    }

    #[test]
    fn test_empty() {
        assert_error!(TimeSeries::new(Vec::new()), "Time series cannot be empty");
    }

    #[test]
    fn test_hourly_means() {
        let series = TimeSeries::new(vec![
            (datetime(1, 1, 0, 0), 1.0),
            (datetime(1, 1, 0, 30), 3.0),
            (datetime(1, 1, 2, 15), 5.0),
        ])
        .unwrap();
        assert_eq!(
            series.hourly_means().unwrap(),
            [(datetime(1, 1, 0, 0), 2.0), (datetime(1, 1, 2, 0), 5.0)]
        );
    }
}

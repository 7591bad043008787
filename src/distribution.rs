//! Distributing a raw time series across the season × hour grid.
//!
//! A demand profile answers the question "what fraction of annual demand falls in this time
//! slice?" and so sums to one. A capacity factor profile gives the output in each time slice as a
//! fraction of the peak observed value.
use crate::time_series::TimeSeries;
use crate::time_slice::TimeSliceGrid;
use anyhow::{Context, Result, bail, ensure};
use chrono::{Datelike, Duration, NaiveDateTime, Timelike};
use itertools::Itertools;
use log::warn;
use strum::{Display, EnumString};

/// Hours in a day
const HOURS_PER_DAY: usize = 24;

/// Hourly observations needed for a year to be used in a daily profile
const HOURS_PER_YEAR: usize = 8760;

/// Seasons for northern latitudes, in order
const SEASONS: [&str; 4] = ["spring", "summer", "fall", "winter"];

/// The kind of profile to produce from a time series
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum ProfileKind {
    /// Fractions of the annual total (sums to one)
    #[strum(serialize = "demand")]
    Demand,
    /// Fractions of the peak observed value
    #[strum(serialize = "cf")]
    CapacityFactor,
}

impl ProfileKind {
    /// Look up a profile kind by name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Self>()
            .ok()
            .with_context(|| format!("Unknown profile kind: {name} (expected demand or cf)"))
    }
}

/// How observations are grouped into seasons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Spring, summer, fall and winter × 24 hours
    FourSeasons,
    /// Calendar months × 24 hours
    Monthly,
    /// Days of the year × 24 hours
    Daily,
}

impl Resolution {
    /// The grouping strategy for the given grid
    pub fn from_grid(grid: &TimeSliceGrid) -> Result<Self> {
        match (grid.n_seasons(), grid.n_hours()) {
            (4, 24) => Ok(Self::FourSeasons),
            (12, 24) => Ok(Self::Monthly),
            (365, 24) => Ok(Self::Daily),
            (n_seasons, n_hours) => bail!(
                "Unsupported time slice resolution: {n_seasons} seasons × {n_hours} hours \
                (supported: 4 × 24, 12 × 24, 365 × 24)"
            ),
        }
    }
}

/// Distribute `series` across the time slices of `grid`.
///
/// The returned values are in the grid's canonical (season-major) order.
pub fn distribute(series: &TimeSeries, grid: &TimeSliceGrid, kind: ProfileKind) -> Result<Vec<f64>> {
    let profile = match Resolution::from_grid(grid)? {
        Resolution::FourSeasons => {
            let groups = group_by_hour(series, SEASONS.len(), |time| season_index(time.month()))?;
            normalise_groups(&groups, series, kind, |i| SEASONS[i].to_string())?
        }
        Resolution::Monthly => {
            let groups = group_by_hour(series, 12, |time| time.month0() as usize)?;
            normalise_groups(&groups, series, kind, |i| format!("month {}", i + 1))?
        }
        Resolution::Daily => {
            let profile = daily_profile(series)?;
            match kind {
                ProfileKind::Demand => {
                    let total: f64 = profile.iter().sum();
                    ensure!(total > 0.0, "Cannot normalise a demand profile with a zero total");
                    profile.into_iter().map(|value| value / total).collect()
                }
                ProfileKind::CapacityFactor => divide_by_peak(profile, series)?,
            }
        }
    };
    grid.check_len(&profile)?;

    Ok(profile)
}

/// The index into [`SEASONS`] of the season containing the given month (1-12)
fn season_index(month: u32) -> usize {
    match month {
        3..=5 => 0,
        6..=8 => 1,
        9..=11 => 2,
        _ => 3,
    }
}

/// Average observations by hour of day within each group
fn group_by_hour<F>(series: &TimeSeries, n_groups: usize, group_of: F) -> Result<Vec<Vec<f64>>>
where
    F: Fn(NaiveDateTime) -> usize,
{
    let mut sums = vec![vec![0.0; HOURS_PER_DAY]; n_groups];
    let mut counts = vec![vec![0u32; HOURS_PER_DAY]; n_groups];
    for (time, value) in series.iter() {
        let group = group_of(time);
        let hour = time.hour() as usize;
        sums[group][hour] += value;
        counts[group][hour] += 1;
    }

    sums.into_iter()
        .zip(counts)
        .enumerate()
        .map(|(group, (sums, counts))| {
            sums.into_iter()
                .zip(counts)
                .enumerate()
                .map(|(hour, (sum, count))| {
                    ensure!(
                        count > 0,
                        "No observations for hour {hour} of group {}",
                        group + 1
                    );
                    Ok(sum / f64::from(count))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

/// Normalise grouped hourly averages and flatten them in group order
fn normalise_groups<F>(
    groups: &[Vec<f64>],
    series: &TimeSeries,
    kind: ProfileKind,
    group_name: F,
) -> Result<Vec<f64>>
where
    F: Fn(usize) -> String,
{
    match kind {
        ProfileKind::Demand => {
            let n_groups = groups.len() as f64;
            let mut profile = Vec::with_capacity(groups.len() * HOURS_PER_DAY);
            for (i, hourly) in groups.iter().enumerate() {
                let total: f64 = hourly.iter().sum();
                ensure!(
                    total > 0.0,
                    "Cannot normalise a demand profile: total for {} is zero",
                    group_name(i)
                );
                profile.extend(hourly.iter().map(|value| value / (n_groups * total)));
            }

            Ok(profile)
        }
        ProfileKind::CapacityFactor => divide_by_peak(groups.concat(), series),
    }
}

/// Express each value as a fraction of the largest value in `series`
fn divide_by_peak(profile: Vec<f64>, series: &TimeSeries) -> Result<Vec<f64>> {
    let peak = series.max_value();
    ensure!(
        peak > 0.0,
        "Cannot compute a capacity factor profile: peak value is {peak}"
    );

    Ok(profile.into_iter().map(|value| value / peak).collect())
}

/// Hourly values from the first to the last observed hour, with gaps linearly interpolated
fn fill_hourly_gaps(hourly: &[(NaiveDateTime, f64)]) -> Vec<(NaiveDateTime, f64)> {
    let mut filled = Vec::with_capacity(hourly.len());
    for ((t0, v0), (t1, v1)) in hourly.iter().copied().tuple_windows() {
        let steps = (t1 - t0).num_hours();
        for step in 0..steps {
            let fraction = step as f64 / steps as f64;
            filled.push((t0 + Duration::hours(step), v0 + fraction * (v1 - v0)));
        }
    }
    if let Some(last) = hourly.last() {
        filled.push(*last);
    }

    filled
}

/// Average hourly profile over all complete years in `series`
fn daily_profile(series: &TimeSeries) -> Result<Vec<f64>> {
    let hourly = fill_hourly_gaps(&series.hourly_means()?);

    let mut years = Vec::new();
    for (year, points) in &hourly.into_iter().chunk_by(|(time, _)| time.year()) {
        let values = points.map(|(_, value)| value).collect_vec();
        if values.len() >= HOURS_PER_YEAR {
            years.push(values);
        } else {
            warn!(
                "Ignoring {year} in daily profile: only {} of {HOURS_PER_YEAR} hourly values",
                values.len()
            );
        }
    }
    ensure!(
        !years.is_empty(),
        "Time series does not contain a complete year of hourly data"
    );

    let n_years = years.len() as f64;
    Ok((0..HOURS_PER_YEAR)
        .map(|i| years.iter().map(|year| year[i]).sum::<f64>() / n_years)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::assert_error;
    use chrono::NaiveDate;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    fn start_of(year: i32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// A year of hourly data where the value is the hour of day plus one, doubled in summer
    fn hourly_year() -> TimeSeries {
        let values = (0..HOURS_PER_YEAR)
            .map(|i| {
                let time = start_of(2019) + Duration::hours(i as i64);
                let base = f64::from(time.hour() + 1);
                if (6..=8).contains(&time.month()) {
                    2.0 * base
                } else {
                    base
                }
            })
            .collect_vec();
        TimeSeries::hourly(start_of(2019), &values).unwrap()
    }

    #[rstest]
    #[case("demand", ProfileKind::Demand)]
    #[case("Demand", ProfileKind::Demand)]
    #[case("CF", ProfileKind::CapacityFactor)]
    fn test_profile_kind_from_name(#[case] name: &str, #[case] expected: ProfileKind) {
        assert_eq!(ProfileKind::from_name(name).unwrap(), expected);
    }

    #[test]
    fn test_profile_kind_unknown() {
        assert_error!(
            ProfileKind::from_name("peak"),
            "Unknown profile kind: peak (expected demand or cf)"
        );
    }

    #[test]
    fn test_resolution_unsupported() {
        let grid = TimeSliceGrid::new(2, 24).unwrap();
        assert_error!(
            Resolution::from_grid(&grid),
            "Unsupported time slice resolution: 2 seasons × 24 hours \
            (supported: 4 × 24, 12 × 24, 365 × 24)"
        );
    }

    #[rstest]
    #[case(4)]
    #[case(12)]
    #[case(365)]
    fn test_demand_profile_sums_to_one(#[case] n_seasons: u32) {
        let grid = TimeSliceGrid::new(n_seasons, 24).unwrap();
        let profile = distribute(&hourly_year(), &grid, ProfileKind::Demand).unwrap();
        assert_eq!(profile.len(), grid.len());
        assert_approx_eq!(f64, profile.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_four_seasons_demand_shape() {
        let grid = TimeSliceGrid::new(4, 24).unwrap();
        let profile = distribute(&hourly_year(), &grid, ProfileKind::Demand).unwrap();

        // Within each season the profile rises with the hour of day; each season sums to 1/4
        // regardless of its absolute level
        let total: f64 = (1..=24).map(f64::from).sum();
        for season in 0..4 {
            for hour in 0..24 {
                let expected = f64::from(hour + 1) / (4.0 * total);
                assert_approx_eq!(
                    f64,
                    profile[grid.index(season, hour)],
                    expected,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_four_seasons_capacity_factor() {
        let grid = TimeSliceGrid::new(4, 24).unwrap();
        let profile = distribute(&hourly_year(), &grid, ProfileKind::CapacityFactor).unwrap();

        // Peak is 48 (last hour of a summer day)
        assert_approx_eq!(f64, profile[grid.index(1, 23)], 1.0);
        assert_approx_eq!(f64, profile[grid.index(0, 23)], 0.5);
        assert_approx_eq!(f64, profile[grid.index(3, 0)], 1.0 / 48.0);
    }

    #[test]
    fn test_missing_hour_is_error() {
        // Only spring observations, so the other seasons have no data
        let start = NaiveDate::from_ymd_opt(2019, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let series = TimeSeries::hourly(start, &[1.0; 48]).unwrap();
        let grid = TimeSliceGrid::new(4, 24).unwrap();
        assert_error!(
            distribute(&series, &grid, ProfileKind::Demand),
            "No observations for hour 0 of group 2"
        );
    }

    #[test]
    fn test_fill_hourly_gaps() {
        let hourly = [
            (start_of(2019), 0.0),
            (start_of(2019) + Duration::hours(3), 3.0),
            (start_of(2019) + Duration::hours(4), 1.0),
        ];
        let values = fill_hourly_gaps(&hourly)
            .into_iter()
            .map(|(_, value)| value)
            .collect_vec();
        assert_eq!(values.len(), 5);
        for (value, expected) in values.into_iter().zip([0.0, 1.0, 2.0, 3.0, 1.0]) {
            assert_approx_eq!(f64, value, expected);
        }
    }

    #[test]
    fn test_daily_drops_incomplete_years() {
        // A complete 2019 followed by a few hours of 2020
        let values = vec![2.0; HOURS_PER_YEAR + 10];
        let series = TimeSeries::hourly(start_of(2019), &values).unwrap();
        let profile = daily_profile(&series).unwrap();
        assert_eq!(profile.len(), HOURS_PER_YEAR);
        assert!(profile.iter().all(|value| (value - 2.0).abs() < 1e-12));
    }

    #[test]
    fn test_daily_no_complete_year() {
        let series = TimeSeries::hourly(start_of(2019), &[1.0; 100]).unwrap();
        assert_error!(
            daily_profile(&series),
            "Time series does not contain a complete year of hourly data"
        );
    }
}

//! Code for working with time slices.
//!
//! The year is divided into a grid of seasons and hours of the day. Each combination of season and
//! hour is a time slice, which represents an equal fraction of the year.
use crate::id::define_id_type;
use anyhow::{Result, ensure};
use std::fmt::Display;

define_id_type! {Season}
define_id_type! {TimeOfDay}

/// An ID describing season and time of day
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct TimeSliceID {
    /// The name of the season
    pub season: Season,
    /// The name of the time slice within a day
    pub time_of_day: TimeOfDay,
}

impl Display for TimeSliceID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.season, self.time_of_day)
    }
}

/// The season × hour grid into which each year is divided.
///
/// Flat sequences of per-time-slice values (distributions, capacity factors) are always ordered
/// season-major, i.e. the value for season `s` and hour `h` is at index `s * n_hours + h`.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct TimeSliceGrid {
    n_seasons: u32,
    n_hours: u32,
}

impl TimeSliceGrid {
    /// Create a new grid with the given number of seasons and hours per day
    pub fn new(n_seasons: u32, n_hours: u32) -> Result<Self> {
        ensure!(n_seasons >= 1, "There must be at least one season");
        ensure!(n_hours >= 1, "There must be at least one hour per day");

        Ok(Self { n_seasons, n_hours })
    }

    /// The number of seasons
    pub fn n_seasons(&self) -> u32 {
        self.n_seasons
    }

    /// The number of hours per day
    pub fn n_hours(&self) -> u32 {
        self.n_hours
    }

    /// The total number of time slices
    pub fn len(&self) -> usize {
        (self.n_seasons * self.n_hours) as usize
    }

    /// Always false, as a grid has at least one time slice
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The fraction of the year represented by each time slice
    pub fn segment_fraction(&self) -> f64 {
        1.0 / self.len() as f64
    }

    /// Season names, in order (`S1`, `S2`, ...)
    pub fn seasons(&self) -> impl Iterator<Item = Season> {
        (1..=self.n_seasons).map(|i| format!("S{i}").into())
    }

    /// Hour names, in order (`H1`, `H2`, ...)
    pub fn times_of_day(&self) -> impl Iterator<Item = TimeOfDay> {
        (1..=self.n_hours).map(|i| format!("H{i}").into())
    }

    /// Iterate over all time slices in canonical (season-major) order
    pub fn iter_ids(&self) -> impl Iterator<Item = TimeSliceID> {
        let times_of_day: Vec<TimeOfDay> = self.times_of_day().collect();
        self.seasons().flat_map(move |season| {
            times_of_day
                .clone()
                .into_iter()
                .map(move |time_of_day| TimeSliceID {
                    season: season.clone(),
                    time_of_day,
                })
        })
    }

    /// The position of the given season and hour in a flat sequence
    pub fn index(&self, season: u32, hour: u32) -> usize {
        (season * self.n_hours + hour) as usize
    }

    /// Check that a flat sequence has one value per time slice
    pub fn check_len(&self, values: &[f64]) -> Result<()> {
        ensure!(
            values.len() == self.len(),
            "Expected {} values ({} seasons × {} hours), got {}",
            self.len(),
            self.n_seasons,
            self.n_hours,
            values.len()
        );

        Ok(())
    }
}

//! The simulated periods and the vintages of technology capacity that are active within them.
use crate::technology::Technology;
use anyhow::{Result, ensure};
use std::collections::BTreeSet;

/// Integer years spaced (as evenly as possible) between `start_year` and `end_year` inclusive.
///
/// Intermediate years are rounded to the nearest integer (ties to even), so the spacing may be
/// uneven when `end_year - start_year` is not divisible by `n_years - 1`.
pub fn linspace_years(start_year: u32, end_year: u32, n_years: u32) -> Vec<u32> {
    match n_years {
        0 => Vec::new(),
        1 => vec![start_year],
        _ => {
            let start = f64::from(start_year);
            let step = (f64::from(end_year) - start) / f64::from(n_years - 1);
            (0..n_years)
                .map(|i| {
                    if i == n_years - 1 {
                        end_year
                    } else {
                        (start + f64::from(i) * step).round_ties_even() as u32
                    }
                })
                .collect()
        }
    }
}

/// The ordered sequence of periods to be simulated
#[derive(Debug, Clone, PartialEq)]
pub struct Horizon {
    periods: Vec<u32>,
}

impl Horizon {
    /// Create a horizon of `n_years` periods between `start_year` and `end_year` inclusive
    pub fn new(start_year: u32, end_year: u32, n_years: u32) -> Result<Self> {
        ensure!(n_years >= 1, "The number of simulated years must be at least one");
        ensure!(
            start_year <= end_year,
            "The start year ({start_year}) must not be after the end year ({end_year})"
        );
        ensure!(
            n_years <= end_year - start_year + 1,
            "Cannot fit {n_years} distinct periods between {start_year} and {end_year}"
        );

        let periods = linspace_years(start_year, end_year, n_years);
        ensure!(
            periods.is_sorted_by(|a, b| a < b),
            "Periods must be strictly increasing (got {periods:?})"
        );

        Ok(Self { periods })
    }

    /// The simulated periods, in order
    pub fn periods(&self) -> &[u32] {
        &self.periods
    }

    /// The number of simulated periods
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Whether there are no periods (never true for a validated horizon)
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// The first simulated period
    pub fn first(&self) -> u32 {
        self.periods[0]
    }

    /// The last simulated period
    pub fn last(&self) -> u32 {
        self.periods[self.periods.len() - 1]
    }

    /// The year marking the end of the last period
    pub fn boundary_year(&self) -> u32 {
        self.last() + 1
    }

    /// Whether `year` is one of the simulated periods
    pub fn contains(&self, year: u32) -> bool {
        self.periods.binary_search(&year).is_ok()
    }

    /// Existing vintages which are still within their lifetime at the first period.
    ///
    /// Vintages are returned in ascending order.
    pub fn eligible_existing<I>(&self, vintages: I, lifetime: u32) -> Vec<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let first = self.first();
        vintages
            .into_iter()
            .filter(|&vintage| is_valid_pair(first, vintage, lifetime))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All vintages of a technology which can be active during the horizon.
    ///
    /// This is the eligible subset of `existing` followed by every simulated period.
    pub fn active_vintages<I>(&self, existing: I, lifetime: u32) -> Vec<u32>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut vintages = self.eligible_existing(existing, lifetime);
        vintages.extend(self.periods.iter().copied());
        vintages
    }

    /// Every valid `(period, vintage)` pair for the given vintages, in period-major order
    pub fn valid_pairs<'a>(
        &'a self,
        vintages: &'a [u32],
        lifetime: u32,
    ) -> impl Iterator<Item = (u32, u32)> + 'a {
        self.periods.iter().flat_map(move |&period| {
            vintages
                .iter()
                .copied()
                .filter(move |&vintage| is_valid_pair(period, vintage, lifetime))
                .map(move |vintage| (period, vintage))
        })
    }
}

/// Whether capacity of the given vintage is still operating in `period`.
///
/// A pair is valid iff `0 <= period - vintage < lifetime`.
pub fn is_valid_pair(period: u32, vintage: u32, lifetime: u32) -> bool {
    period >= vintage && period - vintage < lifetime
}

/// The union of existing capacity vintages across all technologies and regions, in order
pub fn existing_vintages<'a, I>(technologies: I) -> BTreeSet<u32>
where
    I: IntoIterator<Item = &'a Technology>,
{
    technologies
        .into_iter()
        .flat_map(|technology| technology.iter_regional_data())
        .filter_map(|(_, data)| data.existing_capacity.as_ref())
        .flat_map(|capacity| capacity.keys().copied())
        .collect()
}

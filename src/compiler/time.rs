//! Tables describing the time structure: seasons, hours, periods and segment fractions.
use super::CompileContext;
use super::labels::PeriodFlag;
use crate::output::tables::{SeasonRow, SegFracRow, TimeOfDayRow, TimePeriodRow};

/// Seasons, in order
pub fn season_rows(ctx: &CompileContext) -> Vec<SeasonRow> {
    ctx.grid
        .seasons()
        .map(|season| SeasonRow {
            season: season.to_string(),
        })
        .collect()
}

/// Hours of the day, in order
pub fn time_of_day_rows(ctx: &CompileContext) -> Vec<TimeOfDayRow> {
    ctx.grid
        .times_of_day()
        .map(|time_of_day| TimeOfDayRow {
            time_of_day: time_of_day.to_string(),
        })
        .collect()
}

/// Existing vintages, then the simulated periods, then the boundary year after the last period
pub fn time_period_rows(ctx: &CompileContext) -> Vec<TimePeriodRow> {
    let existing = ctx
        .existing_vintages
        .iter()
        .map(|&year| (year, PeriodFlag::Existing));
    let future = ctx
        .horizon
        .periods()
        .iter()
        .copied()
        .chain([ctx.horizon.boundary_year()])
        .map(|year| (year, PeriodFlag::Future));

    existing
        .chain(future)
        .map(|(period, flag)| TimePeriodRow {
            period,
            flag: flag.code().into(),
        })
        .collect()
}

/// Every time slice represents the same fraction of the year
pub fn segfrac_rows(ctx: &CompileContext) -> Vec<SegFracRow> {
    let segfrac = ctx.grid.segment_fraction();
    ctx.grid
        .iter_ids()
        .map(|ts| SegFracRow {
            season: ts.season.to_string(),
            time_of_day: ts.time_of_day.to_string(),
            segfrac,
            notes: "fraction of year".into(),
        })
        .collect()
}

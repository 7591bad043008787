//! Compiles a [`Model`] into the relational tables read by the optimiser.
//!
//! Tables are written in foreign key dependency order: labels, time structure, regions,
//! commodities, demand, technologies and their parameters, emissions, capability and constraint
//! tables and finally the empty tables which the optimiser fills in.
//!
//! A technology which lacks an attribute needed for a table is skipped for that table only, with
//! a log message. The optimiser's own value constraints are relied upon to reject incomplete data.
use crate::horizon::Horizon;
use crate::model::Model;
use crate::output::DatabaseWriter;
use crate::output::tables::EMPTY_TABLES;
use crate::region::RegionID;
use crate::technology::{Technology, TechnologyID, TechnologyRegionalData};
use crate::time_slice::TimeSliceGrid;
use anyhow::Result;
use log::{Level, info, log};
use std::collections::BTreeSet;

pub mod capability;
pub mod demand;
pub mod emissions;
pub mod entities;
pub mod labels;
pub mod technology;
pub mod time;

/// Everything derived from the model which is needed to generate rows
#[derive(Debug)]
pub struct CompileContext<'a> {
    /// The model being compiled
    pub model: &'a Model,
    /// The simulated periods
    pub horizon: Horizon,
    /// The season × hour grid
    pub grid: TimeSliceGrid,
    /// Vintages of capacity built before the simulation, across all technologies
    pub existing_vintages: BTreeSet<u32>,
}

impl<'a> CompileContext<'a> {
    /// Validate the model and derive the horizon, grid and existing vintages
    pub fn new(model: &'a Model) -> Result<Self> {
        model.validate()?;

        Ok(Self {
            model,
            horizon: model.horizon()?,
            grid: model.parameters.time_slice_grid()?,
            existing_vintages: model.existing_vintages(),
        })
    }
}

/// Iterate over every technology and region for which attributes are registered
pub(crate) fn iter_regional_data<'a>(
    ctx: &'a CompileContext,
) -> impl Iterator<Item = (&'a Technology, &'a RegionID, &'a TechnologyRegionalData)> {
    ctx.model.technologies.iter().flat_map(|technology| {
        technology
            .iter_regional_data()
            .map(move |(region, data)| (technology, region, data))
    })
}

/// The vintages of a technology which are active during the horizon in one region
pub(crate) fn active_vintages(
    ctx: &CompileContext,
    data: &TechnologyRegionalData,
    lifetime: u32,
) -> Vec<u32> {
    let existing = data
        .existing_capacity
        .iter()
        .flat_map(|capacity| capacity.keys().copied());
    ctx.horizon.active_vintages(existing, lifetime)
}

/// Return the attribute if present, otherwise log that `table` is being skipped.
///
/// Core attributes (without which the technology cannot operate) are logged as warnings and
/// optional ones at debug level.
pub(crate) fn require<'b, T>(
    value: Option<&'b T>,
    level: Level,
    technology: &TechnologyID,
    region: &RegionID,
    attribute: &str,
    table: &str,
) -> Option<&'b T> {
    if value.is_none() {
        log!(
            level,
            "Technology {technology} has no {attribute} in region {region}. Skipping {table}."
        );
    }

    value
}

/// Round to three decimal places
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Compile `model` into tables in the database held by `writer`
pub fn compile(model: &Model, writer: &mut DatabaseWriter) -> Result<()> {
    let ctx = CompileContext::new(model)?;
    info!(
        "Compiling scenario '{}': {} periods ({}-{}), {} time slices",
        model.parameters.scenario_name,
        ctx.horizon.len(),
        ctx.horizon.first(),
        ctx.horizon.last(),
        ctx.grid.len()
    );

    info!("Writing label tables");
    writer.write_table(&labels::time_period_label_rows())?;
    writer.write_table(&labels::technology_label_rows())?;
    writer.write_table(&labels::commodity_label_rows())?;
    writer.write_table(&labels::sector_label_rows(&ctx))?;

    info!("Writing time tables");
    writer.write_table(&time::season_rows(&ctx))?;
    writer.write_table(&time::time_of_day_rows(&ctx))?;
    writer.write_table(&time::time_period_rows(&ctx))?;
    writer.write_table(&time::segfrac_rows(&ctx))?;

    info!("Writing regions and commodities");
    writer.write_table(&entities::region_rows(&ctx))?;
    writer.write_table(&entities::commodity_rows(&ctx))?;

    info!("Writing demand tables");
    writer.write_table(&demand::demand_rows(&ctx))?;
    writer.write_table(&demand::distribution_rows(&ctx))?;

    info!("Writing technology tables");
    writer.write_table(&entities::technology_rows(&ctx))?;
    writer.write_table(&technology::efficiency_rows(&ctx)?)?;
    writer.write_table(&technology::existing_capacity_rows(&ctx))?;
    writer.write_table(&technology::lifetime_rows(&ctx))?;
    writer.write_table(&technology::loan_lifetime_rows(&ctx))?;
    writer.write_table(&technology::capacity_to_activity_rows(&ctx))?;
    writer.write_table(&technology::capacity_factor_rows(&ctx)?)?;
    writer.write_table(&technology::cost_variable_rows(&ctx))?;
    writer.write_table(&technology::cost_fixed_rows(&ctx))?;
    writer.write_table(&technology::cost_invest_rows(&ctx))?;
    writer.write_table(&technology::input_split_rows(&ctx)?)?;

    info!("Writing emissions tables");
    writer.write_table(&emissions::emission_limit_rows(&ctx))?;
    writer.write_table(&emissions::emission_activity_rows(&ctx)?)?;

    info!("Writing capability and constraint tables");
    writer.write_table(&capability::reserve_rows(&ctx))?;
    writer.write_table(&capability::ramping_rows(&ctx))?;
    writer.write_table(&capability::curtailment_rows(&ctx))?;
    writer.write_table(&capability::exchange_rows(&ctx))?;
    writer.write_table(&capability::ramp_up_rows(&ctx))?;
    writer.write_table(&capability::ramp_down_rows(&ctx))?;
    writer.write_table(&capability::storage_duration_rows(&ctx))?;
    writer.write_table(&capability::min_capacity_rows(&ctx))?;
    writer.write_table(&capability::max_capacity_rows(&ctx))?;
    writer.write_table(&capability::reserve_margin_rows(&ctx))?;
    writer.write_table(&capability::discount_rate_rows(&ctx))?;

    info!("Creating empty tables for the optimiser");
    writer.create_empty_tables(&EMPTY_TABLES)?;

    Ok(())
}

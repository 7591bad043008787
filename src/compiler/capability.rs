//! Capability flags and the constraint tables which go with them, plus system-wide parameters.
use super::{CompileContext, iter_regional_data, require};
use crate::output::TableRow;
use crate::output::tables::{
    GlobalDiscountRateRow, MaxCapacityRow, MinCapacityRow, PlanningReserveMarginRow, RampDownRow,
    RampUpRow, StorageDurationRow, TechCurtailmentRow, TechExchangeRow, TechRampingRow,
    TechReserveRow,
};
use crate::technology::{Technology, TechnologyRegionalData};
use log::{Level, warn};
use std::collections::BTreeMap;

/// IDs of the technologies for which `flag` is set
fn flagged<F>(ctx: &CompileContext, flag: F) -> impl Iterator<Item = String>
where
    F: Fn(&Technology) -> bool,
{
    ctx.model
        .technologies
        .iter()
        .filter(move |technology| flag(technology))
        .map(|technology| technology.id.to_string())
}

/// Technologies which contribute to the planning reserve
pub fn reserve_rows(ctx: &CompileContext) -> Vec<TechReserveRow> {
    flagged(ctx, |technology| technology.reserve)
        .map(|tech| TechReserveRow {
            tech,
            notes: String::new(),
        })
        .collect()
}

/// Technologies subject to ramping constraints
pub fn ramping_rows(ctx: &CompileContext) -> Vec<TechRampingRow> {
    flagged(ctx, |technology| technology.ramping)
        .map(|tech| TechRampingRow { tech })
        .collect()
}

/// Technologies whose output can be curtailed
pub fn curtailment_rows(ctx: &CompileContext) -> Vec<TechCurtailmentRow> {
    flagged(ctx, |technology| technology.curtailed)
        .map(|tech| TechCurtailmentRow {
            tech,
            notes: String::new(),
        })
        .collect()
}

/// Technologies which move commodities between regions
pub fn exchange_rows(ctx: &CompileContext) -> Vec<TechExchangeRow> {
    flagged(ctx, |technology| technology.exchange)
        .map(|tech| TechExchangeRow {
            tech,
            notes: String::new(),
        })
        .collect()
}

/// Maximum ramp up rates
pub fn ramp_up_rows(ctx: &CompileContext) -> Vec<RampUpRow> {
    iter_regional_data(ctx)
        .filter_map(|(technology, region, data)| {
            let ramp_up = require(
                data.ramp_up.as_ref(),
                Level::Debug,
                &technology.id,
                region,
                "ramp up rate",
                RampUpRow::TABLE_NAME,
            )?;
            Some(RampUpRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                ramp_up: *ramp_up,
            })
        })
        .collect()
}

/// Maximum ramp down rates
pub fn ramp_down_rows(ctx: &CompileContext) -> Vec<RampDownRow> {
    iter_regional_data(ctx)
        .filter_map(|(technology, region, data)| {
            let ramp_down = require(
                data.ramp_down.as_ref(),
                Level::Debug,
                &technology.id,
                region,
                "ramp down rate",
                RampDownRow::TABLE_NAME,
            )?;
            Some(RampDownRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                ramp_down: *ramp_down,
            })
        })
        .collect()
}

/// Storage durations, for storage technologies only
pub fn storage_duration_rows(ctx: &CompileContext) -> Vec<StorageDurationRow> {
    iter_regional_data(ctx)
        .filter_map(|(technology, region, data)| {
            let duration = require(
                data.storage_duration.as_ref(),
                Level::Debug,
                &technology.id,
                region,
                "storage duration",
                StorageDurationRow::TABLE_NAME,
            )?;
            if !technology.storage {
                warn!(
                    "Technology {} has a storage duration in region {region} but is not a \
                    storage technology. Skipping {}.",
                    technology.id,
                    StorageDurationRow::TABLE_NAME
                );
                return None;
            }

            Some(StorageDurationRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                duration: *duration,
                notes: String::new(),
            })
        })
        .collect()
}

/// A capacity bound for one technology, region and year
struct CapacityBound {
    region: String,
    period: u32,
    tech: String,
    capacity: f64,
    units: String,
}

/// Flatten capacity bounds by period, with years written as given
fn capacity_bounds<F>(
    ctx: &CompileContext,
    attribute: &str,
    table: &str,
    select: F,
) -> Vec<CapacityBound>
where
    F: Fn(&TechnologyRegionalData) -> Option<&BTreeMap<u32, f64>>,
{
    let mut bounds = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let Some(values) = require(
            select(data),
            Level::Debug,
            &technology.id,
            region,
            attribute,
            table,
        ) else {
            continue;
        };

        bounds.extend(values.iter().map(|(&period, &capacity)| CapacityBound {
            region: region.to_string(),
            period,
            tech: technology.id.to_string(),
            capacity,
            units: technology.units.clone(),
        }));
    }

    bounds
}

/// Lower bounds on capacity
pub fn min_capacity_rows(ctx: &CompileContext) -> Vec<MinCapacityRow> {
    capacity_bounds(ctx, "minimum capacity", MinCapacityRow::TABLE_NAME, |data| {
        data.min_capacity.as_ref()
    })
    .into_iter()
    .map(|bound| MinCapacityRow {
        region: bound.region,
        period: bound.period,
        tech: bound.tech,
        capacity: bound.capacity,
        units: bound.units,
        notes: String::new(),
    })
    .collect()
}

/// Upper bounds on capacity
pub fn max_capacity_rows(ctx: &CompileContext) -> Vec<MaxCapacityRow> {
    capacity_bounds(ctx, "maximum capacity", MaxCapacityRow::TABLE_NAME, |data| {
        data.max_capacity.as_ref()
    })
    .into_iter()
    .map(|bound| MaxCapacityRow {
        region: bound.region,
        period: bound.period,
        tech: bound.tech,
        capacity: bound.capacity,
        units: bound.units,
        notes: String::new(),
    })
    .collect()
}

/// Planning reserve margins by region
pub fn reserve_margin_rows(ctx: &CompileContext) -> Vec<PlanningReserveMarginRow> {
    ctx.model
        .parameters
        .reserve_margin
        .iter()
        .map(|(region, &reserve_margin)| PlanningReserveMarginRow {
            region: region.to_string(),
            reserve_margin,
        })
        .collect()
}

/// The single global discount rate
pub fn discount_rate_rows(ctx: &CompileContext) -> Vec<GlobalDiscountRateRow> {
    vec![GlobalDiscountRateRow {
        rate: ctx.model.parameters.discount_rate,
    }]
}

//! Technology parameter tables: efficiencies, capacities, lifetimes, capacity factors and costs.
//!
//! Rows which depend on vintages are only written for vintages within the technology's lifetime:
//! existing capacity is included only if it is still operating at the first period and
//! time-indexed rows only for pairs with `0 <= period - vintage < lifetime`.
use super::{CompileContext, active_vintages, iter_regional_data, require, round3};
use crate::horizon::is_valid_pair;
use crate::output::TableRow;
use crate::output::tables::{
    CapacityFactorTechRow, CapacityToActivityRow, CostFixedRow, CostInvestRow, CostVariableRow,
    EfficiencyRow, ExistingCapacityRow, LifetimeLoanTechRow, LifetimeTechRow, TechInputSplitRow,
};
use crate::region::RegionID;
use crate::technology::{
    CostSpec, Efficiency, InputCommodity, TechnologyID, TechnologyRegionalData,
};
use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::{Level, debug};

/// The efficiency to write for each input commodity.
///
/// Where efficiencies are given per input, every input is given the blended efficiency
/// `1 / sum(efficiencies)`, even if there is only one input.
fn input_efficiencies(input: &InputCommodity, efficiency: &Efficiency) -> Result<Vec<f64>> {
    let n_inputs = input.commodities().len();
    let values = efficiency.per_input(n_inputs)?;
    if matches!(efficiency, Efficiency::PerInput(_)) {
        let total: f64 = values.iter().sum();
        ensure!(
            total > 0.0,
            "Efficiencies must sum to a positive number (got {total})"
        );
        return Ok(vec![1.0 / total; n_inputs]);
    }

    Ok(values)
}

/// The share of the technology's input drawn from each commodity, to three decimal places
fn input_splits(input: &InputCommodity, efficiency: &Efficiency) -> Result<Vec<f64>> {
    let values = efficiency.per_input(input.commodities().len())?;
    let total: f64 = values.iter().sum();
    ensure!(
        total > 0.0,
        "Efficiencies must sum to a positive number (got {total})"
    );

    Ok(values.iter().map(|value| round3(value / total)).collect())
}

/// Efficiency of every active vintage, for each input commodity
pub fn efficiency_rows(ctx: &CompileContext) -> Result<Vec<EfficiencyRow>> {
    const TABLE: &str = EfficiencyRow::TABLE_NAME;

    let mut rows = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let id = &technology.id;
        let (Some(input), Some(output), Some(efficiency), Some(&lifetime)) = (
            require(data.input_comm.as_ref(), Level::Warn, id, region, "input commodity", TABLE),
            require(data.output_comm.as_ref(), Level::Warn, id, region, "output commodity", TABLE),
            require(data.efficiency.as_ref(), Level::Warn, id, region, "efficiency", TABLE),
            require(data.tech_lifetime.as_ref(), Level::Warn, id, region, "lifetime", TABLE),
        ) else {
            continue;
        };

        let values = input_efficiencies(input, efficiency).with_context(|| {
            format!("Invalid efficiency for technology {id} in region {region}")
        })?;
        let vintages = active_vintages(ctx, data, lifetime);
        for (commodity, &value) in input.commodities().iter().zip(&values) {
            rows.extend(vintages.iter().map(|&vintage| EfficiencyRow {
                region: region.to_string(),
                input_comm: commodity.id.to_string(),
                tech: id.to_string(),
                vintage,
                output_comm: output.id.to_string(),
                efficiency: value,
                notes: String::new(),
            }));
        }
    }

    Ok(rows)
}

/// Existing capacity which is still operating at the first period
pub fn existing_capacity_rows(ctx: &CompileContext) -> Vec<ExistingCapacityRow> {
    const TABLE: &str = ExistingCapacityRow::TABLE_NAME;

    let first = ctx.horizon.first();
    let mut rows = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let id = &technology.id;
        let Some(existing) = require(
            data.existing_capacity.as_ref(),
            Level::Debug,
            id,
            region,
            "existing capacity",
            TABLE,
        ) else {
            continue;
        };
        let Some(&lifetime) =
            require(data.tech_lifetime.as_ref(), Level::Warn, id, region, "lifetime", TABLE)
        else {
            continue;
        };

        for (&vintage, &capacity) in existing {
            if !is_valid_pair(first, vintage, lifetime) {
                debug!(
                    "Existing capacity of technology {id} in region {region} built in {vintage} \
                    has retired before {first}"
                );
                continue;
            }

            rows.push(ExistingCapacityRow {
                region: region.to_string(),
                tech: id.to_string(),
                vintage,
                capacity,
                units: technology.units.clone(),
                notes: String::new(),
            });
        }
    }

    rows
}

/// Operational lifetime of each technology in each region
pub fn lifetime_rows(ctx: &CompileContext) -> Vec<LifetimeTechRow> {
    iter_regional_data(ctx)
        .filter_map(|(technology, region, data)| {
            let lifetime = require(
                data.tech_lifetime.as_ref(),
                Level::Warn,
                &technology.id,
                region,
                "lifetime",
                LifetimeTechRow::TABLE_NAME,
            )?;
            Some(LifetimeTechRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                life: f64::from(*lifetime),
                notes: String::new(),
            })
        })
        .collect()
}

/// Loan lifetime of each technology in each region
pub fn loan_lifetime_rows(ctx: &CompileContext) -> Vec<LifetimeLoanTechRow> {
    iter_regional_data(ctx)
        .filter_map(|(technology, region, data)| {
            let loan = require(
                data.loan_lifetime.as_ref(),
                Level::Debug,
                &technology.id,
                region,
                "loan lifetime",
                LifetimeLoanTechRow::TABLE_NAME,
            )?;
            Some(LifetimeLoanTechRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                loan: f64::from(*loan),
                notes: String::new(),
            })
        })
        .collect()
}

/// Capacity to activity conversion factor of each technology, repeated for each of its regions
pub fn capacity_to_activity_rows(ctx: &CompileContext) -> Vec<CapacityToActivityRow> {
    iter_regional_data(ctx)
        .filter_map(|(technology, region, _)| {
            let c2a = require(
                technology.capacity_to_activity.as_ref(),
                Level::Debug,
                &technology.id,
                region,
                "capacity to activity factor",
                CapacityToActivityRow::TABLE_NAME,
            )?;
            Some(CapacityToActivityRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                c2a: *c2a,
                notes: String::new(),
            })
        })
        .collect()
}

/// One row per time slice for each technology and region with a capacity factor
pub fn capacity_factor_rows(ctx: &CompileContext) -> Result<Vec<CapacityFactorTechRow>> {
    let mut rows = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let Some(capacity_factor) = require(
            data.capacity_factor.as_ref(),
            Level::Debug,
            &technology.id,
            region,
            "capacity factor",
            CapacityFactorTechRow::TABLE_NAME,
        ) else {
            continue;
        };

        let values = capacity_factor.flatten(&ctx.grid).with_context(|| {
            format!(
                "Invalid capacity factor for technology {} in region {region}",
                technology.id
            )
        })?;
        rows.extend(
            ctx.grid
                .iter_ids()
                .zip(values)
                .map(|(ts, cf_tech)| CapacityFactorTechRow {
                    region: region.to_string(),
                    season: ts.season.to_string(),
                    time_of_day: ts.time_of_day.to_string(),
                    tech: technology.id.to_string(),
                    cf_tech,
                    notes: String::new(),
                }),
        );
    }

    Ok(rows)
}

/// A cost applying to one vintage of a technology in one period
struct PeriodCost<'a> {
    technology: &'a TechnologyID,
    region: &'a RegionID,
    period: u32,
    vintage: u32,
    cost: f64,
}

/// Costs for every valid (period, vintage) pair.
///
/// Costs are looked up by period, so all vintages active in a period share the same cost.
fn costs_by_period<'a, F>(
    ctx: &'a CompileContext,
    attribute: &str,
    table: &str,
    select: F,
) -> Vec<PeriodCost<'a>>
where
    F: Fn(&TechnologyRegionalData) -> Option<&CostSpec>,
{
    let mut costs = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let id = &technology.id;
        let Some(spec) = require(select(data), Level::Debug, id, region, attribute, table) else {
            continue;
        };
        let Some(&lifetime) =
            require(data.tech_lifetime.as_ref(), Level::Warn, id, region, "lifetime", table)
        else {
            continue;
        };

        let vintages = active_vintages(ctx, data, lifetime);
        let pairs_by_period = ctx
            .horizon
            .valid_pairs(&vintages, lifetime)
            .chunk_by(|&(period, _)| period);
        for (period, pairs) in &pairs_by_period {
            let Some(cost) = spec.value_for(period) else {
                debug!("Technology {id} has no {attribute} for {period} in region {region}");
                continue;
            };

            costs.extend(pairs.map(|(_, vintage)| PeriodCost {
                technology: id,
                region,
                period,
                vintage,
                cost,
            }));
        }
    }

    costs
}

/// Variable operating costs
pub fn cost_variable_rows(ctx: &CompileContext) -> Vec<CostVariableRow> {
    costs_by_period(
        ctx,
        "variable cost",
        CostVariableRow::TABLE_NAME,
        |data| data.cost_variable.as_ref(),
    )
    .into_iter()
    .map(|cost| CostVariableRow {
        region: cost.region.to_string(),
        period: cost.period,
        tech: cost.technology.to_string(),
        vintage: cost.vintage,
        cost: cost.cost,
        units: String::new(),
        notes: String::new(),
    })
    .collect()
}

/// Fixed operating costs
pub fn cost_fixed_rows(ctx: &CompileContext) -> Vec<CostFixedRow> {
    costs_by_period(
        ctx,
        "fixed cost",
        CostFixedRow::TABLE_NAME,
        |data| data.cost_fixed.as_ref(),
    )
    .into_iter()
    .map(|cost| CostFixedRow {
        region: cost.region.to_string(),
        period: cost.period,
        tech: cost.technology.to_string(),
        vintage: cost.vintage,
        cost: cost.cost,
        units: String::new(),
        notes: String::new(),
    })
    .collect()
}

/// Capital cost of capacity built in each simulated period
pub fn cost_invest_rows(ctx: &CompileContext) -> Vec<CostInvestRow> {
    let mut rows = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let Some(spec) = require(
            data.cost_invest.as_ref(),
            Level::Debug,
            &technology.id,
            region,
            "investment cost",
            CostInvestRow::TABLE_NAME,
        ) else {
            continue;
        };

        for &vintage in ctx.horizon.periods() {
            let Some(cost) = spec.value_for(vintage) else {
                debug!(
                    "Technology {} has no investment cost for {vintage} in region {region}",
                    technology.id
                );
                continue;
            };

            rows.push(CostInvestRow {
                region: region.to_string(),
                tech: technology.id.to_string(),
                vintage,
                cost,
                units: String::new(),
                notes: String::new(),
            });
        }
    }

    rows
}

/// Input shares of technologies with several input commodities, for every period
pub fn input_split_rows(ctx: &CompileContext) -> Result<Vec<TechInputSplitRow>> {
    let mut rows = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let Some(input @ InputCommodity::Multiple(commodities)) = &data.input_comm else {
            continue;
        };
        let Some(efficiency) = require(
            data.efficiency.as_ref(),
            Level::Warn,
            &technology.id,
            region,
            "efficiency",
            TechInputSplitRow::TABLE_NAME,
        ) else {
            continue;
        };

        let splits = input_splits(input, efficiency).with_context(|| {
            format!(
                "Invalid efficiency for technology {} in region {region}",
                technology.id
            )
        })?;
        for &period in ctx.horizon.periods() {
            rows.extend(
                commodities
                    .iter()
                    .zip(&splits)
                    .map(|(commodity, &split)| TechInputSplitRow {
                        region: region.to_string(),
                        period,
                        input_comm: commodity.id.to_string(),
                        tech: technology.id.to_string(),
                        split,
                        notes: String::new(),
                    }),
            );
        }
    }

    Ok(rows)
}

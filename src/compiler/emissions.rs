//! Emissions limits and the emissions produced by each technology.
use super::{CompileContext, active_vintages, iter_regional_data, require};
use crate::id::HasID;
use crate::output::TableRow;
use crate::output::tables::{EmissionActivityRow, EmissionLimitRow};
use crate::technology::EmissionFactor;
use anyhow::{Context, Result};
use log::Level;

/// Limits on emissions, with years written as given
pub fn emission_limit_rows(ctx: &CompileContext) -> Vec<EmissionLimitRow> {
    let mut rows = Vec::new();
    for emissions in &ctx.model.emissions {
        let commodity = emissions.commodity();
        for (region, limits) in emissions.iter_limits() {
            rows.extend(limits.iter().map(|(&period, &limit)| EmissionLimitRow {
                region: region.to_string(),
                period,
                emis_comm: emissions.get_id().to_string(),
                limit,
                units: commodity.units.clone(),
                notes: String::new(),
            }));
        }
    }

    rows
}

/// Emissions per unit of activity, for each vintage and input commodity.
///
/// A constant factor applies to every active vintage. Factors given by vintage are written for
/// exactly the vintages supplied.
pub fn emission_activity_rows(ctx: &CompileContext) -> Result<Vec<EmissionActivityRow>> {
    const TABLE: &str = EmissionActivityRow::TABLE_NAME;

    let mut rows = Vec::new();
    for (technology, region, data) in iter_regional_data(ctx) {
        let id = &technology.id;
        let Some(emissions) =
            require(data.emissions.as_ref(), Level::Debug, id, region, "emissions", TABLE)
        else {
            continue;
        };
        let (Some(input), Some(output)) = (
            require(data.input_comm.as_ref(), Level::Warn, id, region, "input commodity", TABLE),
            require(data.output_comm.as_ref(), Level::Warn, id, region, "output commodity", TABLE),
        ) else {
            continue;
        };

        for (emission_id, factor) in emissions {
            let commodity = ctx
                .model
                .emissions_commodity(emission_id)
                .with_context(|| {
                    format!(
                        "Technology {id} in region {region} emits {emission_id}, \
                        which is not an emissions commodity"
                    )
                })?
                .commodity();

            let factors: Vec<(u32, f64)> = match factor {
                EmissionFactor::Constant(value) => {
                    let Some(&lifetime) = require(
                        data.tech_lifetime.as_ref(),
                        Level::Warn,
                        id,
                        region,
                        "lifetime",
                        TABLE,
                    ) else {
                        continue;
                    };
                    active_vintages(ctx, data, lifetime)
                        .into_iter()
                        .map(|vintage| (vintage, *value))
                        .collect()
                }
                EmissionFactor::ByVintage(values) => values
                    .iter()
                    .map(|(&vintage, &value)| (vintage, value))
                    .collect(),
            };

            for input_commodity in input.commodities() {
                rows.extend(factors.iter().map(|&(vintage, activity)| EmissionActivityRow {
                    region: region.to_string(),
                    emis_comm: emission_id.to_string(),
                    input_comm: input_commodity.id.to_string(),
                    tech: id.to_string(),
                    vintage,
                    output_comm: output.id.to_string(),
                    activity,
                    units: commodity.units.clone(),
                    notes: String::new(),
                }));
            }
        }
    }

    Ok(rows)
}

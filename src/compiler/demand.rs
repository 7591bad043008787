//! Demand forecasts and their distribution across time slices.
use super::CompileContext;
use crate::id::HasID;
use crate::output::tables::{DemandDistributionRow, DemandRow};

/// One row per demand commodity, region and period
pub fn demand_rows(ctx: &CompileContext) -> Vec<DemandRow> {
    let mut rows = Vec::new();
    for demand in &ctx.model.demands {
        let commodity = demand.commodity();
        for (region, forecast) in demand.iter_demand() {
            rows.extend(
                ctx.horizon
                    .periods()
                    .iter()
                    .zip(forecast)
                    .map(|(&period, &value)| DemandRow {
                        region: region.to_string(),
                        period,
                        commodity: commodity.id.to_string(),
                        demand: value,
                        units: commodity.units.clone(),
                        notes: String::new(),
                    }),
            );
        }
    }

    rows
}

/// One row per demand commodity, region and time slice
pub fn distribution_rows(ctx: &CompileContext) -> Vec<DemandDistributionRow> {
    let mut rows = Vec::new();
    for demand in &ctx.model.demands {
        for (region, values) in demand.iter_distribution() {
            rows.extend(
                ctx.grid
                    .iter_ids()
                    .zip(values)
                    .map(|(ts, &dds)| DemandDistributionRow {
                        region: region.to_string(),
                        season: ts.season.to_string(),
                        time_of_day: ts.time_of_day.to_string(),
                        commodity: demand.get_id().to_string(),
                        dds,
                        notes: String::new(),
                    }),
            );
        }
    }

    rows
}

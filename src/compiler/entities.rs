//! Tables listing the regions, commodities and technologies in the model.
use super::CompileContext;
use crate::output::tables::{CommodityRow, RegionRow, TechnologyRow};

/// Every region in the model, in the order first encountered
pub fn region_rows(ctx: &CompileContext) -> Vec<RegionRow> {
    ctx.model
        .regions()
        .into_iter()
        .map(|region| RegionRow {
            region: region.to_string(),
            notes: String::new(),
        })
        .collect()
}

/// Demand commodities, then physical commodities, then emissions commodities
pub fn commodity_rows(ctx: &CompileContext) -> Vec<CommodityRow> {
    ctx.model
        .iter_commodities()
        .map(|commodity| CommodityRow {
            name: commodity.id.to_string(),
            flag: commodity.label.code().into(),
            description: commodity.full_description(),
        })
        .collect()
}

/// One row per technology
pub fn technology_rows(ctx: &CompileContext) -> Vec<TechnologyRow> {
    ctx.model
        .technologies
        .iter()
        .map(|technology| TechnologyRow {
            tech: technology.id.to_string(),
            flag: technology.label.code().into(),
            sector: technology.sector.clone(),
            description: technology.full_description(),
            category: technology.category.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::model;
    use crate::model::Model;
    use itertools::Itertools;
    use rstest::rstest;

    #[rstest]
    fn test_region_rows(model: Model) {
        let ctx = CompileContext::new(&model).unwrap();
        assert_eq!(
            region_rows(&ctx)
                .into_iter()
                .map(|row| row.region)
                .collect_vec(),
            ["UIUC"]
        );
    }

    #[rstest]
    fn test_commodity_rows(model: Model) {
        let ctx = CompileContext::new(&model).unwrap();
        let rows = commodity_rows(&ctx)
            .into_iter()
            .map(|row| (row.name, row.flag))
            .collect_vec();
        let expected = [
            ("ELC_DEMAND", "d"),
            ("NATGAS", "p"),
            ("ethos", "p"),
            ("co2eq", "e"),
        ]
        .map(|(name, flag)| (name.to_string(), flag.to_string()));
        assert_eq!(rows, expected);
    }

    #[rstest]
    fn test_technology_rows(model: Model) {
        let ctx = CompileContext::new(&model).unwrap();
        let rows = technology_rows(&ctx);
        assert_eq!(
            rows[0],
            TechnologyRow {
                tech: "NG_PLANT".into(),
                flag: "p".into(),
                sector: "electric".into(),
                description: "natural gas plant, MWe".into(),
                category: "natural gas".into(),
            }
        );
        assert_eq!(rows[1].flag, "r");
        assert_eq!(rows[1].description, "natural gas imports");
    }
}

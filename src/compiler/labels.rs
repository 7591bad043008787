//! Lookup tables of labels, referred to by the other tables' foreign keys.
use super::CompileContext;
use crate::commodity::CommodityLabel;
use crate::output::tables::{
    CommodityLabelRow, SectorLabelRow, TechnologyLabelRow, TimePeriodLabelRow,
};
use crate::technology::TechnologyLabel;
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Whether a year is a vintage of existing capacity or a simulated period
#[derive(PartialEq, Eq, Clone, Copy, Debug, EnumIter, IntoStaticStr)]
pub enum PeriodFlag {
    /// Capacity built before the simulation
    #[strum(serialize = "e")]
    Existing,
    /// A simulated period
    #[strum(serialize = "f")]
    Future,
}

impl PeriodFlag {
    /// The short code used to identify this flag
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// A human-readable description of the flag
    pub fn description(self) -> &'static str {
        match self {
            Self::Existing => "existing vintages",
            Self::Future => "future vintages",
        }
    }
}

/// Labels for existing and future periods
pub fn time_period_label_rows() -> Vec<TimePeriodLabelRow> {
    PeriodFlag::iter()
        .map(|flag| TimePeriodLabelRow {
            label: flag.code().into(),
            description: flag.description().into(),
        })
        .collect()
}

/// One row per technology label
pub fn technology_label_rows() -> Vec<TechnologyLabelRow> {
    TechnologyLabel::iter()
        .map(|label| TechnologyLabelRow {
            label: label.code().into(),
            description: label.description().into(),
        })
        .collect()
}

/// One row per commodity label
pub fn commodity_label_rows() -> Vec<CommodityLabelRow> {
    CommodityLabel::iter()
        .map(|label| CommodityLabelRow {
            label: label.code().into(),
            description: label.description().into(),
        })
        .collect()
}

/// One row per distinct technology sector
pub fn sector_label_rows(ctx: &CompileContext) -> Vec<SectorLabelRow> {
    ctx.model
        .sectors()
        .into_iter()
        .map(|sector| SectorLabelRow {
            sector: sector.into(),
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

    #[test]
    fn test_time_period_label_rows() {
        let rows = time_period_label_rows()
            .into_iter()
            .map(|row| (row.label, row.description))
            .collect_vec();
        assert_eq!(
            rows,
            [
                ("e".to_string(), "existing vintages".to_string()),
                ("f".to_string(), "future vintages".to_string())
            ]
        );
    }

    #[test]
    fn test_technology_label_rows() {
        let labels = technology_label_rows()
            .into_iter()
            .map(|row| row.label)
            .collect_vec();
        assert_eq!(labels, ["p", "pb", "ps", "r"]);
    }

    #[rstest]
    fn test_sector_label_rows_distinct(mut model: Model) {
        let mut extra = model.technologies[0].clone();
        extra.id = "NG_PLANT_2".into();
        model.technologies.push(extra);

        let ctx = CompileContext::new(&model).unwrap();
        let sectors = sector_label_rows(&ctx)
            .into_iter()
            .map(|row| row.sector)
            .collect_vec();
        assert_eq!(sectors, ["electric", "supply"]);
    }
}

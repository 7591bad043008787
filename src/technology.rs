//! Technologies convert input commodities into output commodities.
//!
//! Most attributes of a technology vary by region, so they are registered separately for each
//! region with [`Technology::add_regional_data`].
use crate::commodity::{Commodity, CommodityID};
use crate::id::{define_id_getter, define_id_type};
use crate::region::RegionID;
use crate::time_slice::TimeSliceGrid;
use anyhow::{Result, ensure};
use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::slice;
use strum::{EnumIter, IntoStaticStr};

define_id_type! {TechnologyID}

/// How a technology is used by the optimiser
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default, EnumIter, IntoStaticStr)]
pub enum TechnologyLabel {
    /// General production
    #[default]
    #[strum(serialize = "p")]
    Production,
    /// Baseload production
    #[strum(serialize = "pb")]
    BaseloadProduction,
    /// Storage
    #[strum(serialize = "ps")]
    StorageProduction,
    /// Resource import
    #[strum(serialize = "r")]
    Resource,
}

impl TechnologyLabel {
    /// The short code used to identify this label
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// A human-readable description of the label
    pub fn description(self) -> &'static str {
        match self {
            Self::Production => "production technology",
            Self::BaseloadProduction => "baseload production technology",
            Self::StorageProduction => "storage production technology",
            Self::Resource => "resource technology",
        }
    }
}

/// The commodity or commodities consumed by a technology
#[derive(PartialEq, Debug, Clone)]
pub enum InputCommodity {
    /// A single input
    Single(Rc<Commodity>),
    /// Several alternative inputs (e.g. a multi-fuel boiler)
    Multiple(Vec<Rc<Commodity>>),
}

impl InputCommodity {
    /// The input commodities, in order
    pub fn commodities(&self) -> &[Rc<Commodity>] {
        match self {
            Self::Single(commodity) => slice::from_ref(commodity),
            Self::Multiple(commodities) => commodities,
        }
    }
}

impl From<Rc<Commodity>> for InputCommodity {
    fn from(value: Rc<Commodity>) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Rc<Commodity>>> for InputCommodity {
    fn from(value: Vec<Rc<Commodity>>) -> Self {
        Self::Multiple(value)
    }
}

/// The efficiency with which a technology converts its input(s)
#[derive(PartialEq, Debug, Clone)]
pub enum Efficiency {
    /// The same efficiency for every input
    Constant(f64),
    /// One efficiency per input commodity, in the same order
    PerInput(Vec<f64>),
}

impl Efficiency {
    /// One efficiency per input, checking that the number of inputs agrees
    pub fn per_input(&self, n_inputs: usize) -> Result<Vec<f64>> {
        match self {
            Self::Constant(value) => Ok(vec![*value; n_inputs]),
            Self::PerInput(values) => {
                ensure!(
                    values.len() == n_inputs,
                    "Expected {n_inputs} efficiencies (one per input commodity), got {}",
                    values.len()
                );
                Ok(values.clone())
            }
        }
    }
}

/// A cost which is either constant or varies by year
#[derive(PartialEq, Debug, Clone)]
pub enum CostSpec {
    /// The same cost in every year
    Constant(f64),
    /// Costs for specific years
    ByPeriod(BTreeMap<u32, f64>),
}

impl CostSpec {
    /// The cost for the given year, if known
    pub fn value_for(&self, year: u32) -> Option<f64> {
        match self {
            Self::Constant(value) => Some(*value),
            Self::ByPeriod(values) => values.get(&year).copied(),
        }
    }
}

/// The quantity of an emission produced per unit of activity
#[derive(PartialEq, Debug, Clone)]
pub enum EmissionFactor {
    /// The same factor for every vintage
    Constant(f64),
    /// Factors for specific vintages
    ByVintage(BTreeMap<u32, f64>),
}

/// The fraction of capacity available in each time slice
#[derive(PartialEq, Debug, Clone)]
pub enum CapacityFactor {
    /// The same value in every time slice
    Constant(f64),
    /// One value per hour of the day, the same in every season
    HourlyOnly(Vec<f64>),
    /// One row of hourly values per season
    SeasonHourGrid(Vec<Vec<f64>>),
}

impl CapacityFactor {
    /// Convert a flat sequence in canonical (season-major) order, e.g. the output of the
    /// distributor
    pub fn from_flat(values: &[f64], grid: &TimeSliceGrid) -> Result<Self> {
        grid.check_len(values)?;
        Ok(Self::SeasonHourGrid(
            values
                .chunks(grid.n_hours() as usize)
                .map(<[f64]>::to_vec)
                .collect(),
        ))
    }

    /// One value per time slice, in canonical (season-major) order
    pub fn flatten(&self, grid: &TimeSliceGrid) -> Result<Vec<f64>> {
        let n_hours = grid.n_hours() as usize;
        let n_seasons = grid.n_seasons() as usize;
        match self {
            Self::Constant(value) => Ok(vec![*value; grid.len()]),
            Self::HourlyOnly(hourly) => {
                ensure!(
                    hourly.len() == n_hours,
                    "Expected {n_hours} hourly capacity factors, got {}",
                    hourly.len()
                );
                Ok(hourly.repeat(n_seasons))
            }
            Self::SeasonHourGrid(rows) => {
                ensure!(
                    rows.len() == n_seasons,
                    "Expected capacity factors for {n_seasons} seasons, got {}",
                    rows.len()
                );
                ensure!(
                    rows.iter().all(|row| row.len() == n_hours),
                    "Expected {n_hours} capacity factors for every season"
                );
                Ok(rows.concat())
            }
        }
    }
}

/// The attributes of a technology in a single region.
///
/// Absent attributes are `None`; tables which need them are skipped for the region.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct TechnologyRegionalData {
    /// Commodity or commodities consumed
    pub input_comm: Option<InputCommodity>,
    /// Commodity produced
    pub output_comm: Option<Rc<Commodity>>,
    /// Conversion efficiency
    pub efficiency: Option<Efficiency>,
    /// Installed capacity built before the simulation starts, by vintage
    pub existing_capacity: Option<BTreeMap<u32, f64>>,
    /// Operational lifetime in years
    pub tech_lifetime: Option<u32>,
    /// Amortisation period of the capital cost in years
    pub loan_lifetime: Option<u32>,
    /// Variable operating cost
    pub cost_variable: Option<CostSpec>,
    /// Fixed operating cost
    pub cost_fixed: Option<CostSpec>,
    /// Capital cost, by vintage
    pub cost_invest: Option<CostSpec>,
    /// Availability in each time slice
    pub capacity_factor: Option<CapacityFactor>,
    /// Maximum increase in output between time slices
    pub ramp_up: Option<f64>,
    /// Maximum decrease in output between time slices
    pub ramp_down: Option<f64>,
    /// Hours of storage at full output
    pub storage_duration: Option<f64>,
    /// Emissions per unit of activity, by emissions commodity
    pub emissions: Option<IndexMap<CommodityID, EmissionFactor>>,
    /// Lower bounds on capacity, by period
    pub min_capacity: Option<BTreeMap<u32, f64>>,
    /// Upper bounds on capacity, by period
    pub max_capacity: Option<BTreeMap<u32, f64>>,
}

macro_rules! overlay_fields {
    ($target:expr, $source:expr, $($field:ident),+) => {
        $(
            if let Some(value) = $source.$field {
                $target.$field = Some(value);
            }
        )+
    };
}

impl TechnologyRegionalData {
    /// Replace attributes with those which are present in `other`, leaving the rest untouched
    pub fn overlay(&mut self, other: Self) {
        overlay_fields!(
            self,
            other,
            input_comm,
            output_comm,
            efficiency,
            existing_capacity,
            tech_lifetime,
            loan_lifetime,
            cost_variable,
            cost_fixed,
            cost_invest,
            capacity_factor,
            ramp_up,
            ramp_down,
            storage_duration,
            emissions,
            min_capacity,
            max_capacity
        );
    }
}

/// A technology which converts commodities
#[derive(PartialEq, Debug, Clone)]
pub struct Technology {
    /// Unique identifier for the technology (e.g. "NUCLEAR_CONV")
    pub id: TechnologyID,
    /// Text description of the technology
    pub description: String,
    /// Units of capacity (e.g. "MW")
    pub units: String,
    /// The sector the technology belongs to (e.g. "electric")
    pub sector: String,
    /// How the technology is used by the optimiser
    pub label: TechnologyLabel,
    /// Fuel category, used for grouping results
    pub category: String,
    /// Converts a unit of capacity into annual activity
    pub capacity_to_activity: Option<f64>,
    /// Whether the technology contributes to the planning reserve margin
    pub reserve: bool,
    /// Whether the technology is subject to ramping constraints
    pub ramping: bool,
    /// Whether the technology stores energy
    pub storage: bool,
    /// Whether the technology's output can be curtailed
    pub curtailed: bool,
    /// Whether the technology exchanges commodities between regions
    pub exchange: bool,
    regions: IndexMap<RegionID, TechnologyRegionalData>,
}
define_id_getter! {Technology, TechnologyID}

impl Technology {
    /// Create a new production technology with no regional data
    pub fn new(id: &str, description: &str, units: &str, sector: &str) -> Self {
        Self {
            id: id.into(),
            description: description.to_string(),
            units: units.to_string(),
            sector: sector.to_string(),
            label: TechnologyLabel::default(),
            category: String::new(),
            capacity_to_activity: None,
            reserve: false,
            ramping: false,
            storage: false,
            curtailed: false,
            exchange: false,
            regions: IndexMap::new(),
        }
    }

    /// Register attributes for the technology in `region`.
    ///
    /// If the region is already known, the attributes present in `data` replace the existing
    /// ones and a warning is emitted. Returns whether the region was already registered.
    pub fn add_regional_data(&mut self, region: RegionID, data: TechnologyRegionalData) -> bool {
        if let Some(existing) = self.regions.get_mut(&region) {
            warn!(
                "Technology {} already has data for region {region}. Overwriting.",
                self.id
            );
            existing.overlay(data);
            true
        } else {
            self.regions.insert(region, data);
            false
        }
    }

    /// The attributes of the technology in `region`, if registered
    pub fn regional_data(&self, region: &RegionID) -> Option<&TechnologyRegionalData> {
        self.regions.get(region)
    }

    /// Iterate over the regions in which the technology is registered, with their attributes
    pub fn iter_regional_data(&self) -> impl Iterator<Item = (&RegionID, &TechnologyRegionalData)> {
        self.regions.iter()
    }

    /// Iterate over the regions in which the technology is registered
    pub fn iter_regions(&self) -> impl Iterator<Item = &RegionID> {
        self.regions.keys()
    }

    /// Text for the description column of the technologies table
    pub fn full_description(&self) -> String {
        [self.description.as_str(), self.units.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{assert_error, count_warnings, electricity, natural_gas};
    use map_macro::btree_map;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[test]
    fn test_technology_labels() {
        let codes: Vec<_> = TechnologyLabel::iter().map(TechnologyLabel::code).collect();
        assert_eq!(codes, ["p", "pb", "ps", "r"]);
        assert_eq!(
            TechnologyLabel::StorageProduction.description(),
            "storage production technology"
        );
    }

    #[rstest]
    fn test_input_commodities(electricity: Rc<Commodity>, natural_gas: Rc<Commodity>) {
        let single = InputCommodity::from(natural_gas.clone());
        assert_eq!(single.commodities().len(), 1);

        let multiple = InputCommodity::from(vec![natural_gas, electricity]);
        let ids: Vec<_> = multiple
            .commodities()
            .iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, ["NATGAS", "ELC"]);
    }

    #[test]
    fn test_efficiency_per_input() {
        assert_eq!(Efficiency::Constant(0.9).per_input(2).unwrap(), [0.9, 0.9]);
        assert_eq!(
            Efficiency::PerInput(vec![0.5, 0.5]).per_input(2).unwrap(),
            [0.5, 0.5]
        );
        assert_error!(
            Efficiency::PerInput(vec![0.5]).per_input(2),
            "Expected 2 efficiencies (one per input commodity), got 1"
        );
    }

    #[test]
    fn test_cost_spec_value_for() {
        assert_eq!(CostSpec::Constant(3.0).value_for(2030), Some(3.0));
        let by_period = CostSpec::ByPeriod(btree_map! {2025 => 1.0, 2030 => 2.0});
        assert_eq!(by_period.value_for(2030), Some(2.0));
        assert_eq!(by_period.value_for(2035), None);
    }

    #[test]
    fn test_capacity_factor_flatten() {
        let grid = TimeSliceGrid::new(2, 3).unwrap();
        assert_eq!(
            CapacityFactor::Constant(0.9).flatten(&grid).unwrap(),
            [0.9; 6]
        );
        assert_eq!(
            CapacityFactor::HourlyOnly(vec![0.1, 0.2, 0.3])
                .flatten(&grid)
                .unwrap(),
            [0.1, 0.2, 0.3, 0.1, 0.2, 0.3]
        );
        assert_eq!(
            CapacityFactor::SeasonHourGrid(vec![vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]])
                .flatten(&grid)
                .unwrap(),
            [0.1, 0.2, 0.3, 0.4, 0.5, 0.6]
        );
    }

    #[test]
    fn test_capacity_factor_flatten_bad_dimensions() {
        let grid = TimeSliceGrid::new(2, 3).unwrap();
        assert_error!(
            CapacityFactor::HourlyOnly(vec![0.1; 24]).flatten(&grid),
            "Expected 3 hourly capacity factors, got 24"
        );
        assert_error!(
            CapacityFactor::SeasonHourGrid(vec![vec![0.1; 3]]).flatten(&grid),
            "Expected capacity factors for 2 seasons, got 1"
        );
        assert_error!(
            CapacityFactor::SeasonHourGrid(vec![vec![0.1; 3], vec![0.1; 2]]).flatten(&grid),
            "Expected 3 capacity factors for every season"
        );
    }

    #[test]
    fn test_capacity_factor_from_flat() {
        let grid = TimeSliceGrid::new(2, 2).unwrap();
        let values = [0.1, 0.2, 0.3, 0.4];
        let cf = CapacityFactor::from_flat(&values, &grid).unwrap();
        assert_eq!(
            cf,
            CapacityFactor::SeasonHourGrid(vec![vec![0.1, 0.2], vec![0.3, 0.4]])
        );
        assert_eq!(cf.flatten(&grid).unwrap(), values);
    }

    #[rstest]
    fn test_add_regional_data_overlays(electricity: Rc<Commodity>, natural_gas: Rc<Commodity>) {
        let mut tech = Technology::new("NG_PLANT", "Natural gas plant", "MW", "electric");
        let existed = tech.add_regional_data(
            "UIUC".into(),
            TechnologyRegionalData {
                input_comm: Some(natural_gas.into()),
                output_comm: Some(electricity),
                efficiency: Some(Efficiency::Constant(0.4)),
                tech_lifetime: Some(30),
                ..Default::default()
            },
        );
        assert!(!existed);

        let existed = tech.add_regional_data(
            "UIUC".into(),
            TechnologyRegionalData {
                efficiency: Some(Efficiency::Constant(0.5)),
                ramp_up: Some(0.2),
                ..Default::default()
            },
        );
        assert!(existed);
        assert_eq!(tech.iter_regions().count(), 1);

        let data = tech.regional_data(&"UIUC".into()).unwrap();
        assert_eq!(data.efficiency, Some(Efficiency::Constant(0.5)));
        assert_eq!(data.ramp_up, Some(0.2));
        assert_eq!(data.tech_lifetime, Some(30));
        assert!(data.input_comm.is_some());
    }

    #[rstest]
    fn test_add_regional_data_twice_warns_once(electricity: Rc<Commodity>) {
        let mut tech = Technology::new("SOLAR", "Solar farm", "MW", "electric");
        let data = || TechnologyRegionalData {
            output_comm: Some(electricity.clone()),
            tech_lifetime: Some(25),
            ..Default::default()
        };

        assert_eq!(
            count_warnings(|| {
                tech.add_regional_data("UIUC".into(), data());
            }),
            0
        );
        assert_eq!(
            count_warnings(|| {
                tech.add_regional_data("UIUC".into(), data());
            }),
            1
        );
    }

    #[test]
    fn test_full_description() {
        let tech = Technology::new("NG_PLANT", "Natural gas plant", "MW", "electric");
        assert_eq!(tech.full_description(), "Natural gas plant, MW");
        let tech = Technology::new("IMP_NG", "", "MMBTU", "supply");
        assert_eq!(tech.full_description(), "MMBTU");
    }
}

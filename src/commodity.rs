//! Commodities are energy carriers, raw materials or emissions which flow between technologies.
use crate::distribution::{ProfileKind, distribute};
use crate::growth::GrowthLaw;
use crate::horizon::Horizon;
use crate::id::{HasID, define_id_getter, define_id_type};
use crate::region::RegionID;
use crate::time_series::TimeSeries;
use crate::time_slice::TimeSliceGrid;
use anyhow::{Context, Result, ensure};
use float_cmp::approx_eq;
use indexmap::IndexMap;
use itertools::Itertools;
use log::warn;
use std::collections::BTreeMap;
use std::rc::Rc;
use strum::{EnumIter, IntoStaticStr};

define_id_type! {CommodityID}

/// The role a commodity plays in the system
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, EnumIter, IntoStaticStr)]
pub enum CommodityLabel {
    /// A physical commodity (e.g. electricity, natural gas)
    #[strum(serialize = "p")]
    Physical,
    /// An end-use demand
    #[strum(serialize = "d")]
    Demand,
    /// An emission (e.g. CO2 equivalent)
    #[strum(serialize = "e")]
    Emissions,
}

impl CommodityLabel {
    /// The short code used to identify this label
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// A human-readable description of the label
    pub fn description(self) -> &'static str {
        match self {
            Self::Physical => "physical commodity",
            Self::Demand => "demand commodity",
            Self::Emissions => "emissions commodity",
        }
    }
}

/// A commodity within the system
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Commodity {
    /// Unique identifier for the commodity (e.g. "ELC")
    pub id: CommodityID,
    /// The kind of commodity
    pub label: CommodityLabel,
    /// Units in which quantities of the commodity are measured (e.g. "GWh")
    pub units: String,
    /// Text description of commodity (e.g. "electricity")
    pub description: String,
}
define_id_getter! {Commodity, CommodityID}

impl Commodity {
    /// Create a new commodity
    pub fn new(id: &str, label: CommodityLabel, units: &str, description: &str) -> Self {
        Self {
            id: id.into(),
            label,
            units: units.to_string(),
            description: description.to_string(),
        }
    }

    /// A physical commodity, shared so that technologies can refer to it
    pub fn physical(id: &str, units: &str, description: &str) -> Rc<Self> {
        Rc::new(Self::new(id, CommodityLabel::Physical, units, description))
    }

    /// Text for the description column of the commodities table
    pub fn full_description(&self) -> String {
        [self.description.as_str(), self.units.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .join(", ")
    }
}

/// A commodity for which there is an end-use demand in one or more regions
#[derive(PartialEq, Debug, Clone)]
pub struct DemandCommodity {
    commodity: Rc<Commodity>,
    demand: IndexMap<RegionID, Vec<f64>>,
    distribution: IndexMap<RegionID, Vec<f64>>,
}

impl HasID<CommodityID> for DemandCommodity {
    fn get_id(&self) -> &CommodityID {
        &self.commodity.id
    }
}

impl DemandCommodity {
    /// Create a new demand commodity with no regional demand
    pub fn new(id: &str, units: &str, description: &str) -> Self {
        Self {
            commodity: Rc::new(Commodity::new(
                id,
                CommodityLabel::Demand,
                units,
                description,
            )),
            demand: IndexMap::new(),
            distribution: IndexMap::new(),
        }
    }

    /// The underlying commodity (e.g. for use as a technology's output)
    pub fn commodity(&self) -> &Rc<Commodity> {
        &self.commodity
    }

    /// Project demand in `region` over the horizon from an initial value.
    ///
    /// If demand was already registered for the region it is replaced and the old forecast is
    /// returned.
    pub fn add_demand(
        &mut self,
        region: RegionID,
        init_demand: f64,
        horizon: &Horizon,
        growth_rate: f64,
        growth_law: GrowthLaw,
    ) -> Result<Option<Vec<f64>>> {
        let forecast = growth_law
            .project(init_demand, horizon.periods(), growth_rate)
            .with_context(|| {
                format!(
                    "Could not project demand for {} in region {region}",
                    self.commodity.id
                )
            })?;

        Ok(self.set_demand(region, forecast))
    }

    /// Set demand in `region` directly, with one value per simulated period.
    ///
    /// If demand was already registered for the region it is replaced and the old forecast is
    /// returned.
    pub fn set_demand(&mut self, region: RegionID, forecast: Vec<f64>) -> Option<Vec<f64>> {
        let previous = self.demand.insert(region.clone(), forecast);
        if previous.is_some() {
            warn!(
                "Demand for {} in region {region} was already set. Overwriting.",
                self.commodity.id
            );
        }

        previous
    }

    /// Set how demand in `region` is distributed across time slices.
    ///
    /// `values` must have one entry per time slice (in canonical order) and sum to one.
    pub fn set_distribution(
        &mut self,
        region: RegionID,
        values: Vec<f64>,
        grid: &TimeSliceGrid,
    ) -> Result<Option<Vec<f64>>> {
        grid.check_len(&values).with_context(|| {
            format!(
                "Invalid demand distribution for {} in region {region}",
                self.commodity.id
            )
        })?;
        let total: f64 = values.iter().sum();
        ensure!(
            approx_eq!(f64, total, 1.0, epsilon = 1e-6),
            "Demand distribution for {} in region {region} must sum to one (got {total})",
            self.commodity.id
        );

        let previous = self.distribution.insert(region.clone(), values);
        if previous.is_some() {
            warn!(
                "Demand distribution for {} in region {region} was already set. Overwriting.",
                self.commodity.id
            );
        }

        Ok(previous)
    }

    /// Distribute a raw time series across time slices and use it as the demand distribution
    pub fn set_distribution_from_series(
        &mut self,
        region: RegionID,
        series: &TimeSeries,
        grid: &TimeSliceGrid,
    ) -> Result<Option<Vec<f64>>> {
        let values = distribute(series, grid, ProfileKind::Demand)?;
        self.set_distribution(region, values, grid)
    }

    /// Demand in the given region, if any
    pub fn demand(&self, region: &RegionID) -> Option<&[f64]> {
        self.demand.get(region).map(Vec::as_slice)
    }

    /// Iterate over the regional demand forecasts
    pub fn iter_demand(&self) -> impl Iterator<Item = (&RegionID, &[f64])> {
        self.demand
            .iter()
            .map(|(region, forecast)| (region, forecast.as_slice()))
    }

    /// Iterate over the regional demand distributions
    pub fn iter_distribution(&self) -> impl Iterator<Item = (&RegionID, &[f64])> {
        self.distribution
            .iter()
            .map(|(region, values)| (region, values.as_slice()))
    }
}

/// A commodity representing an emission, optionally subject to regional limits
#[derive(PartialEq, Debug, Clone)]
pub struct EmissionsCommodity {
    commodity: Rc<Commodity>,
    limits: IndexMap<RegionID, BTreeMap<u32, f64>>,
}

impl HasID<CommodityID> for EmissionsCommodity {
    fn get_id(&self) -> &CommodityID {
        &self.commodity.id
    }
}

impl EmissionsCommodity {
    /// Create a new emissions commodity with no limits
    pub fn new(id: &str, units: &str, description: &str) -> Self {
        Self {
            commodity: Rc::new(Commodity::new(
                id,
                CommodityLabel::Emissions,
                units,
                description,
            )),
            limits: IndexMap::new(),
        }
    }

    /// The underlying commodity
    pub fn commodity(&self) -> &Rc<Commodity> {
        &self.commodity
    }

    /// Limit emissions in `region` for the given periods.
    ///
    /// Years are used as given, so they should coincide with simulated periods. If limits were
    /// already registered for the region they are replaced and returned.
    pub fn add_limit(
        &mut self,
        region: RegionID,
        limits: BTreeMap<u32, f64>,
    ) -> Option<BTreeMap<u32, f64>> {
        let previous = self.limits.insert(region.clone(), limits);
        if previous.is_some() {
            warn!(
                "Emissions limit for {} in region {region} was already set. Overwriting.",
                self.commodity.id
            );
        }

        previous
    }

    /// Iterate over the regional limits
    pub fn iter_limits(&self) -> impl Iterator<Item = (&RegionID, &BTreeMap<u32, f64>)> {
        self.limits.iter()
    }
}

//! The model: every commodity and technology in the system, plus the simulation parameters.
use crate::commodity::{Commodity, CommodityID, DemandCommodity, EmissionsCommodity};
use crate::horizon::{Horizon, existing_vintages};
use crate::id::{HasID, IDLike};
use crate::region::RegionSet;
use crate::technology::{Technology, TechnologyID};
use anyhow::{Context, Result, ensure};
use indexmap::IndexSet;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

pub mod parameters;
pub use parameters::ModelParameters;

/// Model definition
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// Simulation-wide scalars
    pub parameters: ModelParameters,
    /// Commodities with end-use demand
    pub demands: Vec<DemandCommodity>,
    /// Physical commodities (fuels, intermediate carriers, etc.)
    pub resources: Vec<Rc<Commodity>>,
    /// Emissions commodities
    pub emissions: Vec<EmissionsCommodity>,
    /// Technologies, with their regional data
    pub technologies: Vec<Technology>,
}

/// Check that no two items share an ID
fn check_unique_ids<'a, ID, T, I>(kind: &str, items: I) -> Result<()>
where
    ID: IDLike + 'a,
    T: HasID<ID> + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    for item in items {
        let id = item.get_id();
        ensure!(seen.insert(id.clone()), "Duplicate {kind} ID: {id}");
    }

    Ok(())
}

impl Model {
    /// Create an empty model with the given parameters
    pub fn new(parameters: ModelParameters) -> Self {
        Self {
            parameters,
            demands: Vec::new(),
            resources: Vec::new(),
            emissions: Vec::new(),
            technologies: Vec::new(),
        }
    }

    /// The simulated periods
    pub fn horizon(&self) -> Result<Horizon> {
        self.parameters.horizon()
    }

    /// Every commodity in the model: demand, then physical, then emissions commodities
    pub fn iter_commodities(&self) -> impl Iterator<Item = &Commodity> {
        self.demands
            .iter()
            .map(|demand| demand.commodity().as_ref())
            .chain(self.resources.iter().map(|commodity| commodity.as_ref()))
            .chain(self.emissions.iter().map(|emissions| emissions.commodity().as_ref()))
    }

    /// Look up an emissions commodity by ID
    pub fn emissions_commodity(&self, id: &CommodityID) -> Option<&EmissionsCommodity> {
        self.emissions.iter().find(|emissions| emissions.get_id() == id)
    }

    /// Vintages of capacity built before the simulation, across all technologies
    pub fn existing_vintages(&self) -> BTreeSet<u32> {
        existing_vintages(&self.technologies)
    }

    /// Every region referred to by the model, in the order first encountered
    pub fn regions(&self) -> RegionSet {
        let mut regions = RegionSet::new();
        for technology in &self.technologies {
            regions.extend(technology.iter_regions().cloned());
        }
        for demand in &self.demands {
            regions.extend(demand.iter_demand().map(|(region, _)| region.clone()));
            regions.extend(demand.iter_distribution().map(|(region, _)| region.clone()));
        }
        for emissions in &self.emissions {
            regions.extend(emissions.iter_limits().map(|(region, _)| region.clone()));
        }
        regions.extend(self.parameters.reserve_margin.keys().cloned());

        regions
    }

    /// The distinct sectors of all technologies, in the order first encountered
    pub fn sectors(&self) -> IndexSet<&str> {
        self.technologies
            .iter()
            .map(|technology| technology.sector.as_str())
            .collect()
    }

    /// Check that the model can be compiled
    pub fn validate(&self) -> Result<()> {
        self.parameters.validate()?;
        let horizon = self.horizon()?;
        let grid = self.parameters.time_slice_grid()?;

        let mut commodity_ids = HashSet::new();
        for commodity in self.iter_commodities() {
            ensure!(
                commodity_ids.insert(&commodity.id),
                "Duplicate commodity ID: {}",
                commodity.id
            );
        }
        check_unique_ids::<TechnologyID, _, _>("technology", &self.technologies)?;

        if let Some(&vintage) = self.existing_vintages().last() {
            ensure!(
                vintage < horizon.first(),
                "Existing capacity vintage {vintage} must be before the start year ({})",
                horizon.first()
            );
        }

        for demand in &self.demands {
            for (region, forecast) in demand.iter_demand() {
                ensure!(
                    forecast.len() == horizon.len(),
                    "Demand for {} in region {region} has {} values, but there are {} periods",
                    demand.get_id(),
                    forecast.len(),
                    horizon.len()
                );
            }
            for (region, values) in demand.iter_distribution() {
                grid.check_len(values).with_context(|| {
                    format!(
                        "Invalid demand distribution for {} in region {region}",
                        demand.get_id()
                    )
                })?;
            }
        }

        Ok(())
    }
}

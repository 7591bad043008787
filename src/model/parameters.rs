//! Defines the `ModelParameters` struct, which represents the contents of `model.toml`.
use crate::horizon::Horizon;
use crate::input::{input_err_msg, read_toml};
use crate::region::RegionID;
use crate::time_slice::TimeSliceGrid;
use anyhow::{Context, Result, ensure};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

const MODEL_PARAMETERS_FILE_NAME: &str = "model.toml";

macro_rules! define_param_default {
    ($name:ident, $type: ty, $value: expr) => {
        fn $name() -> $type {
            $value
        }
    };
}

define_param_default!(default_scenario_name, String, "default".to_string());
define_param_default!(default_discount_rate, f64, 0.05);

/// Simulation-wide scalars
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct ModelParameters {
    /// Name of the scenario, used to label the output
    #[serde(default = "default_scenario_name")]
    pub scenario_name: String,
    /// First simulated year
    pub start_year: u32,
    /// Last simulated year
    pub end_year: u32,
    /// Number of simulated periods between `start_year` and `end_year`
    pub n_years: u32,
    /// Number of seasons in each year
    pub n_seasons: u32,
    /// Number of hours in each day
    pub n_hours: u32,
    /// Fraction of peak demand to be held in reserve, by region
    #[serde(default)]
    pub reserve_margin: IndexMap<RegionID, f64>,
    /// Global rate for discounting future costs
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
}

/// Check that a rate is a finite, non-negative number
fn check_rate(name: &str, value: f64) -> Result<()> {
    ensure!(
        value.is_finite() && value >= 0.0,
        "{name} must be a finite number greater than or equal to zero"
    );

    Ok(())
}

impl ModelParameters {
    /// Create parameters with default reserve margins and discount rate
    pub fn new(
        start_year: u32,
        end_year: u32,
        n_years: u32,
        n_seasons: u32,
        n_hours: u32,
    ) -> Self {
        Self {
            scenario_name: default_scenario_name(),
            start_year,
            end_year,
            n_years,
            n_seasons,
            n_hours,
            reserve_margin: IndexMap::new(),
            discount_rate: default_discount_rate(),
        }
    }

    /// Read a model file from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `model_dir` - Folder containing model configuration files
    ///
    /// # Returns
    ///
    /// The model file contents as a [`ModelParameters`] struct or an error if the file is invalid
    pub fn from_path<P: AsRef<Path>>(model_dir: P) -> Result<ModelParameters> {
        let file_path = model_dir.as_ref().join(MODEL_PARAMETERS_FILE_NAME);
        let model_params: ModelParameters = read_toml(&file_path)?;

        model_params
            .validate()
            .with_context(|| input_err_msg(file_path))?;

        Ok(model_params)
    }

    /// Check that the parameters describe a valid simulation
    pub fn validate(&self) -> Result<()> {
        self.horizon()?;
        self.time_slice_grid()?;
        check_rate("discount_rate", self.discount_rate)?;
        for (region, margin) in &self.reserve_margin {
            check_rate(&format!("reserve_margin for region {region}"), *margin)?;
        }

        Ok(())
    }

    /// The simulated periods
    pub fn horizon(&self) -> Result<Horizon> {
        Horizon::new(self.start_year, self.end_year, self.n_years)
    }

    /// The season × hour grid
    pub fn time_slice_grid(&self) -> Result<TimeSliceGrid> {
        TimeSliceGrid::new(self.n_seasons, self.n_hours)
    }
}

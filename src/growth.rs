//! Growth laws for projecting a quantity (e.g. annual demand) across the simulated periods.
use crate::horizon::linspace_years;
use anyhow::{Result, bail, ensure};

/// The law by which a quantity grows from its initial value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrowthLaw {
    /// `v(y) = rate * init * (y - start) + init`
    Linear,
    /// `v(y) = init * exp(rate * (y - start))`
    Exponential,
    /// S-shaped growth towards a carrying capacity
    Logistic {
        /// The maximum sustainable value
        cap: f64,
    },
}

impl GrowthLaw {
    /// Look up a growth law by name.
    ///
    /// Names are matched case-insensitively. The logistic law requires a carrying capacity.
    pub fn from_name(name: &str, cap: Option<f64>) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "linear" => Ok(Self::Linear),
            "exponential" => Ok(Self::Exponential),
            "logistic" => match cap {
                Some(cap) => Ok(Self::Logistic { cap }),
                None => bail!("The logistic growth law requires a carrying capacity"),
            },
            unknown => bail!(
                "Unknown growth law: {unknown} (expected linear, exponential or logistic)"
            ),
        }
    }

    /// Project `init_value` onto each of `years`.
    ///
    /// For linear and exponential growth, `years[0]` is taken to be the year in which the quantity
    /// equals `init_value`. The logistic curve is evaluated on the calendar years themselves, with
    /// `init_value` only setting the position of its midpoint.
    pub fn project(&self, init_value: f64, years: &[u32], growth_rate: f64) -> Result<Vec<f64>> {
        let Some(&start) = years.first() else {
            return Ok(Vec::new());
        };
        let elapsed = years.iter().map(|&year| f64::from(year) - f64::from(start));

        match *self {
            Self::Linear => Ok(elapsed
                .map(|dt| growth_rate * init_value * dt + init_value)
                .collect()),
            Self::Exponential => Ok(elapsed
                .map(|dt| init_value * (growth_rate * dt).exp())
                .collect()),
            Self::Logistic { cap } => {
                // Evaluated on the calendar year rather than the time elapsed since the start
                let midpoint = logistic_midpoint(init_value, growth_rate, cap)?;
                Ok(years
                    .iter()
                    .map(|&year| {
                        let offset = f64::from(year) - midpoint;
                        cap / (1.0 + (-growth_rate * offset).exp())
                    })
                    .collect())
            }
        }
    }
}

/// The year at which a logistic curve reaches half its capacity
fn logistic_midpoint(init_value: f64, growth_rate: f64, cap: f64) -> Result<f64> {
    ensure!(
        init_value > 0.0,
        "Logistic growth requires a positive initial value (got {init_value})"
    );
    ensure!(
        cap > init_value,
        "Logistic growth requires a carrying capacity greater than the initial value \
        (cap: {cap}, initial value: {init_value})"
    );
    ensure!(
        growth_rate != 0.0 && growth_rate.is_finite(),
        "Logistic growth requires a finite, non-zero growth rate"
    );

    Ok((cap / init_value - 1.0).ln() / growth_rate)
}

/// Linear growth over `n_years` years spaced evenly between `start_year` and `end_year`
pub fn linear_growth(
    init_value: f64,
    start_year: u32,
    end_year: u32,
    n_years: u32,
    growth_rate: f64,
) -> Vec<f64> {
    let years = linspace_years(start_year, end_year, n_years);
    GrowthLaw::Linear
        .project(init_value, &years, growth_rate)
        .unwrap_or_default()
}

/// Exponential growth over `n_years` years spaced evenly between `start_year` and `end_year`
pub fn exponential_growth(
    init_value: f64,
    start_year: u32,
    end_year: u32,
    n_years: u32,
    growth_rate: f64,
) -> Vec<f64> {
    let years = linspace_years(start_year, end_year, n_years);
    GrowthLaw::Exponential
        .project(init_value, &years, growth_rate)
        .unwrap_or_default()
}

/// Logistic growth over `n_years` years spaced evenly between `start_year` and `end_year`
pub fn logistic_growth(
    init_value: f64,
    start_year: u32,
    end_year: u32,
    n_years: u32,
    growth_rate: f64,
    cap: f64,
) -> Result<Vec<f64>> {
    let years = linspace_years(start_year, end_year, n_years);
    GrowthLaw::Logistic { cap }.project(init_value, &years, growth_rate)
}

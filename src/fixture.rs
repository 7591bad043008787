//! Fixtures for tests
//!
//! The fixtures describe a small campus energy system: a natural gas plant supplying electricity
//! demand in a single region, fed by a natural gas import technology.
use crate::commodity::{Commodity, DemandCommodity, EmissionsCommodity};
use crate::growth::GrowthLaw;
use crate::horizon::Horizon;
use crate::model::{Model, ModelParameters};
use crate::technology::{
    CapacityFactor, CostSpec, EmissionFactor, Efficiency, Technology, TechnologyLabel,
    TechnologyRegionalData,
};
use crate::time_slice::TimeSliceGrid;
use indexmap::indexmap;
use log::{Level, LevelFilter, Log, Metadata, Record};
use map_macro::btree_map;
use rstest::fixture;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Once;

/// Assert that an error with the given message occurs
macro_rules! assert_error {
    ($result:expr, $msg:expr) => {
        assert_eq!(
            $result.unwrap_err().chain().next().unwrap().to_string(),
            $msg
        );
    };
}
pub(crate) use assert_error;

thread_local! {
    static WARNING_COUNT: Cell<usize> = const { Cell::new(0) };
}

/// A logger which counts warnings per thread, so that tests running in parallel don't interfere
struct WarningCounter;

impl Log for WarningCounter {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() == Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            WARNING_COUNT.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static WARNING_COUNTER: WarningCounter = WarningCounter;

/// The number of warnings logged by `f` on the current thread
pub fn count_warnings<F: FnOnce()>(f: F) -> usize {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&WARNING_COUNTER).expect("Another logger was already installed");
        log::set_max_level(LevelFilter::Warn);
    });

    let before = WARNING_COUNT.with(Cell::get);
    f();
    WARNING_COUNT.with(Cell::get) - before
}

#[fixture]
pub fn horizon() -> Horizon {
    Horizon::new(2025, 2040, 4).unwrap()
}

#[fixture]
pub fn grid() -> TimeSliceGrid {
    TimeSliceGrid::new(2, 2).unwrap()
}

#[fixture]
pub fn electricity() -> Rc<Commodity> {
    Commodity::physical("ELC", "GWh", "electricity")
}

#[fixture]
pub fn natural_gas() -> Rc<Commodity> {
    Commodity::physical("NATGAS", "MMBTU", "natural gas")
}

/// The dummy commodity consumed by resource technologies
#[fixture]
pub fn ethos() -> Rc<Commodity> {
    Commodity::physical("ethos", "", "dummy commodity")
}

#[fixture]
pub fn co2eq() -> EmissionsCommodity {
    let mut co2eq = EmissionsCommodity::new("co2eq", "kT", "CO2 equivalent");
    co2eq.add_limit("UIUC".into(), btree_map! {2030 => 100.0});
    co2eq
}

#[fixture]
pub fn elc_demand(horizon: Horizon, grid: TimeSliceGrid) -> DemandCommodity {
    let mut demand = DemandCommodity::new("ELC_DEMAND", "GWh", "end-use electricity demand");
    demand
        .add_demand("UIUC".into(), 100.0, &horizon, 0.01, GrowthLaw::Linear)
        .unwrap();
    demand
        .set_distribution("UIUC".into(), vec![0.25; 4], &grid)
        .unwrap();
    demand
}

#[fixture]
pub fn ng_plant(natural_gas: Rc<Commodity>, elc_demand: DemandCommodity) -> Technology {
    let mut technology = Technology::new("NG_PLANT", "natural gas plant", "MWe", "electric");
    technology.category = "natural gas".into();
    technology.capacity_to_activity = Some(8.76);
    technology.reserve = true;
    technology.ramping = true;
    technology.add_regional_data(
        "UIUC".into(),
        TechnologyRegionalData {
            input_comm: Some(natural_gas.into()),
            output_comm: Some(elc_demand.commodity().clone()),
            efficiency: Some(Efficiency::Constant(0.4)),
            existing_capacity: Some(btree_map! {1990 => 1.0, 2010 => 5.0}),
            tech_lifetime: Some(30),
            loan_lifetime: Some(10),
            cost_variable: Some(CostSpec::Constant(2.0)),
            cost_fixed: Some(CostSpec::ByPeriod(
                btree_map! {2025 => 10.0, 2030 => 9.0, 2035 => 8.0, 2040 => 7.0},
            )),
            cost_invest: Some(CostSpec::Constant(1000.0)),
            capacity_factor: Some(CapacityFactor::Constant(0.9)),
            ramp_up: Some(0.5),
            ramp_down: Some(0.4),
            emissions: Some(indexmap! {"co2eq".into() => EmissionFactor::Constant(0.2)}),
            ..Default::default()
        },
    );
    technology
}

#[fixture]
pub fn import_ng(ethos: Rc<Commodity>, natural_gas: Rc<Commodity>) -> Technology {
    let mut technology = Technology::new("IMP_NG", "natural gas imports", "", "supply");
    technology.label = TechnologyLabel::Resource;
    technology.add_regional_data(
        "UIUC".into(),
        TechnologyRegionalData {
            input_comm: Some(ethos.into()),
            output_comm: Some(natural_gas),
            efficiency: Some(Efficiency::Constant(1.0)),
            tech_lifetime: Some(1000),
            cost_variable: Some(CostSpec::Constant(3.0)),
            ..Default::default()
        },
    );
    technology
}

#[fixture]
pub fn model(
    elc_demand: DemandCommodity,
    natural_gas: Rc<Commodity>,
    ethos: Rc<Commodity>,
    co2eq: EmissionsCommodity,
    ng_plant: Technology,
    import_ng: Technology,
) -> Model {
    let mut parameters = ModelParameters::new(2025, 2040, 4, 2, 2);
    parameters.reserve_margin.insert("UIUC".into(), 0.15);

    Model {
        parameters,
        demands: vec![elc_demand],
        resources: vec![natural_gas, ethos],
        emissions: vec![co2eq],
        technologies: vec![ng_plant, import_ng],
    }
}

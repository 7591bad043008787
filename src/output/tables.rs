//! Row types and schemas for every table in the output database.
//!
//! Tables are listed in the order in which they are created, which respects foreign key
//! dependencies.
use super::define_table;

define_table! {
    /// Labels for existing and future periods
    TimePeriodLabelRow => "time_period_labels" {
        label: String,
        description: String,
    }
    r#"CREATE TABLE "time_period_labels" (
        "t_period_labels" text,
        "t_period_labels_desc" text,
        PRIMARY KEY("t_period_labels")
    );"#
}

define_table! {
    TechnologyLabelRow => "technology_labels" {
        label: String,
        description: String,
    }
    r#"CREATE TABLE "technology_labels" (
        "tech_labels" text,
        "tech_labels_desc" text,
        PRIMARY KEY("tech_labels")
    );"#
}

define_table! {
    CommodityLabelRow => "commodity_labels" {
        label: String,
        description: String,
    }
    r#"CREATE TABLE "commodity_labels" (
        "comm_labels" text,
        "comm_labels_desc" text,
        PRIMARY KEY("comm_labels")
    );"#
}

define_table! {
    SectorLabelRow => "sector_labels" {
        sector: String,
    }
    r#"CREATE TABLE "sector_labels" (
        "sector" text,
        PRIMARY KEY("sector")
    );"#
}

define_table! {
    SeasonRow => "time_season" {
        season: String,
    }
    r#"CREATE TABLE "time_season" (
        "t_season" text,
        PRIMARY KEY("t_season")
    );"#
}

define_table! {
    TimeOfDayRow => "time_of_day" {
        time_of_day: String,
    }
    r#"CREATE TABLE "time_of_day" (
        "t_day" text,
        PRIMARY KEY("t_day")
    );"#
}

define_table! {
    /// A period or vintage year, flagged as existing or future
    TimePeriodRow => "time_periods" {
        period: u32,
        flag: String,
    }
    r#"CREATE TABLE "time_periods" (
        "t_periods" integer,
        "flag" text,
        PRIMARY KEY("t_periods"),
        FOREIGN KEY("flag") REFERENCES "time_period_labels"("t_period_labels")
    );"#
}

define_table! {
    /// The fraction of the year represented by a time slice
    SegFracRow => "SegFrac" {
        season: String,
        time_of_day: String,
        segfrac: f64,
        notes: String,
    }
    r#"CREATE TABLE "SegFrac" (
        "season_name" text,
        "time_of_day_name" text,
        "segfrac" real CHECK("segfrac" >= 0 AND "segfrac" <= 1),
        "segfrac_notes" text,
        PRIMARY KEY("season_name","time_of_day_name"),
        FOREIGN KEY("season_name") REFERENCES "time_season"("t_season"),
        FOREIGN KEY("time_of_day_name") REFERENCES "time_of_day"("t_day")
    );"#
}

define_table! {
    RegionRow => "regions" {
        region: String,
        notes: String,
    }
    r#"CREATE TABLE "regions" (
        "regions" text,
        "region_note" text,
        PRIMARY KEY("regions")
    );"#
}

define_table! {
    CommodityRow => "commodities" {
        name: String,
        flag: String,
        description: String,
    }
    r#"CREATE TABLE "commodities" (
        "comm_name" text,
        "flag" text,
        "comm_desc" text,
        PRIMARY KEY("comm_name"),
        FOREIGN KEY("flag") REFERENCES "commodity_labels"("comm_labels")
    );"#
}

define_table! {
    /// End-use demand for a commodity in one period
    DemandRow => "Demand" {
        region: String,
        period: u32,
        commodity: String,
        demand: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "Demand" (
        "regions" text,
        "periods" integer,
        "demand_comm" text,
        "demand" real,
        "demand_units" text,
        "demand_notes" text,
        PRIMARY KEY("regions","periods","demand_comm"),
        FOREIGN KEY("regions") REFERENCES "regions"("regions"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("demand_comm") REFERENCES "commodities"("comm_name")
    );"#
}

define_table! {
    /// The share of annual demand falling in a time slice
    DemandDistributionRow => "DemandSpecificDistribution" {
        region: String,
        season: String,
        time_of_day: String,
        commodity: String,
        dds: f64,
        notes: String,
    }
    r#"CREATE TABLE "DemandSpecificDistribution" (
        "regions" text,
        "season_name" text,
        "time_of_day_name" text,
        "demand_name" text,
        "dds" real CHECK("dds" >= 0 AND "dds" <= 1),
        "dds_notes" text,
        PRIMARY KEY("regions","season_name","time_of_day_name","demand_name"),
        FOREIGN KEY("season_name") REFERENCES "time_season"("t_season"),
        FOREIGN KEY("time_of_day_name") REFERENCES "time_of_day"("t_day"),
        FOREIGN KEY("demand_name") REFERENCES "commodities"("comm_name")
    );"#
}

define_table! {
    TechnologyRow => "technologies" {
        tech: String,
        flag: String,
        sector: String,
        description: String,
        category: String,
    }
    r#"CREATE TABLE "technologies" (
        "tech" text,
        "flag" text,
        "sector" text,
        "tech_desc" text,
        "tech_category" text,
        PRIMARY KEY("tech"),
        FOREIGN KEY("flag") REFERENCES "technology_labels"("tech_labels"),
        FOREIGN KEY("sector") REFERENCES "sector_labels"("sector")
    );"#
}

define_table! {
    /// Conversion efficiency from an input to an output commodity for one vintage
    EfficiencyRow => "Efficiency" {
        region: String,
        input_comm: String,
        tech: String,
        vintage: u32,
        output_comm: String,
        efficiency: f64,
        notes: String,
    }
    r#"CREATE TABLE "Efficiency" (
        "regions" text,
        "input_comm" text,
        "tech" text,
        "vintage" integer,
        "output_comm" text,
        "efficiency" real CHECK("efficiency" > 0),
        "eff_notes" text,
        PRIMARY KEY("regions","input_comm","tech","vintage","output_comm"),
        FOREIGN KEY("output_comm") REFERENCES "commodities"("comm_name"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("input_comm") REFERENCES "commodities"("comm_name")
    );"#
}

define_table! {
    ExistingCapacityRow => "ExistingCapacity" {
        region: String,
        tech: String,
        vintage: u32,
        capacity: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "ExistingCapacity" (
        "regions" text,
        "tech" text,
        "vintage" integer,
        "exist_cap" real,
        "exist_cap_units" text,
        "exist_cap_notes" text,
        PRIMARY KEY("regions","tech","vintage"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods")
    );"#
}

define_table! {
    LifetimeTechRow => "LifetimeTech" {
        region: String,
        tech: String,
        life: f64,
        notes: String,
    }
    r#"CREATE TABLE "LifetimeTech" (
        "regions" text,
        "tech" text,
        "life" real,
        "life_notes" text,
        PRIMARY KEY("regions","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    LifetimeLoanTechRow => "LifetimeLoanTech" {
        region: String,
        tech: String,
        loan: f64,
        notes: String,
    }
    r#"CREATE TABLE "LifetimeLoanTech" (
        "regions" text,
        "tech" text,
        "loan" real,
        "loan_notes" text,
        PRIMARY KEY("regions","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    CapacityToActivityRow => "CapacityToActivity" {
        region: String,
        tech: String,
        c2a: f64,
        notes: String,
    }
    r#"CREATE TABLE "CapacityToActivity" (
        "regions" text,
        "tech" text,
        "c2a" real,
        "c2a_notes" text,
        PRIMARY KEY("regions","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    /// Available fraction of capacity in a time slice
    CapacityFactorTechRow => "CapacityFactorTech" {
        region: String,
        season: String,
        time_of_day: String,
        tech: String,
        cf_tech: f64,
        notes: String,
    }
    r#"CREATE TABLE "CapacityFactorTech" (
        "regions" text,
        "season_name" text,
        "time_of_day_name" text,
        "tech" text,
        "cf_tech" real CHECK("cf_tech" >= 0 AND "cf_tech" <= 1),
        "cf_tech_notes" text,
        PRIMARY KEY("regions","season_name","time_of_day_name","tech"),
        FOREIGN KEY("season_name") REFERENCES "time_season"("t_season"),
        FOREIGN KEY("time_of_day_name") REFERENCES "time_of_day"("t_day"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    CostVariableRow => "CostVariable" {
        region: String,
        period: u32,
        tech: String,
        vintage: u32,
        cost: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "CostVariable" (
        "regions" text NOT NULL,
        "periods" integer NOT NULL,
        "tech" text NOT NULL,
        "vintage" integer NOT NULL,
        "cost_variable" real,
        "cost_variable_units" text,
        "cost_variable_notes" text,
        PRIMARY KEY("regions","periods","tech","vintage"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods")
    );"#
}

define_table! {
    CostFixedRow => "CostFixed" {
        region: String,
        period: u32,
        tech: String,
        vintage: u32,
        cost: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "CostFixed" (
        "regions" text NOT NULL,
        "periods" integer NOT NULL,
        "tech" text NOT NULL,
        "vintage" integer NOT NULL,
        "cost_fixed" real,
        "cost_fixed_units" text,
        "cost_fixed_notes" text,
        PRIMARY KEY("regions","periods","tech","vintage"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods")
    );"#
}

define_table! {
    CostInvestRow => "CostInvest" {
        region: String,
        tech: String,
        vintage: u32,
        cost: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "CostInvest" (
        "regions" text,
        "tech" text,
        "vintage" integer,
        "cost_invest" real,
        "cost_invest_units" text,
        "cost_invest_notes" text,
        PRIMARY KEY("regions","tech","vintage"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods")
    );"#
}

define_table! {
    /// The share of a multi-input technology's input drawn from one commodity
    TechInputSplitRow => "TechInputSplit" {
        region: String,
        period: u32,
        input_comm: String,
        tech: String,
        split: f64,
        notes: String,
    }
    r#"CREATE TABLE "TechInputSplit" (
        "regions" text,
        "periods" integer,
        "input_comm" text,
        "tech" text,
        "ti_split" real,
        "ti_split_notes" text,
        PRIMARY KEY("regions","periods","input_comm","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("input_comm") REFERENCES "commodities"("comm_name"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods")
    );"#
}

define_table! {
    EmissionLimitRow => "EmissionLimit" {
        region: String,
        period: u32,
        emis_comm: String,
        limit: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "EmissionLimit" (
        "regions" text,
        "periods" integer,
        "emis_comm" text,
        "emis_limit" real,
        "emis_limit_units" text,
        "emis_limit_notes" text,
        PRIMARY KEY("regions","periods","emis_comm"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("emis_comm") REFERENCES "commodities"("comm_name")
    );"#
}

define_table! {
    /// Emissions per unit of output activity
    EmissionActivityRow => "EmissionActivity" {
        region: String,
        emis_comm: String,
        input_comm: String,
        tech: String,
        vintage: u32,
        output_comm: String,
        activity: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "EmissionActivity" (
        "regions" text,
        "emis_comm" text,
        "input_comm" text,
        "tech" text,
        "vintage" integer,
        "output_comm" text,
        "emis_act" real,
        "emis_act_units" text,
        "emis_act_notes" text,
        PRIMARY KEY("regions","emis_comm","input_comm","tech","vintage","output_comm"),
        FOREIGN KEY("input_comm") REFERENCES "commodities"("comm_name"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("output_comm") REFERENCES "commodities"("comm_name"),
        FOREIGN KEY("emis_comm") REFERENCES "commodities"("comm_name")
    );"#
}

define_table! {
    /// A technology which contributes to the planning reserve
    TechReserveRow => "tech_reserve" {
        tech: String,
        notes: String,
    }
    r#"CREATE TABLE "tech_reserve" (
        "tech" text,
        "notes" text,
        PRIMARY KEY("tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    TechRampingRow => "tech_ramping" {
        tech: String,
    }
    r#"CREATE TABLE "tech_ramping" (
        "tech" text,
        PRIMARY KEY("tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    TechCurtailmentRow => "tech_curtailment" {
        tech: String,
        notes: String,
    }
    r#"CREATE TABLE "tech_curtailment" (
        "tech" text,
        "notes" text,
        PRIMARY KEY("tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    TechExchangeRow => "tech_exchange" {
        tech: String,
        notes: String,
    }
    r#"CREATE TABLE "tech_exchange" (
        "tech" text,
        "notes" text,
        PRIMARY KEY("tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    /// Maximum increase in activity between consecutive time slices, as a fraction of capacity
    RampUpRow => "RampUp" {
        region: String,
        tech: String,
        ramp_up: f64,
    }
    r#"CREATE TABLE "RampUp" (
        "regions" text,
        "tech" text,
        "ramp_up" real,
        PRIMARY KEY("regions","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    /// Maximum decrease in activity between consecutive time slices, as a fraction of capacity
    RampDownRow => "RampDown" {
        region: String,
        tech: String,
        ramp_down: f64,
    }
    r#"CREATE TABLE "RampDown" (
        "regions" text,
        "tech" text,
        "ramp_down" real,
        PRIMARY KEY("regions","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    StorageDurationRow => "StorageDuration" {
        region: String,
        tech: String,
        duration: f64,
        notes: String,
    }
    r#"CREATE TABLE "StorageDuration" (
        "regions" text,
        "tech" text,
        "duration" real,
        "duration_notes" text,
        PRIMARY KEY("regions","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    MinCapacityRow => "MinCapacity" {
        region: String,
        period: u32,
        tech: String,
        capacity: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "MinCapacity" (
        "regions" text,
        "periods" integer,
        "tech" text,
        "mincap" real,
        "mincap_units" text,
        "mincap_notes" text,
        PRIMARY KEY("regions","periods","tech"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods")
    );"#
}

define_table! {
    MaxCapacityRow => "MaxCapacity" {
        region: String,
        period: u32,
        tech: String,
        capacity: f64,
        units: String,
        notes: String,
    }
    r#"CREATE TABLE "MaxCapacity" (
        "regions" text,
        "periods" integer,
        "tech" text,
        "maxcap" real,
        "maxcap_units" text,
        "maxcap_notes" text,
        PRIMARY KEY("regions","periods","tech"),
        FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods"),
        FOREIGN KEY("tech") REFERENCES "technologies"("tech")
    );"#
}

define_table! {
    PlanningReserveMarginRow => "PlanningReserveMargin" {
        region: String,
        reserve_margin: f64,
    }
    r#"CREATE TABLE "PlanningReserveMargin" (
        "regions" text,
        "reserve_margin" real,
        PRIMARY KEY("regions"),
        FOREIGN KEY("regions") REFERENCES "regions"("regions")
    );"#
}

define_table! {
    GlobalDiscountRateRow => "GlobalDiscountRate" {
        rate: f64,
    }
    r#"CREATE TABLE "GlobalDiscountRate" (
        "rate" real
    );"#
}

/// Tables which the compiler creates but leaves empty.
///
/// The first group holds optional parameters read by the optimiser; the `Output_*` tables are
/// filled with its results.
pub const EMPTY_TABLES: [(&str, &str); 20] = [
    (
        "tech_annual",
        r#"CREATE TABLE "tech_annual" (
            "tech" text,
            "notes" text,
            PRIMARY KEY("tech"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "tech_flex",
        r#"CREATE TABLE "tech_flex" (
            "tech" text,
            "notes" text,
            PRIMARY KEY("tech"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "groups",
        r#"CREATE TABLE "groups" (
            "group_name" text,
            "notes" text,
            PRIMARY KEY("group_name")
        );"#,
    ),
    (
        "TechOutputSplit",
        r#"CREATE TABLE "TechOutputSplit" (
            "regions" text,
            "periods" integer,
            "tech" text,
            "output_comm" text,
            "to_split" real,
            "to_split_notes" text,
            PRIMARY KEY("regions","periods","tech","output_comm"),
            FOREIGN KEY("output_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "MinActivity",
        r#"CREATE TABLE "MinActivity" (
            "regions" text,
            "periods" integer,
            "tech" text,
            "minact" real,
            "minact_units" text,
            "minact_notes" text,
            PRIMARY KEY("regions","periods","tech"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods")
        );"#,
    ),
    (
        "MaxActivity",
        r#"CREATE TABLE "MaxActivity" (
            "regions" text,
            "periods" integer,
            "tech" text,
            "maxact" real,
            "maxact_units" text,
            "maxact_notes" text,
            PRIMARY KEY("regions","periods","tech"),
            FOREIGN KEY("periods") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "MaxResource",
        r#"CREATE TABLE "MaxResource" (
            "regions" text,
            "tech" text,
            "maxres" real,
            "maxres_units" text,
            "maxres_notes" text,
            PRIMARY KEY("regions","tech"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "DiscountRate",
        r#"CREATE TABLE "DiscountRate" (
            "regions" text,
            "tech" text,
            "vintage" integer,
            "tech_rate" real,
            "tech_rate_notes" text,
            PRIMARY KEY("regions","tech","vintage"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods")
        );"#,
    ),
    (
        "LifetimeProcess",
        r#"CREATE TABLE "LifetimeProcess" (
            "regions" text,
            "tech" text,
            "vintage" integer,
            "life_process" real,
            "life_process_notes" text,
            PRIMARY KEY("regions","tech","vintage"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "CapacityFactorProcess",
        r#"CREATE TABLE "CapacityFactorProcess" (
            "regions" text,
            "season_name" text,
            "time_of_day_name" text,
            "tech" text,
            "vintage" integer,
            "cf_process" real CHECK("cf_process" >= 0 AND "cf_process" <= 1),
            "cf_process_notes" text,
            PRIMARY KEY("regions","season_name","time_of_day_name","tech","vintage"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("season_name") REFERENCES "time_season"("t_season"),
            FOREIGN KEY("time_of_day_name") REFERENCES "time_of_day"("t_day")
        );"#,
    ),
    (
        "CapacityCredit",
        r#"CREATE TABLE "CapacityCredit" (
            "regions" text,
            "periods" integer,
            "tech" text,
            "vintage" integer,
            "cf_tech" real CHECK("cf_tech" >= 0 AND "cf_tech" <= 1),
            "cf_tech_notes" text,
            PRIMARY KEY("regions","periods","tech","vintage")
        );"#,
    ),
    (
        "Output_V_Capacity",
        r#"CREATE TABLE "Output_V_Capacity" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "tech" text,
            "vintage" integer,
            "capacity" real,
            PRIMARY KEY("regions","scenario","tech","vintage"),
            FOREIGN KEY("sector") REFERENCES "sector_labels"("sector"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods")
        );"#,
    ),
    (
        "Output_VFlow_Out",
        r#"CREATE TABLE "Output_VFlow_Out" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "t_periods" integer,
            "t_season" text,
            "t_day" text,
            "input_comm" text,
            "tech" text,
            "vintage" integer,
            "output_comm" text,
            "vflow_out" real,
            PRIMARY KEY("regions","scenario","t_periods","t_season","t_day","input_comm","tech","vintage","output_comm"),
            FOREIGN KEY("output_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("t_periods") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("t_season") REFERENCES "time_season"("t_season"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("sector") REFERENCES "sector_labels"("sector"),
            FOREIGN KEY("t_day") REFERENCES "time_of_day"("t_day"),
            FOREIGN KEY("input_comm") REFERENCES "commodities"("comm_name")
        );"#,
    ),
    (
        "Output_VFlow_In",
        r#"CREATE TABLE "Output_VFlow_In" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "t_periods" integer,
            "t_season" text,
            "t_day" text,
            "input_comm" text,
            "tech" text,
            "vintage" integer,
            "output_comm" text,
            "vflow_in" real,
            PRIMARY KEY("regions","scenario","t_periods","t_season","t_day","input_comm","tech","vintage","output_comm"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("output_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("t_periods") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("sector") REFERENCES "sector_labels"("sector"),
            FOREIGN KEY("t_season") REFERENCES "time_season"("t_season"),
            FOREIGN KEY("t_day") REFERENCES "time_of_day"("t_day"),
            FOREIGN KEY("input_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "Output_Objective",
        r#"CREATE TABLE "Output_Objective" (
            "scenario" text,
            "objective_name" text,
            "total_system_cost" real
        );"#,
    ),
    (
        "Output_Emissions",
        r#"CREATE TABLE "Output_Emissions" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "t_periods" integer,
            "emissions_comm" text,
            "tech" text,
            "vintage" integer,
            "emissions" real,
            PRIMARY KEY("regions","scenario","t_periods","emissions_comm","tech","vintage"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("emissions_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("sector") REFERENCES "sector_labels"("sector"),
            FOREIGN KEY("t_periods") REFERENCES "time_periods"("t_periods")
        );"#,
    ),
    (
        "Output_Curtailment",
        r#"CREATE TABLE "Output_Curtailment" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "t_periods" integer,
            "t_season" text,
            "t_day" text,
            "input_comm" text,
            "tech" text,
            "vintage" integer,
            "output_comm" text,
            "curtailment" real,
            PRIMARY KEY("regions","scenario","t_periods","t_season","t_day","input_comm","tech","vintage","output_comm"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("input_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("output_comm") REFERENCES "commodities"("comm_name"),
            FOREIGN KEY("t_periods") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("t_season") REFERENCES "time_season"("t_season"),
            FOREIGN KEY("t_day") REFERENCES "time_of_day"("t_day")
        );"#,
    ),
    (
        "Output_Costs",
        r#"CREATE TABLE "Output_Costs" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "output_name" text,
            "tech" text,
            "vintage" integer,
            "output_cost" real,
            PRIMARY KEY("regions","scenario","output_name","tech","vintage"),
            FOREIGN KEY("vintage") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("sector") REFERENCES "sector_labels"("sector"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
    (
        "Output_Duals",
        r#"CREATE TABLE "Output_Duals" (
            "constraint_name" text,
            "scenario" text,
            "dual" real,
            PRIMARY KEY("constraint_name","scenario")
        );"#,
    ),
    (
        "Output_CapacityByPeriodAndTech",
        r#"CREATE TABLE "Output_CapacityByPeriodAndTech" (
            "regions" text,
            "scenario" text,
            "sector" text,
            "t_periods" integer,
            "tech" text,
            "capacity" real,
            PRIMARY KEY("regions","scenario","t_periods","tech"),
            FOREIGN KEY("sector") REFERENCES "sector_labels"("sector"),
            FOREIGN KEY("t_periods") REFERENCES "time_periods"("t_periods"),
            FOREIGN KEY("tech") REFERENCES "technologies"("tech")
        );"#,
    ),
];

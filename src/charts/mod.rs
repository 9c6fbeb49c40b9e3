//! Chart data adapters.
//!
//! Each adapter turns loaded rows into the shape one visualization draws.
//! Nothing here renders; see [`crate::interface`] for the text surface and
//! the JSON report for external renderers.

pub mod alternatives;
pub mod detail;
pub mod emissions;
pub mod footprint;
pub mod menu;
pub mod plate;
pub mod scatter;
pub mod shares;

use clap::ValueEnum;
use serde::Serialize;

use crate::models::{FoodEntry, ItalyFoodRow, Measure, MealSummary};

pub use alternatives::{alternatives_chart, AlternativeBar, AlternativesChart, Role};
pub use detail::{ingredient_detail, IngredientDetail, RadarAxis, RadarSeries};
pub use emissions::{emissions_chart, EmissionsChart};
pub use footprint::{footprint_bars, popularity, BarChart};
pub use menu::{menu_grid, MenuGrid, MenuItem, MenuSection};
pub use plate::{plate_layout, Placement, PlateLayout};
pub use scatter::{scatter_chart, ScatterChart, ScatterPoint};
pub use shares::{land_shares, water_shares, PieChart, PieSlice};

/// Which footprint a themed chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Co2,
    Water,
}

impl Theme {
    pub fn axis_label(self) -> &'static str {
        match self {
            Theme::Co2 => "g CO₂-eq per g or mL of Food",
            Theme::Water => "Liters per kg or L of Food",
        }
    }

    /// The measure this theme reads from a game record.
    pub fn of_entry(self, entry: &FoodEntry) -> Measure {
        match self {
            Theme::Co2 => entry.carbon,
            Theme::Water => entry.water,
        }
    }

    /// The measure this theme reads from an Italian food row.
    pub fn of_italy(self, row: &ItalyFoodRow) -> Measure {
        match self {
            Theme::Co2 => row.carbon,
            Theme::Water => row.water,
        }
    }
}

/// One labelled bar or stack segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: Measure,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: impl Into<Measure>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Largest axis value among `values`, or 0 when empty.
pub(crate) fn axis_max(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().fold(0.0, f64::max)
}

/// Chart data tagged with the mount point it is drawn into.
#[derive(Debug, Clone, Serialize)]
pub struct Chart {
    pub mount: String,
    pub title: String,
    #[serde(flatten)]
    pub data: ChartData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum ChartData {
    Menu(MenuGrid),
    Detail(IngredientDetail),
    Emissions(EmissionsChart),
    Pie(PieChart),
    Bars(BarChart),
    Alternatives(AlternativesChart),
    Scatter(ScatterChart),
    Plate(PlateLayout),
    Meal(MealSummary),
}

impl Chart {
    pub fn new(mount: impl Into<String>, title: impl Into<String>, data: ChartData) -> Self {
        Self {
            mount: mount.into(),
            title: title.into(),
            data,
        }
    }
}

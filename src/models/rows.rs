use serde::{Deserialize, Serialize};

use crate::models::measure::{optional_label, Measure};

/// A row of `emissions_sectors_agrovoc.csv`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmissionRow {
    #[serde(rename = "Item", default, deserialize_with = "optional_label")]
    pub item: Option<String>,

    #[serde(rename = "Value", default)]
    pub value: Measure,

    #[serde(rename = "Category", default, deserialize_with = "optional_label")]
    pub category: Option<String>,
}

/// A row of `filtered_water_agrovoc.csv`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaterRow {
    #[serde(rename = "Variable", default, deserialize_with = "optional_label")]
    pub variable: Option<String>,

    #[serde(rename = "Value", default)]
    pub value: Measure,
}

/// A row of `filtered_landuse_agrovoc.csv`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LandRow {
    #[serde(rename = "AGROVOC_label", default, deserialize_with = "optional_label")]
    pub label: Option<String>,

    #[serde(rename = "Value", default)]
    pub value: Measure,
}

/// A row of the wide per-item `italy_food_data.csv`.
///
/// Only the columns the charts read are mapped; the rest are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItalyFoodRow {
    #[serde(rename = "AGROVOC_label", default, deserialize_with = "optional_label")]
    pub label: Option<String>,

    #[serde(rename = "Mean_consumption_italy_(g/day)", default)]
    pub consumption: Measure,

    #[serde(rename = "Water Footprint liters (water/kg o liter)", default)]
    pub water: Measure,

    #[serde(rename = "Carbon Footprint (g CO2eq/g o cc)", default)]
    pub carbon: Measure,
}

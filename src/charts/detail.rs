use serde::Serialize;

use crate::aggregate::constants::{RADAR_HEADROOM, RADAR_WATER_SCALE_DIVISOR};
use crate::aggregate::{liters_to, normalize, VolumeUnit};
use crate::models::{FoodEntry, Measure};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: &'static str,
    pub value: f64,
}

/// The three-axis impact radar shown in the detail card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    pub axes: Vec<RadarAxis>,
    pub suggested_max: f64,
}

/// Everything the ingredient detail card shows.
#[derive(Debug, Clone, Serialize)]
pub struct IngredientDetail {
    pub title: String,
    pub agrovoc_uri: Option<String>,
    pub kind: Option<String>,
    /// g or mL per day.
    pub consumption: Measure,
    /// g CO₂eq per g or mL.
    pub carbon: Measure,
    /// m³ per kg or L.
    pub water_m3: Measure,
    /// € per kg or L.
    pub cost: Measure,
    pub radar: RadarSeries,
}

pub fn ingredient_detail(entry: &FoodEntry) -> IngredientDetail {
    let water_m3 = entry
        .water
        .map(|liters| liters_to(liters, VolumeUnit::CubicMeters));

    IngredientDetail {
        title: entry.display_name(),
        agrovoc_uri: entry.agrovoc_uri.clone(),
        kind: entry.kind.clone(),
        consumption: entry.consumption,
        carbon: entry.carbon,
        water_m3,
        cost: entry.cost,
        radar: radar_series(entry),
    }
}

/// Radar values are rounded to 2 decimals; missing ones plot as zero.
fn radar_series(entry: &FoodEntry) -> RadarSeries {
    let plain = |m: Measure| normalize(m, None).map_or(0.0, |n| n.value);
    let carbon = plain(entry.carbon);
    let cost = plain(entry.cost);
    let water = normalize(entry.water, Some(VolumeUnit::CubicMeters))
        .and_then(|n| n.converted)
        .unwrap_or(0.0);

    let suggested_max = carbon
        .max(water / RADAR_WATER_SCALE_DIVISOR)
        .max(cost)
        * RADAR_HEADROOM;

    RadarSeries {
        axes: vec![
            RadarAxis { label: "Carbon (g CO₂eq/g)", value: carbon },
            RadarAxis { label: "Water (m³/kg)", value: water },
            RadarAxis { label: "Cost (€/kg)", value: cost },
        ],
        suggested_max,
    }
}

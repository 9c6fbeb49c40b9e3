use serde::Serialize;

use crate::charts::{axis_max, Theme};
use crate::dataset::FoodCatalog;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Footprint against price, one point per ingredient.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScatterChart {
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ScatterPoint>,
    pub x_max: f64,
    pub y_max: f64,
}

/// Only ingredients with carbon, water and cost all present are plotted.
pub fn scatter_chart(catalog: &FoodCatalog, theme: Theme) -> ScatterChart {
    let points: Vec<ScatterPoint> = catalog
        .entries()
        .filter(|e| e.has_full_footprint())
        .map(|e| ScatterPoint {
            name: e.name.clone(),
            x: theme.of_entry(e).axis_value(),
            y: e.cost.axis_value(),
        })
        .collect();

    ScatterChart {
        x_label: theme.axis_label().to_string(),
        y_label: "Price (€ per kg or L)".to_string(),
        x_max: axis_max(points.iter().map(|p| p.x)),
        y_max: axis_max(points.iter().map(|p| p.y)),
        points,
    }
}

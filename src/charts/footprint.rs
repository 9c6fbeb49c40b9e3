use serde::Serialize;

use crate::charts::{axis_max, Bar, Theme};
use crate::models::ItalyFoodRow;

/// A plain bar chart with a y-axis label.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BarChart {
    pub y_label: String,
    pub bars: Vec<Bar>,
    pub y_max: f64,
}

impl BarChart {
    fn from_bars(y_label: &str, bars: Vec<Bar>) -> Self {
        let y_max = axis_max(bars.iter().map(|b| b.value.axis_value()));
        Self {
            y_label: y_label.to_string(),
            bars,
            y_max,
        }
    }
}

/// Mean daily consumption in Italy for every labelled item that has one.
pub fn popularity(rows: &[ItalyFoodRow]) -> BarChart {
    let bars = rows
        .iter()
        .filter(|r| !r.consumption.is_missing())
        .filter_map(|r| r.label.as_ref().map(|label| Bar::new(label.clone(), r.consumption)))
        .collect();

    BarChart::from_bars("Mean Daily Consumption (g or mL)", bars)
}

/// Carbon or water footprint per labelled item.
///
/// Items missing the chosen value stay in the chart with a missing bar.
pub fn footprint_bars(rows: &[ItalyFoodRow], theme: Theme) -> BarChart {
    let bars = rows
        .iter()
        .filter_map(|r| r.label.as_ref().map(|label| Bar::new(label.clone(), theme.of_italy(r))))
        .collect();

    BarChart::from_bars(theme.axis_label(), bars)
}

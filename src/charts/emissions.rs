use serde::Serialize;

use crate::aggregate::constants::{OTHER_CATEGORY, UNKNOWN_CATEGORY};
use crate::aggregate::sum_with_fallback;
use crate::charts::{axis_max, Bar};
use crate::models::EmissionRow;

/// Emissions by sector: one stacked bar for food, one bar per other sector.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmissionsChart {
    /// Food emissions per item, alphabetical. These stack into one bar and
    /// also form the zoomed breakdown.
    pub food_segments: Vec<Bar>,
    /// Non-food sectors, in file order.
    pub other_bars: Vec<Bar>,
    pub food_total: f64,
    pub y_max: f64,
}

impl EmissionsChart {
    /// Food segments with values rounded for the zoomed breakdown labels.
    pub fn zoom_rows(&self) -> Vec<(String, f64)> {
        self.food_segments
            .iter()
            .map(|b| (b.label.clone(), b.value.axis_value().round()))
            .collect()
    }
}

fn is_other(row: &EmissionRow) -> bool {
    row.category.as_deref().unwrap_or(OTHER_CATEGORY) == OTHER_CATEGORY
}

/// Build the sector chart. Rows without an item or a value are dropped;
/// rows without a category count as "Other".
pub fn emissions_chart(rows: &[EmissionRow]) -> EmissionsChart {
    let usable = rows
        .iter()
        .filter(|r| r.item.is_some() && !r.value.is_missing());

    let (other, food): (Vec<&EmissionRow>, Vec<&EmissionRow>) = usable.partition(|r| is_other(r));

    let other_bars: Vec<Bar> = other
        .into_iter()
        .map(|r| Bar::new(r.item.clone().unwrap_or_default(), r.value))
        .collect();

    let food_sums = sum_with_fallback(
        food,
        |r| r.item.as_deref(),
        |r| r.value,
        UNKNOWN_CATEGORY,
    );

    let food_segments: Vec<Bar> = food_sums
        .into_iter()
        .map(|(item, sum)| Bar::new(item, sum.total))
        .collect();

    let food_total: f64 = food_segments.iter().map(|b| b.value.axis_value()).sum();
    let y_max = axis_max(
        std::iter::once(food_total).chain(other_bars.iter().map(|b| b.value.axis_value())),
    );

    EmissionsChart {
        food_segments,
        other_bars,
        food_total,
        y_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measure;

    fn row(item: Option<&str>, value: Measure, category: Option<&str>) -> EmissionRow {
        EmissionRow {
            item: item.map(str::to_string),
            value,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_food_rows_stack_and_other_rows_stand_alone() {
        let rows = vec![
            row(Some("Rice cultivation"), 100.0.into(), Some("Crops")),
            row(Some("Enteric fermentation"), 300.0.into(), Some("Livestock")),
            row(Some("Rice cultivation"), 20.0.into(), Some("Crops")),
            row(Some("Energy"), 900.0.into(), Some("Other")),
            row(Some("Transport"), 250.0.into(), None),
            row(None, 5.0.into(), Some("Crops")),
            row(Some("Waste"), Measure::missing(), Some("Crops")),
        ];

        let chart = emissions_chart(&rows);
        let labels: Vec<&str> = chart.food_segments.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Enteric fermentation", "Rice cultivation"]);
        assert_eq!(chart.food_segments[1].value.value(), Some(120.0));
        assert_eq!(chart.food_total, 420.0);

        let others: Vec<&str> = chart.other_bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(others, vec!["Energy", "Transport"]);
        assert_eq!(chart.y_max, 900.0);
    }

    #[test]
    fn test_zoom_rows_round() {
        let rows = vec![row(Some("Rice"), 12.6.into(), Some("Crops"))];
        let chart = emissions_chart(&rows);
        assert_eq!(chart.zoom_rows(), vec![("Rice".to_string(), 13.0)]);
    }

    #[test]
    fn test_empty_rows() {
        let chart = emissions_chart(&[]);
        assert!(chart.food_segments.is_empty());
        assert_eq!(chart.food_total, 0.0);
        assert_eq!(chart.y_max, 0.0);
    }
}

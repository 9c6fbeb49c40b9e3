use serde::Serialize;
use tracing::warn;

use crate::aggregate::constants::ALTERNATIVE_ITEMS;
use crate::charts::{axis_max, Theme};
use crate::dataset::FoodCatalog;
use crate::models::Measure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Popular,
    Alternative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeBar {
    pub name: String,
    pub value: Measure,
    pub role: Role,
}

/// Popular foods side by side with their alternatives.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlternativesChart {
    pub y_label: String,
    pub bars: Vec<AlternativeBar>,
    pub y_max: f64,
}

/// Look up each pair item; items missing from the catalog are skipped.
///
/// Roles alternate over the items that were found, starting with popular.
pub fn alternatives_chart(catalog: &FoodCatalog, theme: Theme) -> AlternativesChart {
    let found: Vec<_> = ALTERNATIVE_ITEMS
        .iter()
        .filter_map(|&name| {
            let entry = catalog.get(name);
            if entry.is_none() {
                warn!("\"{}\" not found", name);
            }
            entry
        })
        .collect();

    let bars: Vec<AlternativeBar> = found
        .into_iter()
        .enumerate()
        .map(|(i, entry)| AlternativeBar {
            name: entry.name.clone(),
            value: theme.of_entry(entry),
            role: if i % 2 == 0 { Role::Popular } else { Role::Alternative },
        })
        .collect();

    AlternativesChart {
        y_label: theme.axis_label().to_string(),
        y_max: axis_max(bars.iter().map(|b| b.value.axis_value())),
        bars,
    }
}

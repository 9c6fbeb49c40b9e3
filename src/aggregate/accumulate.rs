use tracing::debug;

use crate::dataset::FoodCatalog;
use crate::models::{BreakdownItem, ImpactTotal, MealSummary};

/// Sum carbon, water and cost over the selected ingredients.
///
/// Identifiers that are not in the catalog are skipped and add nothing.
/// Every call re-sums the whole selection.
pub fn accumulate<S: AsRef<str>>(ingredients: &[S], catalog: &FoodCatalog) -> ImpactTotal {
    let mut total = ImpactTotal::default();
    for name in ingredients {
        match catalog.get(name.as_ref()) {
            Some(entry) => total += ImpactTotal::of(entry),
            None => debug!("Skipping unknown ingredient '{}'", name.as_ref()),
        }
    }
    total
}

/// Totals plus a breakdown row per known ingredient.
pub fn summarize_meal<S: AsRef<str>>(ingredients: &[S], catalog: &FoodCatalog) -> MealSummary {
    let mut summary = MealSummary::default();

    for name in ingredients {
        let name = name.as_ref();
        let Some(entry) = catalog.get(name) else {
            debug!("Skipping unknown ingredient '{}'", name);
            summary.skipped.push(name.to_string());
            continue;
        };

        summary.total += ImpactTotal::of(entry);
        summary.breakdown.push(BreakdownItem {
            name: entry.name.clone(),
            display_name: entry.display_name(),
            link: entry.link.clone(),
            carbon: entry.carbon,
            water: entry.water,
        });
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodEntry, Measure};

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_entries(vec![
            FoodEntry::new("rice")
                .with_meal_type("First courses")
                .with_footprint(2.7, 1673.0, 0.5),
            FoodEntry::new("beef")
                .with_meal_type("Second courses")
                .with_footprint(99.5, 15415.0, 12.0),
            FoodEntry::new("tap water")
                .with_meal_type("Drinks")
                .with_footprint(Measure::missing(), 1.0, Measure::missing()),
        ])
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let total = accumulate::<&str>(&[], &catalog());
        assert_eq!(total, ImpactTotal::default());
        assert!(total.is_zero());
    }

    #[test]
    fn test_sums_known_items() {
        let total = accumulate(&["rice", "beef"], &catalog());
        assert!((total.co2 - 102.2).abs() < 1e-9);
        assert!((total.water - 17088.0).abs() < 1e-9);
        assert!((total.cost - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_measures_add_zero() {
        let total = accumulate(&["tap water"], &catalog());
        assert_eq!(total, ImpactTotal::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_summary_records_skipped() {
        let summary = summarize_meal(&["rice", "ghost-item"], &catalog());
        assert_eq!(summary.breakdown.len(), 1);
        assert_eq!(summary.breakdown[0].display_name, "Rice");
        assert_eq!(summary.skipped, vec!["ghost-item".to_string()]);
        assert_eq!(summary.total, ImpactTotal::new(2.7, 1673.0, 0.5));
    }
}

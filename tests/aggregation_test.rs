use assert_float_eq::*;

use true_cost_rs::aggregate::constants::UNKNOWN_CATEGORY;
use true_cost_rs::aggregate::{
    accumulate, group_by, liters_to, normalize, percent_of_total, percent_shares, round2,
    sum_by, summarize_meal, to_liters, VolumeUnit,
};
use true_cost_rs::charts::{emissions_chart, water_shares};
use true_cost_rs::dataset::{parse_catalog, FoodCatalog};
use true_cost_rs::models::{EmissionRow, FoodEntry, Measure, WaterRow};

fn sample_catalog() -> FoodCatalog {
    FoodCatalog::from_entries(vec![
        FoodEntry::new("rice")
            .with_meal_type("First courses")
            .with_footprint(2.7, 1673.0, 0.5),
        FoodEntry::new("pasta")
            .with_meal_type("First courses")
            .with_footprint(1.5, 1849.0, 0.3),
        FoodEntry::new("beef")
            .with_meal_type("Second courses")
            .with_footprint(99.48, 15415.0, 12.0),
        FoodEntry::new("coffee")
            .with_meal_type("Drinks")
            .with_footprint(Measure::missing(), 18900.0, Measure::missing()),
        FoodEntry::new("saffron"),
    ])
}

#[test]
fn test_grouping_is_a_partition() {
    let catalog = sample_catalog();
    let groups = group_by(catalog.entries(), |e| e.meal_type.as_deref());

    let grouped: usize = groups.values().map(Vec::len).sum();
    assert_eq!(grouped, catalog.len());

    let mut seen: Vec<&str> = groups
        .values()
        .flatten()
        .map(|e| e.name.as_str())
        .collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), catalog.len());
}

#[test]
fn test_uncategorized_items_land_in_unknown() {
    let catalog = sample_catalog();
    let groups = group_by(catalog.entries(), |e| e.meal_type.as_deref());

    let unknown = &groups[UNKNOWN_CATEGORY];
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].name, "saffron");

    // Categories come out in byte-wise order.
    let labels: Vec<&str> = groups.keys().map(String::as_str).collect();
    assert_eq!(
        labels,
        vec!["Drinks", "First courses", "Second courses", UNKNOWN_CATEGORY]
    );
}

#[test]
fn test_group_sums_skip_missing_values() {
    let catalog = sample_catalog();
    let sums = sum_by(catalog.entries(), |e| e.meal_type.as_deref(), |e| e.carbon);

    let first = sums["First courses"];
    assert_float_absolute_eq!(first.total, 4.2, 1e-9);
    assert_eq!(first.counted, 2);

    let drinks = sums["Drinks"];
    assert_eq!(drinks.total, 0.0);
    assert!(drinks.all_missing());
}

#[test]
fn test_percent_shares_cover_the_whole() {
    let values = [9.0, 1.0];
    assert_eq!(percent_shares(&values), vec![90, 10]);
    assert_eq!(percent_of_total(&values, 9.0), 90);

    // Rounding can push the sum off 100 by a point, never more.
    let thirds = percent_shares(&[1.0, 1.0, 1.0]);
    let sum: u32 = thirds.iter().sum();
    assert!((99..=101).contains(&sum));
}

#[test]
fn test_percent_of_empty_or_zero_total() {
    assert_eq!(percent_of_total(&[], 5.0), 0);
    assert_eq!(percent_of_total(&[0.0, 0.0], 0.0), 0);
    assert!(percent_shares(&[]).is_empty());
}

#[test]
fn test_unit_round_trip() {
    for unit in [
        VolumeUnit::Liters,
        VolumeUnit::Deciliters,
        VolumeUnit::Hectoliters,
        VolumeUnit::CubicMeters,
    ] {
        let liters = 1673.0;
        assert_float_relative_eq!(to_liters(liters_to(liters, unit), unit), liters, 1e-12);
    }

    assert_float_absolute_eq!(liters_to(1673.0, VolumeUnit::CubicMeters), 1.673, 1e-12);
    assert_float_absolute_eq!(liters_to(1.0, VolumeUnit::Deciliters), 10.0, 1e-12);
}

#[test]
fn test_normalize_rice_figures() {
    let n = normalize(Measure::from(1673.456), Some(VolumeUnit::CubicMeters)).unwrap();
    assert_eq!(n.value, 1673.46);
    assert_eq!(n.converted, Some(1.67));

    assert!(normalize(Measure::missing(), None).is_none());
    assert_eq!(round2(2.675_000_1), 2.68);
}

#[test]
fn test_meal_with_rice_only() {
    let catalog = sample_catalog();
    let total = accumulate(&["rice"], &catalog);

    assert_float_absolute_eq!(total.co2, 2.7, 1e-9);
    assert_float_absolute_eq!(total.water, 1673.0, 1e-9);
    assert_float_absolute_eq!(total.cost, 0.5, 1e-9);
}

#[test]
fn test_meal_accumulation_is_order_independent() {
    let catalog = sample_catalog();
    let forward = accumulate(&["rice", "beef", "coffee"], &catalog);
    let backward = accumulate(&["coffee", "beef", "rice"], &catalog);

    assert_float_absolute_eq!(forward.co2, backward.co2, 1e-9);
    assert_float_absolute_eq!(forward.water, backward.water, 1e-9);
    assert_float_absolute_eq!(forward.cost, backward.cost, 1e-9);
    assert_float_absolute_eq!(forward.water, 1673.0 + 15415.0 + 18900.0, 1e-9);
}

#[test]
fn test_summary_reports_unknown_ingredients() {
    let catalog = sample_catalog();
    let summary = summarize_meal(&["rice", "dragonfruit"], &catalog);

    assert_eq!(summary.breakdown.len(), 1);
    assert_eq!(summary.breakdown[0].display_name, "Rice");
    assert_eq!(summary.skipped, vec!["dragonfruit".to_string()]);
    assert_float_absolute_eq!(summary.total.co2, 2.7, 1e-9);
}

#[test]
fn test_emissions_food_stack_matches_rows() {
    let row = |item: &str, value: f64, category: Option<&str>| EmissionRow {
        item: Some(item.to_string()),
        value: value.into(),
        category: category.map(str::to_string),
    };
    let rows = vec![
        row("Energy", 15000.0, Some("Other")),
        row("Rice", 1200.0, Some("Food")),
        row("Beef", 3000.0, Some("Food")),
        row("Rice", 300.0, Some("Food")),
        row("Transport", 8000.0, None),
    ];

    let chart = emissions_chart(&rows);
    assert_eq!(chart.other_bars.len(), 2);
    assert_eq!(chart.food_segments.len(), 2);
    assert_eq!(chart.food_segments[0].label, "Beef");
    assert_float_absolute_eq!(chart.food_total, 4500.0, 1e-9);
    assert_float_absolute_eq!(chart.y_max, 15000.0, 1e-9);
}

#[test]
fn test_water_pie_percentages() {
    let rows = vec![
        WaterRow {
            variable: Some("Agriculture".to_string()),
            value: 2800.0.into(),
        },
        WaterRow {
            variable: Some("Industry".to_string()),
            value: 800.0.into(),
        },
        WaterRow {
            variable: Some("Municipal".to_string()),
            value: 400.0.into(),
        },
    ];

    let pie = water_shares(&rows);
    let percents: Vec<u32> = pie.slices.iter().map(|s| s.percent).collect();
    assert_eq!(percents, vec![70, 20, 10]);
    assert_float_absolute_eq!(pie.total, 4000.0, 1e-9);
}

#[test]
fn test_single_rice_dataset() {
    let catalog = parse_catalog(
        r#"{"rice": {"carbon": 2.7, "water": 1673, "cost": 0.5, "meal_type": "First courses"}}"#,
    )
    .unwrap();

    let groups = group_by(catalog.entries(), |e| e.meal_type.as_deref());
    let grouped: Vec<(&str, Vec<&str>)> = groups
        .iter()
        .map(|(k, v)| (k.as_str(), v.iter().map(|e| e.name.as_str()).collect()))
        .collect();
    assert_eq!(grouped, vec![("First courses", vec!["rice"])]);

    let carbon: Vec<f64> = catalog.entries().map(|e| e.carbon.axis_value()).collect();
    let rice = catalog.get("rice").unwrap().carbon.axis_value();
    assert_eq!(percent_of_total(&carbon, rice), 100);

    let total = accumulate(&["rice", "ghost-item"], &catalog);
    assert_float_absolute_eq!(total.co2, rice, 1e-12);
}

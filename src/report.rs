//! Chart assembly: build each chart's data and tag it with its mount point.

use serde::Serialize;
use tracing::error;

use crate::aggregate::constants::*;
use crate::aggregate::{format_thousands, summarize_meal};
use crate::charts::{
    alternatives_chart, emissions_chart, footprint_bars, ingredient_detail, land_shares,
    menu_grid, plate_layout, popularity, scatter_chart, water_shares, Bar, BarChart, Chart,
    ChartData, Theme,
};
use crate::dataset::{
    load_catalog, load_emissions, load_italy, load_land, load_water, DataSources, FoodCatalog,
};
use crate::error::{Result, TrueCostError};
use crate::models::{EmissionRow, FoodEntry, ItalyFoodRow, LandRow, Selection, WaterRow};

pub fn menu_chart(catalog: &FoodCatalog) -> Chart {
    Chart::new(MOUNT_MENU, "Menu", ChartData::Menu(menu_grid(catalog)))
}

pub fn detail_chart(entry: &FoodEntry) -> Chart {
    let detail = ingredient_detail(entry);
    Chart::new(MOUNT_RADAR, detail.title.clone(), ChartData::Detail(detail))
}

/// The sector chart plus its zoomed food breakdown.
pub fn emissions_charts(rows: &[EmissionRow]) -> Vec<Chart> {
    let chart = emissions_chart(rows);

    let zoom = BarChart {
        y_label: format!("{} total food emissions", format_thousands(chart.food_total)),
        bars: chart
            .zoom_rows()
            .into_iter()
            .map(|(label, value)| Bar::new(label, value))
            .collect(),
        y_max: chart.food_total,
    };

    vec![
        Chart::new(MOUNT_EMISSIONS, "Emissions by sector", ChartData::Emissions(chart)),
        Chart::new(MOUNT_EMISSIONS_ZOOM, "Food emissions", ChartData::Bars(zoom)),
    ]
}

pub fn water_chart(rows: &[WaterRow]) -> Chart {
    Chart::new(
        MOUNT_WATER,
        "Agriculture leads global water withdrawal",
        ChartData::Pie(water_shares(rows)),
    )
}

pub fn land_chart(rows: &[LandRow]) -> Chart {
    Chart::new(
        MOUNT_LAND,
        "Land Use Distribution (2018)",
        ChartData::Pie(land_shares(rows)),
    )
}

pub fn popularity_chart(rows: &[ItalyFoodRow]) -> Chart {
    Chart::new(
        MOUNT_POPULARITY,
        "Most consumed foods in Italy",
        ChartData::Bars(popularity(rows)),
    )
}

pub fn footprint_chart(rows: &[ItalyFoodRow], theme: Theme) -> Chart {
    Chart::new(
        MOUNT_FOOTPRINT,
        "Footprint per food",
        ChartData::Bars(footprint_bars(rows, theme)),
    )
}

pub fn alternatives_chart_for(catalog: &FoodCatalog, theme: Theme) -> Chart {
    Chart::new(
        MOUNT_ALTERNATIVES,
        "Popular foods and their alternatives",
        ChartData::Alternatives(alternatives_chart(catalog, theme)),
    )
}

pub fn scatter_chart_for(catalog: &FoodCatalog, theme: Theme) -> Chart {
    Chart::new(
        MOUNT_SCATTER,
        "Footprint vs price",
        ChartData::Scatter(scatter_chart(catalog, theme)),
    )
}

pub fn plate_chart(selection: &Selection, catalog: &FoodCatalog) -> Chart {
    Chart::new(
        MOUNT_PLATE,
        "Your plate",
        ChartData::Plate(plate_layout(selection, catalog)),
    )
}

/// The results panel for a confirmed meal. An empty selection has none.
pub fn meal_chart(selection: &Selection, catalog: &FoodCatalog) -> Result<Chart> {
    if selection.is_empty() {
        return Err(TrueCostError::EmptySelection);
    }
    let summary = summarize_meal(&selection.ingredients(), catalog);
    Ok(Chart::new(MOUNT_RESULTS, "Your meal", ChartData::Meal(summary)))
}

/// Every dataset-driven chart, for export.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub charts: Vec<Chart>,
    /// Datasets that failed to load; their charts are absent.
    pub failed: Vec<String>,
}

impl Report {
    /// Add the charts built from a dataset, or record that it failed.
    fn add<T>(&mut self, loaded: Result<T>, build: impl FnOnce(&T) -> Vec<Chart>) {
        match loaded {
            Ok(data) => self.charts.extend(build(&data)),
            Err(e) => {
                error!("{}", e);
                self.failed.push(failed_source(&e));
            }
        }
    }
}

fn failed_source(e: &TrueCostError) -> String {
    match e {
        TrueCostError::DatasetLoad { path, .. } => path.display().to_string(),
        other => other.to_string(),
    }
}

/// Build every chart. A dataset that fails to load only drops the charts
/// that depend on it.
pub fn build_report(sources: &DataSources) -> Report {
    let mut report = Report::default();

    report.add(load_emissions(&sources.emissions), |rows| emissions_charts(rows));
    report.add(load_water(&sources.water), |rows| vec![water_chart(rows)]);
    report.add(load_land(&sources.land), |rows| vec![land_chart(rows)]);
    report.add(load_italy(&sources.italy), |rows| {
        vec![
            popularity_chart(rows),
            footprint_chart(rows, Theme::Co2),
            footprint_chart(rows, Theme::Water),
        ]
    });
    report.add(load_catalog(&sources.game_data), |catalog| {
        vec![
            menu_chart(catalog),
            alternatives_chart_for(catalog, Theme::Co2),
            alternatives_chart_for(catalog, Theme::Water),
            scatter_chart_for(catalog, Theme::Co2),
            scatter_chart_for(catalog, Theme::Water),
        ]
    });

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodEntry;

    #[test]
    fn test_meal_chart_rejects_empty_selection() {
        let catalog = FoodCatalog::from_entries(vec![FoodEntry::new("rice")]);
        let err = meal_chart(&Selection::slotted(), &catalog).unwrap_err();
        assert!(matches!(err, TrueCostError::EmptySelection));
    }

    #[test]
    fn test_missing_sources_are_recorded() {
        let sources = DataSources::in_dir("no/such/dir");
        let report = build_report(&sources);
        assert!(report.charts.is_empty());
        assert_eq!(report.failed.len(), 5);
        assert!(report.failed[0].ends_with("emissions_sectors_agrovoc.csv"));
    }
}

use std::io::{self, Write};

use crate::aggregate::constants::{DATA_NOT_AVAILABLE, FOOD_EMISSIONS_LABEL};
use crate::aggregate::format_thousands;
use crate::charts::{
    AlternativesChart, BarChart, Chart, ChartData, EmissionsChart, IngredientDetail, MenuGrid,
    PieChart, PlateLayout, Role, ScatterChart,
};
use crate::models::{Measure, MealSummary};

/// Width of the longest text bar.
const BAR_WIDTH: usize = 40;

/// A proportional bar of block characters.
fn text_bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.clamp(1, BAR_WIDTH))
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(10)
}

fn one_decimal(value: Measure) -> String {
    match value.value() {
        Some(v) => format!("{:.1}", v),
        None => DATA_NOT_AVAILABLE.to_string(),
    }
}

/// Print a chart as a text table.
pub fn write_chart<W: Write>(out: &mut W, chart: &Chart) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {} ===", chart.title)?;
    writeln!(out)?;

    match &chart.data {
        ChartData::Menu(grid) => write_menu(out, grid),
        ChartData::Detail(detail) => write_detail(out, detail),
        ChartData::Emissions(emissions) => write_emissions(out, emissions),
        ChartData::Pie(pie) => write_pie(out, pie),
        ChartData::Bars(bars) => write_bars(out, bars),
        ChartData::Alternatives(alts) => write_alternatives(out, alts),
        ChartData::Scatter(scatter) => write_scatter(out, scatter),
        ChartData::Plate(plate) => write_plate(out, plate),
        ChartData::Meal(summary) => write_meal(out, summary),
    }
}

fn write_menu<W: Write>(out: &mut W, grid: &MenuGrid) -> io::Result<()> {
    if grid.sections.is_empty() {
        return writeln!(out, "(no ingredients)");
    }

    for (i, section) in grid.sections.iter().enumerate() {
        writeln!(out, "{} ({} items)", section.heading, section.items.len())?;
        let names: Vec<&str> = section
            .items
            .iter()
            .map(|item| item.display_name.as_str())
            .collect();
        for row in names.chunks(4) {
            writeln!(out, "  {}", row.join(" | "))?;
        }
        if i + 1 < grid.sections.len() {
            writeln!(out, "---")?;
        }
    }
    Ok(())
}

fn write_detail<W: Write>(out: &mut W, detail: &IngredientDetail) -> io::Result<()> {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| DATA_NOT_AVAILABLE.to_string());

    writeln!(out, "Agrovoc URI: {}", text(&detail.agrovoc_uri))?;
    writeln!(out, "Type: {}", text(&detail.kind))?;
    writeln!(out, "Consumption: {} (g or mL/day)", detail.consumption.display())?;
    writeln!(out, "Carbon: {} (g CO₂eq/g or mL)", detail.carbon.display())?;
    writeln!(out, "Water: {} (m³/kg or L)", detail.water_m3.display())?;
    writeln!(out, "Cost: {} (€/kg or L)", detail.cost.display())?;
    writeln!(out)?;

    let width = label_width(detail.radar.axes.iter().map(|a| a.label));
    for axis in &detail.radar.axes {
        writeln!(
            out,
            "  {:<width$}  {:>8.2}  {}",
            axis.label,
            axis.value,
            text_bar(axis.value, detail.radar.suggested_max),
            width = width
        )?;
    }
    Ok(())
}

fn write_emissions<W: Write>(out: &mut W, chart: &EmissionsChart) -> io::Result<()> {
    let labels = chart
        .food_segments
        .iter()
        .chain(chart.other_bars.iter())
        .map(|b| b.label.as_str());
    let width = label_width(labels).max(FOOD_EMISSIONS_LABEL.len());

    writeln!(
        out,
        "{:<width$}  {:>12}  {}",
        FOOD_EMISSIONS_LABEL,
        format_thousands(chart.food_total),
        text_bar(chart.food_total, chart.y_max),
        width = width
    )?;
    for segment in &chart.food_segments {
        writeln!(
            out,
            "  · {:<width$}{:>12}",
            segment.label,
            format_thousands(segment.value.axis_value()),
            width = width - 2
        )?;
    }
    for bar in &chart.other_bars {
        let value = bar.value.axis_value();
        writeln!(
            out,
            "{:<width$}  {:>12}  {}",
            bar.label,
            format_thousands(value),
            text_bar(value, chart.y_max),
            width = width
        )?;
    }
    Ok(())
}

fn write_pie<W: Write>(out: &mut W, pie: &PieChart) -> io::Result<()> {
    let width = label_width(pie.slices.iter().map(|s| s.label.as_str()));
    for slice in &pie.slices {
        writeln!(
            out,
            "{:<width$}  {:>4}%  {}",
            slice.label,
            slice.percent,
            text_bar(slice.percent as f64, 100.0),
            width = width
        )?;
    }
    Ok(())
}

fn write_bars<W: Write>(out: &mut W, chart: &BarChart) -> io::Result<()> {
    writeln!(out, "({})", chart.y_label)?;
    let width = label_width(chart.bars.iter().map(|b| b.label.as_str()));
    for bar in &chart.bars {
        writeln!(
            out,
            "{:<width$}  {:>18}  {}",
            bar.label,
            one_decimal(bar.value),
            text_bar(bar.value.axis_value(), chart.y_max),
            width = width
        )?;
    }
    Ok(())
}

fn write_alternatives<W: Write>(out: &mut W, chart: &AlternativesChart) -> io::Result<()> {
    writeln!(out, "({})", chart.y_label)?;
    let width = label_width(chart.bars.iter().map(|b| b.name.as_str()));
    for bar in &chart.bars {
        let role = match bar.role {
            Role::Popular => "popular",
            Role::Alternative => "alternative",
        };
        writeln!(
            out,
            "{:<width$}  {:<11}  {:>18}  {}",
            bar.name,
            role,
            one_decimal(bar.value),
            text_bar(bar.value.axis_value(), chart.y_max),
            width = width
        )?;
    }
    Ok(())
}

fn write_scatter<W: Write>(out: &mut W, chart: &ScatterChart) -> io::Result<()> {
    writeln!(out, "x: {}", chart.x_label)?;
    writeln!(out, "y: {}", chart.y_label)?;
    let width = label_width(chart.points.iter().map(|p| p.name.as_str()));
    for point in &chart.points {
        writeln!(
            out,
            "{:<width$}  x={:>10.2}  y={:>8.2}",
            point.name,
            point.x,
            point.y,
            width = width
        )?;
    }
    Ok(())
}

fn write_plate<W: Write>(out: &mut W, plate: &PlateLayout) -> io::Result<()> {
    if plate.placements.is_empty() {
        return writeln!(out, "(empty plate)");
    }
    for p in &plate.placements {
        writeln!(
            out,
            "{:<18} {:<20} at ({:>2.0}%, {:>2.0}%) {}px",
            p.meal_type, p.name, p.x, p.y, p.size
        )?;
    }
    Ok(())
}

fn write_meal<W: Write>(out: &mut W, summary: &MealSummary) -> io::Result<()> {
    for item in &summary.breakdown {
        writeln!(out, "{}", item.display_name)?;
        if let Some(link) = &item.link {
            writeln!(out, "  {}", link)?;
        }
        writeln!(out, "  CO₂: {}", item.carbon.display_with_unit("g/g"))?;
        let water = match item.water.value() {
            Some(v) => format!("{} liters", format_thousands(v)),
            None => DATA_NOT_AVAILABLE.to_string(),
        };
        writeln!(out, "  Water: {}", water)?;
    }

    if !summary.skipped.is_empty() {
        writeln!(out)?;
        writeln!(out, "Not in dataset: {}", summary.skipped.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "--- Total ---")?;
    writeln!(out, "CO₂: {:.2}", summary.total.co2)?;
    writeln!(out, "Water: {}", format_thousands(summary.total.water))?;
    writeln!(out, "Cost: {:.2}", summary.total.cost)?;
    Ok(())
}

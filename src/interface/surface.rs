use std::collections::BTreeMap;
use std::io::Write;

use tracing::debug;

use crate::charts::Chart;
use crate::error::Result;
use crate::interface::render::write_chart;

/// A drawn chart. Owned by the caller and handed back on the next draw into
/// the same mount, or disposed.
#[derive(Debug, PartialEq, Eq)]
pub struct ChartHandle {
    id: u64,
    mount: String,
}

impl ChartHandle {
    pub fn mount(&self) -> &str {
        &self.mount
    }
}

/// Somewhere charts are drawn.
pub trait ChartSurface {
    /// Draw `chart`, disposing `previous` first so the mount never holds two
    /// copies.
    fn draw(&mut self, chart: &Chart, previous: Option<ChartHandle>) -> Result<ChartHandle>;

    /// Remove a drawn chart.
    fn dispose(&mut self, handle: ChartHandle);
}

/// Bookkeeping shared by the surfaces below.
#[derive(Debug, Default)]
struct LiveCharts {
    next_id: u64,
    live: BTreeMap<u64, String>,
}

impl LiveCharts {
    fn open(&mut self, mount: &str) -> ChartHandle {
        self.next_id += 1;
        self.live.insert(self.next_id, mount.to_string());
        ChartHandle {
            id: self.next_id,
            mount: mount.to_string(),
        }
    }

    fn close(&mut self, handle: ChartHandle) {
        if self.live.remove(&handle.id).is_some() {
            debug!("Disposed chart {} on '{}'", handle.id, handle.mount);
        }
    }

    fn on_mount(&self, mount: &str) -> usize {
        self.live.values().filter(|m| m.as_str() == mount).count()
    }
}

/// Prints charts as text tables.
pub struct TerminalSurface<W: Write> {
    out: W,
    charts: LiveCharts,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            charts: LiveCharts::default(),
        }
    }

    /// Number of live charts drawn into `mount`.
    pub fn live_on(&self, mount: &str) -> usize {
        self.charts.on_mount(mount)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSurface for TerminalSurface<W> {
    fn draw(&mut self, chart: &Chart, previous: Option<ChartHandle>) -> Result<ChartHandle> {
        if let Some(prev) = previous {
            self.dispose(prev);
        }
        write_chart(&mut self.out, chart)?;
        self.out.flush()?;
        Ok(self.charts.open(&chart.mount))
    }

    fn dispose(&mut self, handle: ChartHandle) {
        self.charts.close(handle);
    }
}

/// Prints charts as pretty JSON, one document per draw.
pub struct JsonSurface<W: Write> {
    out: W,
    charts: LiveCharts,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            charts: LiveCharts::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartSurface for JsonSurface<W> {
    fn draw(&mut self, chart: &Chart, previous: Option<ChartHandle>) -> Result<ChartHandle> {
        if let Some(prev) = previous {
            self.dispose(prev);
        }
        serde_json::to_writer_pretty(&mut self.out, chart)?;
        writeln!(self.out)?;
        Ok(self.charts.open(&chart.mount))
    }

    fn dispose(&mut self, handle: ChartHandle) {
        self.charts.close(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::FoodCatalog;
    use crate::models::{FoodEntry, Selection};
    use crate::report::plate_chart;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_entries(vec![
            FoodEntry::new("rice").with_meal_type("First courses"),
            FoodEntry::new("coffee").with_meal_type("Drinks"),
        ])
    }

    #[test]
    fn test_redraw_replaces_previous() {
        let catalog = catalog();
        let mut surface = TerminalSurface::new(Vec::new());
        let mut selection = Selection::slotted();

        selection.pick("First courses", "rice");
        let handle = surface.draw(&plate_chart(&selection, &catalog), None).unwrap();
        assert_eq!(surface.live_on(handle.mount()), 1);

        selection.pick("Drinks", "coffee");
        let handle = surface
            .draw(&plate_chart(&selection, &catalog), Some(handle))
            .unwrap();
        assert_eq!(surface.live_on(handle.mount()), 1);

        let mount = handle.mount().to_string();
        surface.dispose(handle);
        assert_eq!(surface.live_on(&mount), 0);

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(text.matches("=== Your plate ===").count(), 2);
    }

    #[test]
    fn test_json_surface_writes_tagged_chart() {
        let catalog = catalog();
        let mut surface = JsonSurface::new(Vec::new());
        let mut selection = Selection::slotted();
        selection.pick("Drinks", "coffee");
        surface.draw(&plate_chart(&selection, &catalog), None).unwrap();

        let text = String::from_utf8(surface.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["kind"], "plate");
        assert_eq!(value["mount"], "ingredient-images");
        assert_eq!(value["data"]["placements"][0]["name"], "coffee");
    }
}

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::dataset::FoodCatalog;
use crate::error::{Result, TrueCostError};
use crate::models::{EmissionRow, FoodEntry, ItalyFoodRow, LandRow, WaterRow};

/// Parse the game dataset: a JSON object keyed by ingredient name.
///
/// A record that is not an object is skipped with a warning. Bad fields
/// inside a record fall back to "missing" and never fail the load.
pub fn parse_catalog(json: &str) -> Result<FoodCatalog> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;

    let mut entries = Vec::with_capacity(raw.len());
    for (name, value) in raw {
        match serde_json::from_value::<FoodEntry>(value) {
            Ok(mut entry) => {
                entry.name = name;
                if !entry.is_valid() {
                    warn!("'{}' has a negative footprint value", entry.name);
                }
                entries.push(entry);
            }
            Err(e) => warn!("Skipping malformed record '{}': {}", name, e),
        }
    }

    Ok(FoodCatalog::from_entries(entries))
}

/// Load the game dataset from a file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let catalog = fs::read_to_string(path)
        .map_err(TrueCostError::from)
        .and_then(|content| parse_catalog(&content))
        .map_err(|e| TrueCostError::dataset(path, e))?;

    info!("Loaded {} ingredients from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Parse CSV rows with headers into `T`.
///
/// Cells are trimmed and short rows are allowed. A row that still fails to
/// deserialize is skipped with a warning.
pub fn parse_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    // Header problems are fatal; row problems are not.
    rdr.headers()?;

    let mut rows = Vec::new();
    for (line, record) in rdr.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => warn!("Skipping CSV row {}: {}", line + 2, e),
        }
    }
    Ok(rows)
}

/// Load CSV rows from a file.
pub fn load_rows<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let rows = fs::File::open(path)
        .map_err(TrueCostError::from)
        .and_then(|file| parse_rows::<T, _>(file))
        .map_err(|e| TrueCostError::dataset(path, e))?;

    info!("Loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn load_emissions<P: AsRef<Path>>(path: P) -> Result<Vec<EmissionRow>> {
    load_rows(path)
}

pub fn load_water<P: AsRef<Path>>(path: P) -> Result<Vec<WaterRow>> {
    load_rows(path)
}

pub fn load_land<P: AsRef<Path>>(path: P) -> Result<Vec<LandRow>> {
    load_rows(path)
}

pub fn load_italy<P: AsRef<Path>>(path: P) -> Result<Vec<ItalyFoodRow>> {
    load_rows(path)
}

/// Write any chart data as pretty JSON.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

use std::path::{Path, PathBuf};

pub const GAME_DATA_FILE: &str = "game_data.json";
pub const EMISSIONS_FILE: &str = "emissions_sectors_agrovoc.csv";
pub const WATER_FILE: &str = "filtered_water_agrovoc.csv";
pub const LAND_FILE: &str = "filtered_landuse_agrovoc.csv";
pub const ITALY_FILE: &str = "italy_food_data.csv";

/// Default directory holding the dataset snapshot.
pub const DEFAULT_DATA_DIR: &str = "final_data";

/// Where each dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSources {
    pub game_data: PathBuf,
    pub emissions: PathBuf,
    pub water: PathBuf,
    pub land: PathBuf,
    pub italy: PathBuf,
}

impl DataSources {
    /// All datasets under `dir` with their standard file names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            game_data: dir.join(GAME_DATA_FILE),
            emissions: dir.join(EMISSIONS_FILE),
            water: dir.join(WATER_FILE),
            land: dir.join(LAND_FILE),
            italy: dir.join(ITALY_FILE),
        }
    }
}

impl Default for DataSources {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

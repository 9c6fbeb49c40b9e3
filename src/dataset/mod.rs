mod catalog;
mod loader;
mod sources;

pub use catalog::FoodCatalog;
pub use loader::{
    load_catalog, load_emissions, load_italy, load_land, load_rows, load_water, parse_catalog,
    parse_rows, write_json,
};
pub use sources::{
    DataSources, DEFAULT_DATA_DIR, EMISSIONS_FILE, GAME_DATA_FILE, ITALY_FILE, LAND_FILE,
    WATER_FILE,
};

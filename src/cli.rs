use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::charts::Theme;
use crate::dataset::{DataSources, DEFAULT_DATA_DIR};

/// True Cost of a Meal: the environmental footprint of food, as charts.
#[derive(Parser, Debug)]
#[command(name = "true_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding the dataset snapshot.
    #[arg(short, long, global = true, env = "TRUE_COST_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Override the game dataset (JSON keyed by ingredient).
    #[arg(long, global = true, env = "TRUE_COST_GAME_DATA")]
    pub game_data: Option<PathBuf>,

    /// Override the emissions-by-sector CSV.
    #[arg(long, global = true, env = "TRUE_COST_EMISSIONS")]
    pub emissions: Option<PathBuf>,

    /// Override the water withdrawal CSV.
    #[arg(long, global = true, env = "TRUE_COST_WATER")]
    pub water: Option<PathBuf>,

    /// Override the land use CSV.
    #[arg(long, global = true, env = "TRUE_COST_LAND")]
    pub land: Option<PathBuf>,

    /// Override the Italian per-food CSV.
    #[arg(long, global = true, env = "TRUE_COST_ITALY")]
    pub italy: Option<PathBuf>,

    /// Print chart data as JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Dataset paths: the data directory, then any per-file override.
    pub fn sources(&self) -> DataSources {
        let mut sources = DataSources::in_dir(&self.data_dir);
        let overrides = [
            (&mut sources.game_data, &self.game_data),
            (&mut sources.emissions, &self.emissions),
            (&mut sources.water, &self.water),
            (&mut sources.land, &self.land),
            (&mut sources.italy, &self.italy),
        ];
        for (slot, over) in overrides {
            if let Some(path) = over {
                *slot = path.clone();
            }
        }
        sources
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every ingredient under its meal type.
    Menu,

    /// Show the detail card and impact radar for one ingredient.
    Show {
        /// Ingredient name (case-insensitive).
        ingredient: String,
    },

    /// Emissions by sector, with the food share broken down.
    Emissions,

    /// Global water withdrawal by sector.
    Water,

    /// Land use distribution.
    Land,

    /// Most consumed foods in Italy.
    Popularity,

    /// Carbon or water footprint per food.
    Footprint {
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
    },

    /// Popular foods next to their alternatives.
    Alternatives {
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
    },

    /// Footprint against price.
    Scatter {
        #[arg(long, value_enum, default_value_t)]
        theme: Theme,
    },

    /// Build a meal and total its impact. Interactive without --pick or --random.
    Meal {
        /// Ingredient to add; repeat for more.
        #[arg(short, long = "pick")]
        picks: Vec<String>,

        /// Allow several ingredients per meal type.
        #[arg(long)]
        free: bool,

        /// Pick one random ingredient per meal type.
        #[arg(long, conflicts_with = "picks")]
        random: bool,

        /// Seed for --random.
        #[arg(long, requires = "random")]
        seed: Option<u64>,
    },

    /// Export every chart's data as JSON.
    Report {
        #[arg(short, long, default_value = "report.json")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_single_paths() {
        let cli = Cli::parse_from([
            "true_cost",
            "--data-dir",
            "snapshot",
            "--water",
            "elsewhere/water.csv",
            "water",
        ]);
        let sources = cli.sources();
        assert_eq!(sources.water, PathBuf::from("elsewhere/water.csv"));
        assert_eq!(sources.land, PathBuf::from("snapshot/filtered_landuse_agrovoc.csv"));
        assert!(matches!(cli.command, Some(Command::Water)));
    }

    #[test]
    fn test_meal_flags() {
        let cli = Cli::parse_from(["true_cost", "meal", "-p", "rice", "--pick", "beef", "-vv"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Meal { picks, free, random, seed }) => {
                assert_eq!(picks, vec!["rice", "beef"]);
                assert!(!free && !random);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_theme_default_is_co2() {
        let cli = Cli::parse_from(["true_cost", "scatter"]);
        assert!(matches!(cli.command, Some(Command::Scatter { theme: Theme::Co2 })));
    }
}

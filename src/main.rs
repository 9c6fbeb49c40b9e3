use std::io;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use true_cost_rs::builder::{meal_slots, random_selection, selection_from_picks};
use true_cost_rs::cli::{Cli, Command};
use true_cost_rs::dataset::{
    load_catalog, load_emissions, load_italy, load_land, load_water, write_json, DataSources,
    FoodCatalog,
};
use true_cost_rs::error::{Result, TrueCostError};
use true_cost_rs::interface::{
    prompt_ingredient, prompt_slot, prompt_yes_no, ChartHandle, ChartSurface, JsonSurface,
    TerminalSurface,
};
use true_cost_rs::logging;
use true_cost_rs::models::Selection;
use true_cost_rs::report::{self, build_report};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let sources = cli.sources();
    let command = cli.command.unwrap_or_default();

    let mut surface: Box<dyn ChartSurface> = if cli.json {
        Box::new(JsonSurface::new(io::stdout()))
    } else {
        Box::new(TerminalSurface::new(io::stdout()))
    };

    match command {
        Command::Menu => {
            let catalog = load_catalog(&sources.game_data)?;
            surface.draw(&report::menu_chart(&catalog), None)?;
        }
        Command::Show { ingredient } => cmd_show(surface.as_mut(), &sources, &ingredient)?,
        Command::Emissions => {
            let rows = load_emissions(&sources.emissions)?;
            for chart in report::emissions_charts(&rows) {
                surface.draw(&chart, None)?;
            }
        }
        Command::Water => {
            let rows = load_water(&sources.water)?;
            surface.draw(&report::water_chart(&rows), None)?;
        }
        Command::Land => {
            let rows = load_land(&sources.land)?;
            surface.draw(&report::land_chart(&rows), None)?;
        }
        Command::Popularity => {
            let rows = load_italy(&sources.italy)?;
            surface.draw(&report::popularity_chart(&rows), None)?;
        }
        Command::Footprint { theme } => {
            let rows = load_italy(&sources.italy)?;
            surface.draw(&report::footprint_chart(&rows, theme), None)?;
        }
        Command::Alternatives { theme } => {
            let catalog = load_catalog(&sources.game_data)?;
            surface.draw(&report::alternatives_chart_for(&catalog, theme), None)?;
        }
        Command::Scatter { theme } => {
            let catalog = load_catalog(&sources.game_data)?;
            surface.draw(&report::scatter_chart_for(&catalog, theme), None)?;
        }
        Command::Meal {
            picks,
            free,
            random,
            seed,
        } => cmd_meal(surface.as_mut(), &sources, &picks, free, random, seed, cli.json)?,
        Command::Report { out } => {
            let exported = build_report(&sources);
            write_json(&out, &exported)?;
            println!("Wrote {} charts to {}", exported.charts.len(), out.display());
            if !exported.failed.is_empty() {
                println!("Skipped (failed to load): {}", exported.failed.join(", "));
            }
        }
    }

    Ok(())
}

/// Show the detail card for one ingredient.
fn cmd_show(surface: &mut dyn ChartSurface, sources: &DataSources, name: &str) -> Result<()> {
    let catalog = load_catalog(&sources.game_data)?;

    let Some(entry) = catalog.find(name) else {
        let suggestions = catalog.suggest(name, 5);
        if !suggestions.is_empty() {
            let names: Vec<&str> = suggestions.iter().map(|e| e.name.as_str()).collect();
            eprintln!("Did you mean: {}?", names.join(", "));
        }
        return Err(TrueCostError::IngredientNotFound(name.to_string()));
    };

    surface.draw(&report::detail_chart(entry), None)?;
    Ok(())
}

/// Build a meal from flags, at random, or interactively, then show totals.
fn cmd_meal(
    surface: &mut dyn ChartSurface,
    sources: &DataSources,
    picks: &[String],
    free: bool,
    random: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let catalog = load_catalog(&sources.game_data)?;
    info!("Loaded {} ingredients", catalog.len());

    let mut plate: Option<ChartHandle> = None;
    let selection = if random {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        random_selection(&catalog, &mut rng)
    } else if !picks.is_empty() {
        selection_from_picks(&catalog, picks, free)
    } else if json {
        return Err(TrueCostError::InvalidInput(
            "interactive meal building needs table output; use --pick or --random with --json"
                .to_string(),
        ));
    } else if free {
        prompt_free_selection(&catalog)?
    } else {
        prompt_slotted_selection(surface, &catalog, &mut plate)?
    };

    if !selection.slots().is_empty() {
        plate = Some(surface.draw(&report::plate_chart(&selection, &catalog), plate)?);
    }

    match report::meal_chart(&selection, &catalog) {
        Ok(chart) => {
            surface.draw(&chart, None)?;
        }
        Err(TrueCostError::EmptySelection) => println!("No ingredients selected."),
        Err(e) => return Err(e),
    }

    if let Some(handle) = plate {
        surface.dispose(handle);
    }
    Ok(())
}

/// One slot at a time, redrawing the plate after every choice.
fn prompt_slotted_selection(
    surface: &mut dyn ChartSurface,
    catalog: &FoodCatalog,
    plate: &mut Option<ChartHandle>,
) -> Result<Selection> {
    let mut selection = Selection::slotted();

    loop {
        for (slot, items) in meal_slots(catalog) {
            if let Some(entry) = prompt_slot(slot, &items)? {
                selection.pick(slot, &entry.name);
                let chart = report::plate_chart(&selection, catalog);
                *plate = Some(surface.draw(&chart, plate.take())?);
            }
        }

        if selection.is_empty() || prompt_yes_no("Confirm this meal?", true)? {
            return Ok(selection);
        }
    }
}

fn prompt_free_selection(catalog: &FoodCatalog) -> Result<Selection> {
    let mut selection = Selection::free();
    while let Some(name) = prompt_ingredient(catalog)? {
        if selection.toggle(&name) {
            println!("Added: {}", name);
        } else {
            println!("Removed: {}", name);
        }
    }
    Ok(selection)
}

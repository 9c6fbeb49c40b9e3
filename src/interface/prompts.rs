use dialoguer::{Confirm, Input, Select};

use crate::dataset::FoodCatalog;
use crate::error::Result;
use crate::models::FoodEntry;

/// Offer one slot of the meal builder; `None` when the user skips it.
pub fn prompt_slot<'a>(meal_type: &str, items: &[&'a FoodEntry]) -> Result<Option<&'a FoodEntry>> {
    let mut options: Vec<String> = items.iter().map(|e| e.display_name()).collect();
    options.push("(skip)".to_string());

    let selection = Select::new()
        .with_prompt(meal_type)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(items.get(selection).copied())
}

/// Ask for one ingredient by name, with fuzzy matching.
///
/// Returns `Ok(None)` when the user enters an empty line.
pub fn prompt_ingredient(catalog: &FoodCatalog) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Add an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        if let Some(entry) = catalog.find(input) {
            return Ok(Some(entry.name.clone()));
        }

        let candidates = catalog.suggest(input, 5);
        match candidates.as_slice() {
            [] => println!("No matching ingredient found for '{}'", input),
            [only] => {
                if prompt_yes_no(&format!("Did you mean '{}'?", only.name), true)? {
                    return Ok(Some(only.name.clone()));
                }
            }
            many => {
                let mut options: Vec<String> = many.iter().map(|e| e.name.clone()).collect();
                options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&options)
                    .default(0)
                    .interact()?;

                if let Some(entry) = many.get(selection) {
                    return Ok(Some(entry.name.clone()));
                }
            }
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

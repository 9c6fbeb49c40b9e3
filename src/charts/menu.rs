use serde::Serialize;

use crate::aggregate::{capitalize_first, group_by_sorted, heading_case};
use crate::dataset::FoodCatalog;

#[derive(Debug, Clone, Serialize)]
pub struct MenuItem {
    pub key: String,
    pub display_name: String,
    pub image_button: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuSection {
    /// Raw meal type, or `"Unknown"`.
    pub category: String,
    pub heading: String,
    pub items: Vec<MenuItem>,
}

/// The menu grid: every ingredient under its meal type heading.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MenuGrid {
    pub sections: Vec<MenuSection>,
}

impl MenuGrid {
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// Group the catalog by meal type, categories and items alphabetical.
pub fn menu_grid(catalog: &FoodCatalog) -> MenuGrid {
    let groups = group_by_sorted(
        catalog.entries(),
        |e| e.meal_type.as_deref(),
        |e| e.name.as_str(),
    );

    let sections = groups
        .into_iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(category, entries)| MenuSection {
            heading: heading_case(&category),
            items: entries
                .into_iter()
                .map(|e| MenuItem {
                    key: e.name.clone(),
                    display_name: capitalize_first(&e.name),
                    image_button: e.image_button.clone(),
                })
                .collect(),
            category,
        })
        .collect();

    MenuGrid { sections }
}

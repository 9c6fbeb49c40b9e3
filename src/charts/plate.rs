use serde::Serialize;

use crate::aggregate::constants::plate_position;
use crate::dataset::FoodCatalog;
use crate::models::Selection;

/// An ingredient image placed on the plate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub name: String,
    pub meal_type: String,
    pub image: Option<String>,
    /// Percent from the left of the plate box.
    pub x: f64,
    /// Percent from the top of the plate box.
    pub y: f64,
    /// Image width in pixels.
    pub size: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlateLayout {
    pub placements: Vec<Placement>,
}

/// Place each chosen ingredient at its slot's position.
///
/// Only slotted selections have positions; unknown ingredients and slots
/// without a position are skipped.
pub fn plate_layout(selection: &Selection, catalog: &FoodCatalog) -> PlateLayout {
    let placements = selection
        .slots()
        .into_iter()
        .filter_map(|(meal_type, name)| {
            let entry = catalog.get(name)?;
            let pos = plate_position(meal_type)?;
            Some(Placement {
                name: entry.name.clone(),
                meal_type: meal_type.to_string(),
                image: entry.image.clone(),
                x: pos.x,
                y: pos.y,
                size: pos.size,
            })
        })
        .collect();

    PlateLayout { placements }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FoodEntry;

    #[test]
    fn test_places_known_slots() {
        let catalog = FoodCatalog::from_entries(vec![
            FoodEntry::new("rice").with_meal_type("First courses"),
            FoodEntry::new("coffee").with_meal_type("Drinks"),
        ]);

        let mut selection = Selection::slotted();
        selection.pick("First courses", "rice");
        selection.pick("Drinks", "coffee");
        selection.pick("Snacks", "coffee");
        selection.pick("Extras", "ghost-item");

        let layout = plate_layout(&selection, &catalog);
        assert_eq!(layout.placements.len(), 2);

        let rice = layout.placements.iter().find(|p| p.name == "rice").unwrap();
        assert_eq!((rice.x, rice.y, rice.size), (48.0, 60.0, 150));
    }

    #[test]
    fn test_free_selection_has_no_layout() {
        let catalog = FoodCatalog::from_entries(vec![FoodEntry::new("rice")]);
        let mut selection = Selection::free();
        selection.toggle("rice");
        assert!(plate_layout(&selection, &catalog).placements.is_empty());
    }
}

//! Meal builder: turning picks into a [`Selection`].

use rand::seq::SliceRandom;
use rand::Rng;

use crate::aggregate::constants::MEAL_ORDER;
use crate::dataset::FoodCatalog;
use crate::models::{FoodEntry, Selection};

/// Builder slots in display order, each with its ingredients.
///
/// Slots with no ingredient in the catalog are left out.
pub fn meal_slots(catalog: &FoodCatalog) -> Vec<(&'static str, Vec<&FoodEntry>)> {
    MEAL_ORDER
        .iter()
        .map(|&slot| (slot, catalog.in_meal_type(slot)))
        .filter(|(_, items)| !items.is_empty())
        .collect()
}

/// Build a selection from names typed on the command line.
///
/// Names are matched ignoring case. A name that matches nothing is kept as
/// typed so the accumulator can report it as skipped. In a slotted
/// selection, unmatched names and ingredients without a meal type are held
/// outside the slots, so none of them displaces another pick.
pub fn selection_from_picks<S: AsRef<str>>(
    catalog: &FoodCatalog,
    picks: &[S],
    free: bool,
) -> Selection {
    let mut selection = if free {
        Selection::free()
    } else {
        Selection::slotted()
    };

    for pick in picks {
        let pick = pick.as_ref().trim();
        match catalog.find(pick) {
            Some(entry) => match entry.meal_type.as_deref() {
                Some(slot) => selection.pick(slot, &entry.name),
                None => selection.add_unslotted(&entry.name),
            },
            None => selection.add_unslotted(pick),
        }
    }

    selection
}

/// One random ingredient per builder slot.
pub fn random_selection<R: Rng + ?Sized>(catalog: &FoodCatalog, rng: &mut R) -> Selection {
    let mut selection = Selection::slotted();
    for (slot, items) in meal_slots(catalog) {
        if let Some(entry) = items.choose(rng) {
            selection.pick(slot, &entry.name);
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> FoodCatalog {
        FoodCatalog::from_entries(vec![
            FoodEntry::new("rice").with_meal_type("First courses"),
            FoodEntry::new("pasta").with_meal_type("First courses"),
            FoodEntry::new("coffee").with_meal_type("Drinks"),
            FoodEntry::new("tea").with_meal_type("Drinks"),
            FoodEntry::new("mystery"),
        ])
    }

    #[test]
    fn test_meal_slots_follow_order() {
        let catalog = catalog();
        let slots: Vec<&str> = meal_slots(&catalog).into_iter().map(|(s, _)| s).collect();
        assert_eq!(slots, vec!["First courses", "Drinks"]);
    }

    #[test]
    fn test_picks_slot_by_meal_type() {
        let selection = selection_from_picks(&catalog(), &["RICE", "coffee", "tea"], false);
        assert_eq!(
            selection.slots(),
            vec![("Drinks", "tea"), ("First courses", "rice")]
        );
    }

    #[test]
    fn test_unknown_pick_is_kept() {
        let selection = selection_from_picks(&catalog(), &["rice", "ghost-item"], true);
        assert_eq!(selection.ingredients(), vec!["ghost-item", "rice"]);
    }

    #[test]
    fn test_unslotted_picks_do_not_collide() {
        let catalog = catalog();

        let selection = selection_from_picks(&catalog, &["mystery", "ghost-item"], false);
        assert_eq!(selection.ingredients(), vec!["ghost-item", "mystery"]);
        assert!(selection.slots().is_empty());

        let selection = selection_from_picks(&catalog, &["rice", "ghost-a", "ghost-b"], false);
        assert_eq!(selection.ingredients(), vec!["rice", "ghost-a", "ghost-b"]);
    }

    #[test]
    fn test_random_selection_fills_each_slot() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(7);
        let selection = random_selection(&catalog, &mut rng);
        assert_eq!(selection.len(), 2);

        let mut again = StdRng::seed_from_u64(7);
        assert_eq!(random_selection(&catalog, &mut again), selection);
    }
}

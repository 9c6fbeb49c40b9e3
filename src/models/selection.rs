use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// The ingredients a user has picked in the meal builder.
///
/// `Slotted` holds at most one ingredient per meal type, like a group of
/// radio buttons, plus any picks that have no meal type. `Free` is the
/// multi-select variant where each ingredient toggles independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum Selection {
    Slotted {
        slots: BTreeMap<String, String>,
        /// Picks without a meal type. They never replace each other.
        unslotted: BTreeSet<String>,
    },
    Free(BTreeSet<String>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::slotted()
    }
}

impl Selection {
    pub fn slotted() -> Self {
        Selection::Slotted {
            slots: BTreeMap::new(),
            unslotted: BTreeSet::new(),
        }
    }

    pub fn free() -> Self {
        Selection::Free(BTreeSet::new())
    }

    /// Choose `ingredient` for `meal_type`.
    ///
    /// In a slotted selection this replaces whatever the slot held. In a
    /// free selection the meal type is ignored and the ingredient is added.
    pub fn pick(&mut self, meal_type: &str, ingredient: &str) {
        match self {
            Selection::Slotted { slots, .. } => {
                slots.insert(meal_type.to_string(), ingredient.to_string());
            }
            Selection::Free(items) => {
                items.insert(ingredient.to_string());
            }
        }
    }

    /// Add an ingredient that belongs to no meal type.
    ///
    /// It sits beside the slots and is never replaced by a later pick.
    pub fn add_unslotted(&mut self, ingredient: &str) {
        match self {
            Selection::Slotted { unslotted, .. } => {
                unslotted.insert(ingredient.to_string());
            }
            Selection::Free(items) => {
                items.insert(ingredient.to_string());
            }
        }
    }

    /// Flip an ingredient in or out of a free selection.
    ///
    /// For a slotted selection, removes the ingredient from wherever it is
    /// held. Returns whether the ingredient is selected afterwards.
    pub fn toggle(&mut self, ingredient: &str) -> bool {
        match self {
            Selection::Free(items) => {
                if items.remove(ingredient) {
                    false
                } else {
                    items.insert(ingredient.to_string());
                    true
                }
            }
            Selection::Slotted { slots, unslotted } => {
                slots.retain(|_, chosen| chosen != ingredient);
                unslotted.remove(ingredient);
                false
            }
        }
    }

    /// Selected ingredient names: slots in slot order, then unslotted picks.
    pub fn ingredients(&self) -> Vec<&str> {
        match self {
            Selection::Slotted { slots, unslotted } => slots
                .values()
                .chain(unslotted.iter())
                .map(String::as_str)
                .collect(),
            Selection::Free(items) => items.iter().map(String::as_str).collect(),
        }
    }

    /// (meal type, ingredient) pairs; empty for free selections.
    pub fn slots(&self) -> Vec<(&str, &str)> {
        match self {
            Selection::Slotted { slots, .. } => slots
                .iter()
                .map(|(slot, item)| (slot.as_str(), item.as_str()))
                .collect(),
            Selection::Free(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::Slotted { slots, unslotted } => slots.len() + unslotted.len(),
            Selection::Free(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

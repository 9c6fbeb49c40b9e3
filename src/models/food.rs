use serde::{Deserialize, Serialize};

use crate::aggregate::normalize::capitalize_first;
use crate::models::measure::{optional_label, Measure};

/// One ingredient from the game dataset.
///
/// The dataset is a JSON object keyed by ingredient name, so `name` is filled
/// in by the loader rather than read from the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodEntry {
    #[serde(skip_deserializing)]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "optional_label")]
    pub kind: Option<String>,

    #[serde(default, deserialize_with = "optional_label")]
    pub meal_type: Option<String>,

    #[serde(rename = "AGROVOC_uri", default, deserialize_with = "optional_label")]
    pub agrovoc_uri: Option<String>,

    /// Mean daily consumption, g or mL per day.
    #[serde(default)]
    pub consumption: Measure,

    /// g CO₂eq per g or mL.
    #[serde(default)]
    pub carbon: Measure,

    /// Liters per kg or L.
    #[serde(default)]
    pub water: Measure,

    /// € per kg or L.
    #[serde(default)]
    pub cost: Measure,

    #[serde(default, deserialize_with = "optional_label")]
    pub image: Option<String>,

    #[serde(rename = "imageButton", default, deserialize_with = "optional_label")]
    pub image_button: Option<String>,

    #[serde(default, deserialize_with = "optional_label")]
    pub link: Option<String>,
}

impl FoodEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    pub fn with_footprint(
        mut self,
        carbon: impl Into<Measure>,
        water: impl Into<Measure>,
        cost: impl Into<Measure>,
    ) -> Self {
        self.carbon = carbon.into();
        self.water = water.into();
        self.cost = cost.into();
        self
    }

    /// Name with its first letter uppercased, as shown on buttons and titles.
    pub fn display_name(&self) -> String {
        capitalize_first(&self.name)
    }

    /// Canonical key for case-insensitive lookups.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// True when every carbon, water and cost figure is present.
    pub fn has_full_footprint(&self) -> bool {
        !self.carbon.is_missing() && !self.water.is_missing() && !self.cost.is_missing()
    }

    /// Basic validation: every present measure is non-negative.
    pub fn is_valid(&self) -> bool {
        [self.consumption, self.carbon, self.water, self.cost]
            .iter()
            .all(|m| m.value().is_none_or(|v| v >= 0.0))
    }
}

impl PartialEq for FoodEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FoodEntry {}

use std::ops::AddAssign;

use serde::Serialize;

use crate::models::{FoodEntry, Measure};

/// Running totals for a meal.
///
/// The dataset has no per-ingredient land figure, so the third axis of the
/// results panel is the cost column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ImpactTotal {
    /// g CO₂eq.
    pub co2: f64,
    /// Liters.
    pub water: f64,
    /// €.
    pub cost: f64,
}

impl ImpactTotal {
    pub fn new(co2: f64, water: f64, cost: f64) -> Self {
        Self { co2, water, cost }
    }

    /// Contribution of a single entry; missing measures add zero.
    pub fn of(entry: &FoodEntry) -> Self {
        Self {
            co2: entry.carbon.axis_value(),
            water: entry.water.axis_value(),
            cost: entry.cost.axis_value(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.co2 == 0.0 && self.water == 0.0 && self.cost == 0.0
    }
}

impl AddAssign for ImpactTotal {
    fn add_assign(&mut self, rhs: Self) {
        self.co2 += rhs.co2;
        self.water += rhs.water;
        self.cost += rhs.cost;
    }
}

/// One line of the meal results breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownItem {
    pub name: String,
    pub display_name: String,
    pub link: Option<String>,
    pub carbon: Measure,
    pub water: Measure,
}

/// Totals plus the per-ingredient breakdown shown under them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealSummary {
    pub total: ImpactTotal,
    pub breakdown: Vec<BreakdownItem>,
    /// Selected identifiers that are not in the dataset.
    pub skipped: Vec<String>,
}

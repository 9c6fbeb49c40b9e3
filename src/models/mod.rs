mod food;
mod impact;
mod measure;
mod rows;
mod selection;

pub use food::FoodEntry;
pub use impact::{BreakdownItem, ImpactTotal, MealSummary};
pub use measure::{clean_label, optional_label, Measure};
pub use rows::{EmissionRow, ItalyFoodRow, LandRow, WaterRow};
pub use selection::Selection;

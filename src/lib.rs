pub mod aggregate;
pub mod builder;
pub mod charts;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod report;

pub use error::{Result, TrueCostError};
pub use models::{FoodEntry, ImpactTotal, Measure, Selection};

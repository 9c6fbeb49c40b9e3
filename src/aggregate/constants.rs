use std::collections::HashMap;
use std::sync::LazyLock;

/// Group label for records whose category is absent.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Category that marks a non-food sector in the emissions dataset.
pub const OTHER_CATEGORY: &str = "Other";

/// Label of the stacked bar holding every food-sector emission.
pub const FOOD_EMISSIONS_LABEL: &str = "Food Emissions";

/// Text shown in place of a missing value.
pub const DATA_NOT_AVAILABLE: &str = "Data not available";

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;
pub const LITERS_PER_HECTOLITER: f64 = 100.0;
pub const LITERS_PER_DECILITER: f64 = 0.1;

/// Headroom above the largest radar axis value.
pub const RADAR_HEADROOM: f64 = 1.2;

/// Divisor applied to the water axis when sizing the radar scale.
pub const RADAR_WATER_SCALE_DIVISOR: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal builder
// ─────────────────────────────────────────────────────────────────────────────

/// Slots of the meal builder, in display order.
pub const MEAL_ORDER: [&str; 6] = [
    "First courses",
    "Extras",
    "Second courses",
    "Side dishes",
    "Drinks",
    "Desserts & Fruits",
];

/// Where an ingredient image sits on the plate, in percent of the plate box,
/// with its width in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatePosition {
    pub x: f64,
    pub y: f64,
    pub size: u32,
}

pub static PLATE_POSITIONS: LazyLock<HashMap<&'static str, PlatePosition>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("First courses", PlatePosition { x: 48.0, y: 60.0, size: 150 });
        m.insert("Extras", PlatePosition { x: 10.0, y: 10.0, size: 78 });
        m.insert("Second courses", PlatePosition { x: 77.0, y: 17.0, size: 100 });
        m.insert("Side dishes", PlatePosition { x: 85.0, y: 24.0, size: 85 });
        m.insert("Drinks", PlatePosition { x: 30.0, y: 10.0, size: 60 });
        m.insert("Desserts & Fruits", PlatePosition { x: 13.0, y: 33.0, size: 80 });
        m
    });

/// Get the plate position for a meal type.
pub fn plate_position(meal_type: &str) -> Option<PlatePosition> {
    PLATE_POSITIONS.get(meal_type).copied()
}

/// Popular foods interleaved with their lower-impact alternatives.
pub const ALTERNATIVE_ITEMS: [&str; 8] = [
    "cow milk",
    "soy milk",
    "chocolate",
    "bananas",
    "coffee",
    "orange juice",
    "beef",
    "salmon",
];

// ─────────────────────────────────────────────────────────────────────────────
// Chart mount points
// ─────────────────────────────────────────────────────────────────────────────

pub const MOUNT_MENU: &str = "menuContent";
pub const MOUNT_RADAR: &str = "impactRadarChart";
pub const MOUNT_EMISSIONS: &str = "emission-bar-chart";
pub const MOUNT_EMISSIONS_ZOOM: &str = "food-zoom-chart";
pub const MOUNT_WATER: &str = "svg3";
pub const MOUNT_LAND: &str = "svg4";
pub const MOUNT_POPULARITY: &str = "chartPopularity";
pub const MOUNT_FOOTPRINT: &str = "chartSix";
pub const MOUNT_ALTERNATIVES: &str = "chartSeven";
pub const MOUNT_SCATTER: &str = "chartEight";
pub const MOUNT_PLATE: &str = "ingredient-images";
pub const MOUNT_RESULTS: &str = "results-section";

use serde::Serialize;

use crate::aggregate::constants::{
    LITERS_PER_CUBIC_METER, LITERS_PER_DECILITER, LITERS_PER_HECTOLITER,
};
use crate::models::Measure;

/// Round to 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Volume units used when displaying water figures.
///
/// Water is stored in liters everywhere; other units are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeUnit {
    Liters,
    Deciliters,
    Hectoliters,
    CubicMeters,
}

impl VolumeUnit {
    /// Liters in one of this unit.
    pub fn liters_per_unit(self) -> f64 {
        match self {
            VolumeUnit::Liters => 1.0,
            VolumeUnit::Deciliters => LITERS_PER_DECILITER,
            VolumeUnit::Hectoliters => LITERS_PER_HECTOLITER,
            VolumeUnit::CubicMeters => LITERS_PER_CUBIC_METER,
        }
    }
}

/// Convert a volume in liters to `unit`.
#[inline]
pub fn liters_to(liters: f64, unit: VolumeUnit) -> f64 {
    liters / unit.liters_per_unit()
}

/// Convert a volume in `unit` back to liters.
#[inline]
pub fn to_liters(value: f64, unit: VolumeUnit) -> f64 {
    value * unit.liters_per_unit()
}

/// A display-ready value with an optional unit-converted companion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalized {
    pub value: f64,
    pub converted: Option<f64>,
}

/// Round a measure to 2 decimals, converting from liters when `unit` is set.
///
/// Returns `None` for a missing measure; callers decide whether that becomes
/// a zero on an axis or a "not available" label.
pub fn normalize(measure: Measure, unit: Option<VolumeUnit>) -> Option<Normalized> {
    let value = measure.value()?;
    Some(Normalized {
        value: round2(value),
        converted: unit.map(|u| round2(liters_to(value, u))),
    })
}

/// Format a number as a rounded integer with `,` thousands separators.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if negative { format!("-{}", out) } else { out }
}

/// Uppercase the first character, leave the rest as is.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn heading_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

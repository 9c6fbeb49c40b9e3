use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::aggregate::constants::DATA_NOT_AVAILABLE;

/// A numeric field that may be absent.
///
/// Missing, empty, `"NaN"`, non-numeric and non-finite inputs all become
/// `None`. The absent state is kept until a renderer picks between
/// [`Measure::axis_value`] and [`Measure::display`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measure(Option<f64>);

impl Measure {
    pub fn new(value: Option<f64>) -> Self {
        Self(value.filter(|v| v.is_finite()))
    }

    pub fn missing() -> Self {
        Self(None)
    }

    /// Parse a raw text cell. Leading and trailing whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        Self::new(raw.trim().parse::<f64>().ok())
    }

    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.0
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }

    /// Value for a chart axis: missing plots as zero.
    #[inline]
    pub fn axis_value(&self) -> f64 {
        self.0.unwrap_or(0.0)
    }

    /// Apply a conversion to a present value.
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        Self::new(self.0.map(f))
    }

    /// Text for display: two decimals, or the "not available" label.
    pub fn display(&self) -> String {
        match self.0 {
            Some(v) => format!("{:.2}", v),
            None => DATA_NOT_AVAILABLE.to_string(),
        }
    }

    /// Like [`Measure::display`] with a unit suffix on present values.
    pub fn display_with_unit(&self, unit: &str) -> String {
        match self.0 {
            Some(v) => format!("{:.2} {}", v, unit),
            None => DATA_NOT_AVAILABLE.to_string(),
        }
    }
}

impl From<f64> for Measure {
    fn from(value: f64) -> Self {
        Self::new(Some(value))
    }
}

impl From<Option<f64>> for Measure {
    fn from(value: Option<f64>) -> Self {
        Self::new(value)
    }
}

impl Serialize for Measure {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Measure {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(MeasureVisitor)
    }
}

struct MeasureVisitor;

impl<'de> Visitor<'de> for MeasureVisitor {
    type Value = Measure;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Measure, E> {
        Ok(Measure::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Measure, E> {
        Ok(Measure::from(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Measure, E> {
        Ok(Measure::from(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Measure, E> {
        Ok(Measure::parse(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> std::result::Result<Measure, E> {
        Ok(Measure::missing())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Measure, E> {
        Ok(Measure::missing())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Measure, E> {
        Ok(Measure::missing())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Measure, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Measure, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(Measure::missing())
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> std::result::Result<Measure, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(Measure::missing())
    }
}

/// Normalize a raw categorical label.
///
/// Empty text and the `"NaN"` placeholder written by the dataset export
/// both mean "no label".
pub fn clean_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Serde helper for optional text fields that tolerates numbers and nulls.
pub fn optional_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    deserializer.deserialize_any(LabelVisitor)
}

struct LabelVisitor;

impl<'de> Visitor<'de> for LabelVisitor {
    type Value = Option<String>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a number, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Self::Value, E> {
        Ok(clean_label(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Self::Value, E> {
        Ok(v.is_finite().then(|| v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<Self::Value, E> {
        Ok(Some(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Self::Value, D::Error> {
        d.deserialize_any(self)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(None)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(None)
    }
}

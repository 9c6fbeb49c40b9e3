use serde::Serialize;

use crate::aggregate::{percent_shares, sum_by, GroupSum};
use crate::models::{LandRow, Measure, WaterRow};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    /// Missing only when every row behind the slice lacked a value.
    pub value: Measure,
    pub percent: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
    pub total: f64,
}

fn pie_from(sums: impl IntoIterator<Item = (String, GroupSum)>) -> PieChart {
    let sums: Vec<(String, GroupSum)> = sums.into_iter().collect();
    let values: Vec<f64> = sums.iter().map(|(_, s)| s.total).collect();
    let percents = percent_shares(&values);

    let slices = sums
        .into_iter()
        .zip(percents)
        .map(|((label, sum), percent)| PieSlice {
            label,
            value: if sum.all_missing() {
                Measure::missing()
            } else {
                Measure::from(sum.total)
            },
            percent,
        })
        .collect();

    PieChart {
        slices,
        total: values.iter().sum(),
    }
}

/// Global water withdrawal by sector.
pub fn water_shares(rows: &[WaterRow]) -> PieChart {
    pie_from(sum_by(rows, |r| r.variable.as_deref(), |r| r.value))
}

/// Land use by AGROVOC label.
pub fn land_shares(rows: &[LandRow]) -> PieChart {
    pie_from(sum_by(rows, |r| r.label.as_deref(), |r| r.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water(variable: &str, value: Measure) -> WaterRow {
        WaterRow {
            variable: Some(variable.to_string()),
            value,
        }
    }

    #[test]
    fn test_water_percentages() {
        let rows = vec![
            water("Agricultural water withdrawal", 2769.0.into()),
            water("Industrial water withdrawal", 768.0.into()),
            water("Municipal water withdrawal", 464.0.into()),
        ];
        let pie = water_shares(&rows);
        let percents: Vec<u32> = pie.slices.iter().map(|s| s.percent).collect();
        assert_eq!(percents, vec![69, 19, 12]);
        assert_eq!(pie.total, 4001.0);
    }

    #[test]
    fn test_missing_value_slice_keeps_flag() {
        let rows = vec![
            LandRow { label: Some("agriculture".into()), value: 10.0.into() },
            LandRow { label: Some("forest land".into()), value: Measure::missing() },
            LandRow { label: None, value: 30.0.into() },
        ];
        let pie = land_shares(&rows);
        let forest = pie.slices.iter().find(|s| s.label == "forest land").unwrap();
        assert!(forest.value.is_missing());
        assert_eq!(forest.percent, 0);

        let unknown = pie.slices.iter().find(|s| s.label == "Unknown").unwrap();
        assert_eq!(unknown.percent, 75);
    }

    #[test]
    fn test_zero_total_pie() {
        let rows = vec![water("a", 0.0.into()), water("b", 0.0.into())];
        let pie = water_shares(&rows);
        assert!(pie.slices.iter().all(|s| s.percent == 0));
    }
}

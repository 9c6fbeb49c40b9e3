pub mod accumulate;
pub mod constants;
pub mod grouping;
pub mod normalize;
pub mod percent;

pub use accumulate::{accumulate, summarize_meal};
pub use grouping::{
    group_by, group_by_sorted, group_with_fallback, sum_by, sum_with_fallback, GroupSum,
};
pub use normalize::{
    capitalize_first, format_thousands, heading_case, liters_to, normalize, round2, to_liters,
    Normalized, VolumeUnit,
};
pub use percent::{percent_of_total, percent_shares};

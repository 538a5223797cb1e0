//! Fixed values shared by the processing pipeline and the dashboard.

use std::ops::RangeInclusive;

/// `Traveller characteristics` value kept by the relevance filter.
pub const TRAVELLER_CHARACTERISTIC: &str = "Total non resident tourists";

/// `Seasonal adjustment` value kept by the relevance filter.
pub const SEASONAL_ADJUSTMENT: &str = "Unadjusted";

/// First character a `REF_DATE` must carry to be kept (years 2000–2999).
pub const DECADE_MARKER: char = '2';

/// Base year that two-digit year offsets count from.
pub const BASE_YEAR: u32 = 2000;

/// Maximum number of records a monthly slice collects before the scan stops.
///
/// Assumes at most one record per region per month, so it must never be
/// smaller than the region set.
pub const MONTHLY_SLICE_CAPACITY: usize = 12;

/// Short month labels, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Years offered by the year selector when no dataset narrows the choice.
pub const YEAR_RANGE: RangeInclusive<u32> = 2000..=2019;

/// Year offset selected on start-up (2010).
pub const DEFAULT_YEAR_OFFSET: u32 = 10;

/// Month selected on start-up (July).
pub const DEFAULT_MONTH: u32 = 7;

/// Lower bounds of the visitor-count buckets used to colour regions.
pub const VISITOR_THRESHOLDS: [u64; 11] = [
    0, 500, 5_000, 10_000, 50_000, 100_000, 300_000, 700_000, 1_000_000, 1_300_000, 1_700_000,
];

/// Blue ramp paired with [`VISITOR_THRESHOLDS`] (one more colour than bounds).
pub const VISITOR_COLORS: [&str; 12] = [
    "#ffffff", "#f7fbff", "#e3eef9", "#cfe1f2", "#b5d4e9", "#93c3df", "#6daed5", "#4b97c9",
    "#2f7ebc", "#1864aa", "#0a4a90", "#08306b",
];

/// Categorical palette applied by rank position to bars and shares.
pub const RANK_PALETTE: [&str; 12] = [
    "#4a58dd", "#2f9df5", "#27d7c4", "#4df884", "#95fb51", "#dedd32", "#ffa423", "#f65f18",
    "#ba2208", "#900c00", "#bf3caf", "#fe4b83",
];

/// Region drawn on the map without a data series of its own.
pub const UNTRACKED_REGION: &str = "Northwest Territories";

/// Share (in whole percent) a region must exceed to get a label.
pub const SHARE_LABEL_MIN_PERCENT: u32 = 3;

/// Return the short label for a 1-based month, or `None` outside 1–12.
pub fn month_label(month: u32) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_LABELS[(month - 1) as usize]),
        _ => None,
    }
}

/// Convert a two-digit year offset to a calendar year.
pub fn year_from_offset(offset: u32) -> u32 {
    BASE_YEAR + offset
}

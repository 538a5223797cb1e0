use std::cmp::Reverse;

use tracing::debug;

use crate::constants::{
    DECADE_MARKER, MONTHLY_SLICE_CAPACITY, SEASONAL_ADJUSTMENT, TRAVELLER_CHARACTERISTIC,
};
use crate::error::{DashboardError, PeriodParseError};
use crate::models::{Province, TouristRecord};
use crate::period::RefPeriod;

// ── DataProcessor ─────────────────────────────────────────────────────────────

/// Stateless filtering, validation and aggregation over tourism records.
///
/// Every operation is a pure function of its input. Malformed records are
/// excluded or reported through the return value; nothing here panics on
/// well-typed input.
pub struct DataProcessor;

impl DataProcessor {
    /// Keep the records that describe unadjusted non-resident totals for a
    /// tracked region in the 2000s.
    ///
    /// Input order is preserved and duplicates are kept.
    pub fn filter_relevant_data(records: &[TouristRecord]) -> Vec<TouristRecord> {
        records
            .iter()
            .filter(|r| Self::is_relevant(r))
            .cloned()
            .collect()
    }

    /// `true` when every record has a date, a region and a value, and the
    /// value parses as an integer. Stops at the first failing record.
    pub fn validate_data(records: &[TouristRecord]) -> bool {
        records.iter().all(Self::is_valid)
    }

    /// Position and reason of the first record [`Self::validate_data`] rejects.
    pub fn first_invalid(records: &[TouristRecord]) -> Option<(usize, String)> {
        records.iter().enumerate().find_map(|(i, r)| {
            if r.ref_date.is_empty() {
                Some((i, "empty REF_DATE".to_string()))
            } else if r.geo.is_empty() {
                Some((i, "empty GEO".to_string()))
            } else if r.value.is_empty() {
                Some((i, "empty VALUE".to_string()))
            } else if r.visitors().is_none() {
                Some((i, format!("VALUE {:?} is not an integer", r.value)))
            } else {
                None
            }
        })
    }

    /// Records for one (year offset, month) pair, in input order.
    ///
    /// The scan stops as soon as [`MONTHLY_SLICE_CAPACITY`] matches are
    /// collected, so more than one record per region per month truncates the
    /// result.
    pub fn get_monthly_data(
        records: &[TouristRecord],
        year: u32,
        month: u32,
    ) -> Vec<TouristRecord> {
        Self::get_monthly_data_with_capacity(records, year, month, MONTHLY_SLICE_CAPACITY)
    }

    /// [`Self::get_monthly_data`] with an explicit early-exit capacity.
    pub fn get_monthly_data_with_capacity(
        records: &[TouristRecord],
        year: u32,
        month: u32,
        capacity: usize,
    ) -> Vec<TouristRecord> {
        let mut monthly = Vec::with_capacity(capacity.min(records.len()));
        if capacity == 0 {
            return monthly;
        }

        for record in records {
            let matches = RefPeriod::parse(&record.ref_date)
                .map(|p| p.matches(year, month))
                .unwrap_or(false);
            if matches {
                monthly.push(record.clone());
                if monthly.len() == capacity {
                    debug!(year, month, capacity, "monthly slice full; stopping scan");
                    break;
                }
            }
        }

        monthly
    }

    /// New sequence ordered by descending visitor count.
    ///
    /// The sort is stable: equal values keep their input order. Values that
    /// do not parse rank as zero.
    pub fn sort_by_value(records: &[TouristRecord]) -> Vec<TouristRecord> {
        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| Reverse(r.visitors().unwrap_or(0)));
        sorted
    }

    /// Sum of visitor counts; unparseable values contribute nothing.
    ///
    /// Saturates at `u64::MAX` rather than overflowing.
    pub fn calculate_total_visitors(records: &[TouristRecord]) -> u64 {
        records
            .iter()
            .filter_map(TouristRecord::visitors)
            .fold(0u64, |acc, v| acc.saturating_add(v))
    }

    /// Two-digit year offset of a `REF_DATE` value.
    pub fn extract_year(date: &str) -> Result<u32, PeriodParseError> {
        RefPeriod::parse(date).map(|p| p.year_offset())
    }

    /// Month (1–12) of a `REF_DATE` value.
    pub fn extract_month(date: &str) -> Result<u32, PeriodParseError> {
        RefPeriod::parse(date).map(|p| p.month)
    }

    /// Ensure a monthly slice of `capacity` can hold every tracked region.
    pub fn check_region_capacity(capacity: usize) -> Result<(), DashboardError> {
        let regions = Province::ALL.len();
        if capacity < regions {
            return Err(DashboardError::RegionCapacity { capacity, regions });
        }
        Ok(())
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn is_relevant(record: &TouristRecord) -> bool {
        record.province().is_some()
            && record.traveller_characteristics == TRAVELLER_CHARACTERISTIC
            && record.seasonal_adjustment == SEASONAL_ADJUSTMENT
            && record.ref_date.starts_with(DECADE_MARKER)
    }

    fn is_valid(record: &TouristRecord) -> bool {
        !record.ref_date.is_empty()
            && !record.geo.is_empty()
            && !record.value.is_empty()
            && record.visitors().is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(date: &str, geo: &str, value: &str) -> TouristRecord {
        TouristRecord::new(date, geo, value, TRAVELLER_CHARACTERISTIC, SEASONAL_ADJUSTMENT)
    }

    fn full_month(date: &str) -> Vec<TouristRecord> {
        Province::ALL
            .iter()
            .enumerate()
            .map(|(i, p)| rec(date, p.name(), &((i as u64 + 1) * 1_000).to_string()))
            .collect()
    }

    // ── filter_relevant_data ──────────────────────────────────────────────────

    #[test]
    fn test_filter_keeps_matching_records_in_order() {
        let input = vec![
            rec("2010-07", "Quebec", "300000"),
            rec("2010-07", "Ontario", "500000"),
        ];
        let out = DataProcessor::filter_relevant_data(&input);
        assert_eq!(out, input);
    }

    #[test]
    fn test_filter_rejects_each_predicate() {
        let mut wrong_char = rec("2010-07", "Ontario", "1");
        wrong_char.traveller_characteristics = "United States residents entering Canada".into();
        let mut adjusted = rec("2010-07", "Ontario", "1");
        adjusted.seasonal_adjustment = "Seasonally adjusted".into();
        let input = vec![
            rec("2010-07", "Canada", "1"),
            rec("2010-07", "Northwest Territories", "1"),
            wrong_char,
            adjusted,
            rec("1999-07", "Ontario", "1"),
            rec("", "Ontario", "1"),
        ];
        assert!(DataProcessor::filter_relevant_data(&input).is_empty());
    }

    #[test]
    fn test_filter_keeps_duplicates_and_malformed_values() {
        let input = vec![
            rec("2010-07", "Ontario", "1"),
            rec("2010-07", "Ontario", "1"),
            rec("2010-07", "Yukon", "abc"),
        ];
        let out = DataProcessor::filter_relevant_data(&input);
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_filter_output_satisfies_all_predicates() {
        let mut input = full_month("2010-07");
        input.push(rec("1985-01", "Ontario", "5"));
        let mut other = rec("2010-07", "Alberta", "5");
        other.seasonal_adjustment = "Seasonally adjusted".into();
        input.push(other);

        for r in DataProcessor::filter_relevant_data(&input) {
            assert!(r.province().is_some());
            assert_eq!(r.traveller_characteristics, TRAVELLER_CHARACTERISTIC);
            assert_eq!(r.seasonal_adjustment, SEASONAL_ADJUSTMENT);
            assert!(r.ref_date.starts_with('2'));
        }
    }

    // ── validate_data ─────────────────────────────────────────────────────────

    #[test]
    fn test_validate_accepts_well_formed_batch() {
        assert!(DataProcessor::validate_data(&full_month("2010-07")));
    }

    #[test]
    fn test_validate_empty_batch_is_true() {
        assert!(DataProcessor::validate_data(&[]));
    }

    #[test]
    fn test_validate_single_bad_value_fails_batch() {
        let mut batch = full_month("2010-07");
        batch.push(rec("2010-07", "Ontario", "abc"));
        assert!(!DataProcessor::validate_data(&batch));
    }

    #[test]
    fn test_validate_empty_fields_fail() {
        assert!(!DataProcessor::validate_data(&[rec("", "Ontario", "1")]));
        assert!(!DataProcessor::validate_data(&[rec("2010-07", "", "1")]));
        assert!(!DataProcessor::validate_data(&[rec("2010-07", "Ontario", "")]));
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let batch = vec![rec("2010-07", "Ontario", "abc")];
        let copy = batch.clone();
        DataProcessor::validate_data(&batch);
        assert_eq!(batch, copy);
    }

    #[test]
    fn test_first_invalid_reports_position() {
        let batch = vec![
            rec("2010-07", "Ontario", "1"),
            rec("2010-07", "Quebec", "abc"),
        ];
        let (idx, reason) = DataProcessor::first_invalid(&batch).unwrap();
        assert_eq!(idx, 1);
        assert!(reason.contains("abc"));
        assert!(DataProcessor::first_invalid(&batch[..1]).is_none());
    }

    // ── get_monthly_data ──────────────────────────────────────────────────────

    #[test]
    fn test_monthly_returns_only_matching_period() {
        let mut data = full_month("2010-06");
        data.extend(full_month("2010-07"));
        data.extend(full_month("2011-07"));

        let july = DataProcessor::get_monthly_data(&data, 10, 7);
        assert_eq!(july.len(), 12);
        assert!(july.iter().all(|r| r.ref_date == "2010-07"));
    }

    #[test]
    fn test_monthly_returns_fewer_when_fewer_exist() {
        let data = vec![
            rec("2010-07", "Ontario", "500000"),
            rec("2010-08", "Ontario", "1"),
            rec("2010-07", "Quebec", "300000"),
        ];
        let july = DataProcessor::get_monthly_data(&data, 10, 7);
        assert_eq!(july.len(), 2);
        assert_eq!(july[0].geo, "Ontario");
        assert_eq!(july[1].geo, "Quebec");
    }

    #[test]
    fn test_monthly_empty_for_missing_period() {
        let data = full_month("2010-07");
        assert!(DataProcessor::get_monthly_data(&data, 12, 1).is_empty());
        assert!(DataProcessor::get_monthly_data(&[], 10, 7).is_empty());
    }

    #[test]
    fn test_monthly_stops_at_capacity() {
        let mut data = full_month("2010-07");
        // A thirteenth record for the same month is silently dropped.
        data.push(rec("2010-07", "Ontario", "999"));
        let july = DataProcessor::get_monthly_data(&data, 10, 7);
        assert_eq!(july.len(), MONTHLY_SLICE_CAPACITY);
        assert!(july.iter().all(|r| r.value != "999"));
    }

    #[test]
    fn test_monthly_capacity_override() {
        let data = full_month("2010-07");
        assert_eq!(
            DataProcessor::get_monthly_data_with_capacity(&data, 10, 7, 3).len(),
            3
        );
        assert!(DataProcessor::get_monthly_data_with_capacity(&data, 10, 7, 0).is_empty());
    }

    #[test]
    fn test_monthly_skips_unparseable_dates() {
        let data = vec![rec("2010-7", "Ontario", "1"), rec("2010-07", "Quebec", "2")];
        let july = DataProcessor::get_monthly_data(&data, 10, 7);
        assert_eq!(july.len(), 1);
        assert_eq!(july[0].geo, "Quebec");
    }

    #[test]
    fn test_monthly_accepts_day_suffix() {
        let data = vec![rec("2010-07-01", "Ontario", "1")];
        assert_eq!(DataProcessor::get_monthly_data(&data, 10, 7).len(), 1);
    }

    // ── sort_by_value ─────────────────────────────────────────────────────────

    #[test]
    fn test_sort_descending() {
        let data = vec![
            rec("2010-07", "Quebec", "300000"),
            rec("2010-07", "Ontario", "500000"),
            rec("2010-07", "Yukon", "1000"),
        ];
        let sorted = DataProcessor::sort_by_value(&data);
        let geos: Vec<&str> = sorted.iter().map(|r| r.geo.as_str()).collect();
        assert_eq!(geos, ["Ontario", "Quebec", "Yukon"]);
        // Input untouched.
        assert_eq!(data[0].geo, "Quebec");
    }

    #[test]
    fn test_sort_is_stable_for_equal_values() {
        let data = vec![
            rec("2010-07", "Yukon", "10"),
            rec("2010-07", "Nunavut", "10"),
            rec("2010-07", "Ontario", "20"),
            rec("2010-07", "Manitoba", "10"),
        ];
        let sorted = DataProcessor::sort_by_value(&data);
        let geos: Vec<&str> = sorted.iter().map(|r| r.geo.as_str()).collect();
        assert_eq!(geos, ["Ontario", "Yukon", "Nunavut", "Manitoba"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let data = full_month("2010-07");
        let once = DataProcessor::sort_by_value(&data);
        let twice = DataProcessor::sort_by_value(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_ranks_unparseable_last() {
        let data = vec![rec("2010-07", "Yukon", "abc"), rec("2010-07", "Ontario", "1")];
        let sorted = DataProcessor::sort_by_value(&data);
        assert_eq!(sorted[0].geo, "Ontario");
    }

    // ── calculate_total_visitors ──────────────────────────────────────────────

    #[test]
    fn test_total_empty_is_zero() {
        assert_eq!(DataProcessor::calculate_total_visitors(&[]), 0);
    }

    #[test]
    fn test_total_is_additive() {
        let a = full_month("2010-07");
        let b = vec![rec("2010-08", "Ontario", "123"), rec("2010-08", "Yukon", "7")];
        let mut joined = a.clone();
        joined.extend(b.clone());
        assert_eq!(
            DataProcessor::calculate_total_visitors(&joined),
            DataProcessor::calculate_total_visitors(&a)
                + DataProcessor::calculate_total_visitors(&b)
        );
    }

    #[test]
    fn test_total_full_month() {
        // 1_000 + 2_000 + ... + 12_000
        assert_eq!(
            DataProcessor::calculate_total_visitors(&full_month("2010-07")),
            78_000
        );
    }

    #[test]
    fn test_total_saturates_on_huge_counts() {
        let records = vec![
            rec("2010-07", "Ontario", "18446744073709551615"),
            rec("2010-07", "Quebec", "1"),
        ];
        assert!(DataProcessor::validate_data(&records));
        assert_eq!(DataProcessor::calculate_total_visitors(&records), u64::MAX);
    }

    // ── extract_year / extract_month ──────────────────────────────────────────

    #[test]
    fn test_extract_year_and_month() {
        assert_eq!(DataProcessor::extract_year("2010-07").unwrap(), 10);
        assert_eq!(DataProcessor::extract_month("2010-07").unwrap(), 7);
        assert_eq!(DataProcessor::extract_month("2003-11-01").unwrap(), 11);
    }

    #[test]
    fn test_extract_fails_on_short_input() {
        assert!(DataProcessor::extract_year("2010-0").is_err());
        assert!(DataProcessor::extract_month("").is_err());
    }

    // ── check_region_capacity ─────────────────────────────────────────────────

    #[test]
    fn test_default_capacity_covers_regions() {
        assert!(DataProcessor::check_region_capacity(MONTHLY_SLICE_CAPACITY).is_ok());
    }

    #[test]
    fn test_small_capacity_rejected() {
        let err = DataProcessor::check_region_capacity(5).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::RegionCapacity {
                capacity: 5,
                regions: 12
            }
        ));
    }

    // ── end to end ────────────────────────────────────────────────────────────

    #[test]
    fn test_ontario_quebec_scenario() {
        let raw = vec![
            rec("2010-07", "Ontario", "500000"),
            rec("2010-07", "Quebec", "300000"),
        ];
        let filtered = DataProcessor::filter_relevant_data(&raw);
        assert!(DataProcessor::validate_data(&filtered));

        let monthly = DataProcessor::get_monthly_data(&filtered, 10, 7);
        assert_eq!(monthly.len(), 2);

        let sorted = DataProcessor::sort_by_value(&monthly);
        assert_eq!(sorted[0].geo, "Ontario");
        assert_eq!(sorted[1].geo, "Quebec");

        assert_eq!(DataProcessor::calculate_total_visitors(&monthly), 800_000);
    }
}

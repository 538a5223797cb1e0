//! Load-once data context shared by every view.
//!
//! [`DataContext`] is built exactly once by the application entry point and
//! handed to consumers by reference. After construction it is immutable, so
//! any number of readers may use it without synchronisation.

use std::collections::BTreeSet;
use std::path::Path;

use tourism_core::constants::MONTHLY_SLICE_CAPACITY;
use tourism_core::data_processor::DataProcessor;
use tourism_core::error::{DashboardError, Result};
use tourism_core::models::TouristRecord;
use tourism_core::period::RefPeriod;

use crate::reader;
use crate::summary::MonthlySummary;

// ── DataContext ───────────────────────────────────────────────────────────────

/// The raw dataset plus its filtered, validated subset.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use tourism_data::context::DataContext;
///
/// let ctx = DataContext::load(Path::new("data/travel_province_data.csv")).unwrap();
/// println!("July 2010: {}", ctx.total_visitors(10, 7));
/// ```
#[derive(Debug, Clone)]
pub struct DataContext {
    /// Every record read from disk, untouched.
    raw: Vec<TouristRecord>,
    /// Records that passed the relevance filter.
    filtered: Vec<TouristRecord>,
    /// Early-exit cap for monthly slices.
    slice_capacity: usize,
}

impl DataContext {
    /// Read `path` (file or directory) and run the filter/validate pipeline.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::info!("Loading tourism data from {}", path.display());
        let raw = reader::load_records(path)?;
        Self::from_records(raw)
    }

    /// Run the filter/validate pipeline over records already in memory.
    ///
    /// Fails with [`DashboardError::InvalidDataset`] when any filtered record
    /// is malformed.
    pub fn from_records(raw: Vec<TouristRecord>) -> Result<Self> {
        DataProcessor::check_region_capacity(MONTHLY_SLICE_CAPACITY)?;

        let filtered = DataProcessor::filter_relevant_data(&raw);

        if !DataProcessor::validate_data(&filtered) {
            let reason = DataProcessor::first_invalid(&filtered)
                .map(|(idx, why)| format!("filtered record {idx}: {why}"))
                .unwrap_or_else(|| "dataset failed validation".to_string());
            tracing::error!(%reason, "tourism dataset rejected");
            return Err(DashboardError::InvalidDataset { reason });
        }

        tracing::info!(
            raw = raw.len(),
            filtered = filtered.len(),
            "tourism dataset ready"
        );

        Ok(Self {
            raw,
            filtered,
            slice_capacity: MONTHLY_SLICE_CAPACITY,
        })
    }

    /// Override the monthly early-exit cap.
    ///
    /// Rejected when the cap could not hold one record per tracked region.
    pub fn with_slice_capacity(mut self, capacity: usize) -> Result<Self> {
        DataProcessor::check_region_capacity(capacity)?;
        self.slice_capacity = capacity;
        Ok(self)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Records for one (year offset, month) pair, in dataset order.
    pub fn monthly_data(&self, year: u32, month: u32) -> Vec<TouristRecord> {
        DataProcessor::get_monthly_data_with_capacity(
            &self.filtered,
            year,
            month,
            self.slice_capacity,
        )
    }

    /// [`Self::monthly_data`] ordered by descending visitor count.
    pub fn sorted_monthly_data(&self, year: u32, month: u32) -> Vec<TouristRecord> {
        DataProcessor::sort_by_value(&self.monthly_data(year, month))
    }

    /// Total visitors for one (year offset, month) pair; `0` when no data.
    pub fn total_visitors(&self, year: u32, month: u32) -> u64 {
        DataProcessor::calculate_total_visitors(&self.monthly_data(year, month))
    }

    /// Presentation snapshot for one (year offset, month) pair.
    pub fn summary(&self, year: u32, month: u32) -> MonthlySummary {
        MonthlySummary::build(
            RefPeriod::from_offset(year, month),
            self.sorted_monthly_data(year, month),
        )
    }

    /// Distinct year offsets present in the filtered dataset, ascending.
    pub fn available_years(&self) -> Vec<u32> {
        self.filtered
            .iter()
            .filter_map(|r| DataProcessor::extract_year(&r.ref_date).ok())
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect()
    }

    /// `true` once at least one relevant record is available.
    pub fn is_data_loaded(&self) -> bool {
        !self.filtered.is_empty()
    }

    /// Every record read from the source.
    pub fn raw_data(&self) -> &[TouristRecord] {
        &self.raw
    }

    /// Records that passed the relevance filter.
    pub fn filtered_data(&self) -> &[TouristRecord] {
        &self.filtered
    }

    /// Current monthly early-exit cap.
    pub fn slice_capacity(&self) -> usize {
        self.slice_capacity
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

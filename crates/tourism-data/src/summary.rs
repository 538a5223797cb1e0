//! Presentation-ready snapshot of a single month.

use std::collections::HashMap;

use serde::Serialize;
use tourism_core::color_scale::{rank_color, ThresholdScale};
use tourism_core::constants::{
    month_label, SHARE_LABEL_MIN_PERCENT, UNTRACKED_REGION, VISITOR_COLORS,
};
use tourism_core::data_processor::DataProcessor;
use tourism_core::formatting::{format_count, share_percent};
use tourism_core::models::{Province, TouristRecord};
use tourism_core::period::RefPeriod;

// ── RegionShare ───────────────────────────────────────────────────────────────

/// One region's slice of the monthly total, in rank order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionShare {
    pub region: String,
    pub visitors: u64,
    /// Whole-percent share of the monthly total.
    pub percent: u32,
    /// `"NN%"`, only when the share is large enough to label.
    pub label: Option<String>,
    /// Categorical colour for this rank.
    pub color: &'static str,
}

// ── RegionFill ────────────────────────────────────────────────────────────────

/// Map colouring for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionFill {
    pub region: String,
    /// `None` when the month has no record for the region.
    pub visitors: Option<u64>,
    pub color: &'static str,
}

// ── MonthlySummary ────────────────────────────────────────────────────────────

/// Everything the dashboard shows for one (year, month).
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub period: RefPeriod,
    /// Monthly slice, descending by visitors.
    pub records: Vec<TouristRecord>,
    pub total: u64,
    pub caption: String,
    pub shares: Vec<RegionShare>,
    pub fills: Vec<RegionFill>,
}

impl MonthlySummary {
    /// Derive shares, fills and caption from an already sorted slice.
    pub fn build(period: RefPeriod, sorted: Vec<TouristRecord>) -> Self {
        let total = DataProcessor::calculate_total_visitors(&sorted);

        let shares = sorted
            .iter()
            .enumerate()
            .map(|(rank, r)| {
                let visitors = r.visitors().unwrap_or(0);
                let percent = share_percent(visitors, total);
                RegionShare {
                    region: r.geo.clone(),
                    visitors,
                    percent,
                    label: (percent > SHARE_LABEL_MIN_PERCENT).then(|| format!("{percent}%")),
                    color: rank_color(rank),
                }
            })
            .collect();

        let fills = Self::region_fills(&sorted);
        let caption = caption_for(period, total);

        Self {
            period,
            records: sorted,
            total,
            caption,
            shares,
            fills,
        }
    }

    /// `true` when the month has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Hover text for the region at `rank`, e.g.
    /// `"Ontario on 2010-07 | 500,000 persons | 61%"`.
    ///
    /// `None` when `rank` is past the end of the slice.
    pub fn tooltip(&self, rank: usize) -> Option<String> {
        let record = self.records.get(rank)?;
        let percent = self.shares.get(rank).map_or(0, |s| s.percent);
        Some(format!(
            "{} on {} | {} persons | {}%",
            record.geo,
            record.ref_date,
            format_count(record.visitors().unwrap_or(0)),
            percent
        ))
    }

    /// Canonical region order, followed by the untracked region at zero.
    fn region_fills(sorted: &[TouristRecord]) -> Vec<RegionFill> {
        let scale = ThresholdScale::visitors();
        let by_region: HashMap<&str, u64> = sorted
            .iter()
            .map(|r| (r.geo.as_str(), r.visitors().unwrap_or(0)))
            .collect();

        let mut fills: Vec<RegionFill> = Province::ALL
            .iter()
            .map(|p| {
                let visitors = by_region.get(p.name()).copied();
                RegionFill {
                    region: p.name().to_string(),
                    visitors,
                    color: visitors.map_or(VISITOR_COLORS[0], |v| scale.color_for(v)),
                }
            })
            .collect();

        fills.push(RegionFill {
            region: UNTRACKED_REGION.to_string(),
            visitors: Some(0),
            color: scale.color_for(0),
        });
        fills
    }
}

/// `"800,000 Tourists Have Visited Canada on Jul 2010"`.
pub fn caption_for(period: RefPeriod, total: u64) -> String {
    format!(
        "{} Tourists Have Visited Canada on {} {}",
        format_count(total),
        month_label(period.month).unwrap_or("?"),
        period.year
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

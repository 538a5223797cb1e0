//! Data layer for the tourism dashboard.
//!
//! Discovers and reads the StatCan tourism CSV export, runs it through the
//! filtering and validation pipeline once, and exposes the result through a
//! read-only [`context::DataContext`] plus presentation-ready
//! [`summary::MonthlySummary`] snapshots.

pub mod context;
pub mod reader;
pub mod summary;

pub use tourism_core as core;

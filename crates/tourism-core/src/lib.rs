//! Domain layer for the tourism dashboard.
//!
//! Holds the record and region types, the reference-date contract, the
//! stateless [`data_processor::DataProcessor`] pipeline, colour scales,
//! number formatting, CLI settings and the shared error type.

pub mod color_scale;
pub mod constants;
pub mod data_processor;
pub mod error;
pub mod formatting;
pub mod models;
pub mod period;
pub mod settings;

//! Terminal UI layer for the tourism dashboard.
//!
//! Provides themes, the header and bar components, the monthly dashboard view,
//! and the application event loop built on top of [`ratatui`].

pub mod app;
pub mod components;
pub mod dashboard_view;
pub mod themes;

pub use tourism_data as data;

//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed dashboard with:
//! - Patient feature input form
//! - On-demand risk prediction
//! - Dataset exploration charts

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ClinicalTheme;

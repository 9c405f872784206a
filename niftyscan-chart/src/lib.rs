//! Terminal bar chart of the day's top gainers and losers.
//!
//! - `MoversChart` renders the two series into any ratatui buffer
//! - `show_movers` runs it full screen until dismissed

pub mod movers_chart;
pub mod theme;
pub mod viewer;

pub use movers_chart::MoversChart;
pub use theme::Theme;
pub use viewer::show_movers;

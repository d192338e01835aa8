//! statboard: backend-agnostic chart adapters for a repost-statistics
//! dashboard.
//!
//! The crate turns header-plus-rows tables and a small set of display options
//! into draw requests against an injected charting backend. Pie charts derive
//! their background from the target surface so they blend with the page;
//! column charts compose a fixed option set with optional legend and
//! stacking. Dataset shape policing, layout, and drawing all belong to the
//! backend; adapter code only composes options and propagates errors.

pub mod charts;
pub mod dashboard;
pub mod error;
pub mod render;
pub mod surface;
pub mod table;
pub mod telemetry;

pub use charts::{ChartOptions, ColumnChartRenderer, ColumnStyle, PieChartRenderer};
pub use error::{ChartError, ChartResult};

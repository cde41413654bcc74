//! nav-chart: interactive NAV history chart engine.
//!
//! Turns an irregular series of (date, value) samples into a smoothed stroke
//! and fill, resolves pointer positions to the nearest plotted sample, and
//! derives human-friendly axis ticks. A small growth calculator rides along
//! for projected-return readouts.
//!
//! Everything here is synchronous and pure apart from the [`api::NavChart`]
//! facade, which memoizes derived geometry per (series, viewport).

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{NavChart, NavChartConfig};
pub use error::{ChartError, ChartResult};

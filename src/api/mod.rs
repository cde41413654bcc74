mod data_controller;
mod engine;
mod engine_config;
mod interaction_controller;
pub mod label_format;
mod nav_frame;
mod observer_registry;
mod render_coordinator;
mod render_style;
mod return_calculator;
mod selection;
mod validation;

pub use engine::NavChart;
pub use engine_config::{NavChartConfig, ReturnCalculatorConfig, TooltipLayout};
pub use nav_frame::{FrameKey, NavFrame};
pub use render_style::RenderStyle;
pub use return_calculator::{ProjectionLabels, ReturnCalculator};
pub use selection::{SelectionView, date_label, tooltip_left};

pub mod axis_scale;
pub mod curve;
pub mod growth;
pub mod mapper;
pub mod primitives;
pub mod reduce;
pub mod sample;
pub mod types;
pub mod windowing;

pub use axis_scale::{AxisScale, ReturnBar, ReturnBarChart, ReturnsMode, compute_scale, nice_step};
pub use curve::{PathCommand, RenderPath, build_fill, build_stroke};
pub use growth::{
    AmountSlider, CalculatorDuration, CalculatorMode, GrowthProjection, one_time, project,
    recurring,
};
pub use mapper::{CoordinateMapper, ValueRange, map_to_screen, map_values_to_screen};
pub use reduce::{DEFAULT_MAX_POINTS, reduce};
pub use sample::{PreparedSeries, RawNavRecord, RawValue, Sample, prepare_samples};
pub use types::{ScreenPoint, Viewport};
pub use windowing::{DurationPreset, available_presets, default_preset, samples_in_duration};

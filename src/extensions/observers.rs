use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::InteractionMode;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub viewport: Viewport,
    pub series_len: usize,
    pub selected_index: Option<usize>,
    pub interaction_mode: InteractionMode,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    SeriesReplaced { len: usize, excluded: usize },
    Resized { width: f64, height: f64 },
    SelectionChanged { index: usize },
    /// A pointer gesture took ownership of the drag flag. Hosts should pause
    /// competing scroll gestures until [`ChartEvent::DragEnded`].
    DragStarted,
    DragEnded,
    Rendered,
}

/// Hook interface for host-side logic that reacts to chart state.
///
/// Observers read context but never mutate engine internals.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ChartEvent, context: ObserverContext);
}

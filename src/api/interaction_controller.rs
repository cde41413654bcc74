use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::extensions::ChartEvent;
use crate::interaction::{DragChange, InteractionMode, PointerEvent, SelectionState};
use crate::render::Renderer;

use super::selection::selection_view;
use super::validation::resized_viewport;
use super::{FrameKey, NavChart, NavFrame, SelectionView};

impl<R: Renderer> NavChart<R> {
    /// Updates the chart size. The selection keeps its index.
    pub fn resize(&mut self, width: f64, height: f64) -> ChartResult<()> {
        let viewport = resized_viewport(self.config.viewport, width, height)?;
        if viewport == self.config.viewport {
            return Ok(());
        }
        debug!(width, height, "resize nav chart");
        self.config.viewport = viewport;
        self.selection = self.selection.clamped_to(self.series.len());
        self.emit_event(ChartEvent::Resized { width, height });
        Ok(())
    }

    fn frame_key(&self) -> FrameKey {
        FrameKey {
            series_revision: self.series_revision,
            viewport: self.config.viewport,
        }
    }

    /// Screen geometry for the current series and viewport, rebuilt only when
    /// either changed since the last call.
    pub fn frame(&mut self) -> &NavFrame {
        let key = self.frame_key();
        if self.frame.as_ref().is_none_or(|frame| frame.key != key) {
            self.frame = None;
        }
        self.frame.get_or_insert_with(|| NavFrame::build(key, &self.series))
    }

    #[must_use]
    pub fn selection_state(&self) -> SelectionState {
        self.selection
    }

    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected()
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.selection.mode()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    /// Feeds one pointer event through the selection reducer.
    ///
    /// The x-coordinate is clamped to the chart width first, so off-canvas
    /// positions resolve to the boundary samples. Returns the selected index.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<usize> {
        let x = self.config.viewport.clamp_x(event.x);
        let event = PointerEvent { x, ..event };
        let previous = self.selection.selected();

        let current = self.selection;
        let (next, change) = current.apply(event, &self.frame().points);
        self.selection = next;
        trace!(phase = ?event.phase, x, selected = ?next.selected(), "pointer event");

        match change {
            Some(DragChange::Started) => self.emit_event(ChartEvent::DragStarted),
            Some(DragChange::Ended) => self.emit_event(ChartEvent::DragEnded),
            None => {}
        }
        if let Some(index) = next.selected().filter(|index| Some(*index) != previous) {
            self.emit_event(ChartEvent::SelectionChanged { index });
        }
        next.selected()
    }

    /// Convenience wrappers mirroring host touch callbacks.
    pub fn pointer_down(&mut self, x: f64) -> Option<usize> {
        self.handle_pointer(PointerEvent::down(x))
    }

    pub fn pointer_move(&mut self, x: f64) -> Option<usize> {
        self.handle_pointer(PointerEvent::moved(x))
    }

    pub fn pointer_up(&mut self, x: f64) -> Option<usize> {
        self.handle_pointer(PointerEvent::up(x))
    }

    pub fn pointer_cancel(&mut self) -> Option<usize> {
        self.handle_pointer(PointerEvent::cancel())
    }

    /// Readout for the selected sample, or `None` when nothing is plotted.
    pub fn selection_view(&mut self) -> Option<SelectionView> {
        let index = self.selection.selected()?;
        let point = *self.frame().points.get(index)?;
        let sample = self.series.get(index)?;
        Some(selection_view(
            index,
            point,
            sample,
            self.config.viewport,
            &self.config,
        ))
    }
}

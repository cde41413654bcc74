use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartEvent, ChartObserver, ObserverContext};
use crate::render::Renderer;

use super::NavChart;

impl<R: Renderer> NavChart<R> {
    /// Registers an observer with a unique identifier.
    pub fn register_observer(&mut self, observer: Box<dyn ChartObserver>) -> ChartResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(ChartError::InvalidData(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.iter().any(|entry| entry.id() == observer_id) {
            return Err(ChartError::InvalidData(format!(
                "observer with id `{observer_id}` is already registered"
            )));
        }
        self.observers.push(observer);
        Ok(())
    }

    /// Unregisters an observer by id. Returns `true` when removed.
    pub fn unregister_observer(&mut self, observer_id: &str) -> bool {
        match self
            .observers
            .iter()
            .position(|entry| entry.id() == observer_id)
        {
            Some(position) => {
                self.observers.remove(position);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub(super) fn observer_context(&self) -> ObserverContext {
        ObserverContext {
            viewport: self.config.viewport,
            series_len: self.series.len(),
            selected_index: self.selection.selected(),
            interaction_mode: self.selection.mode(),
        }
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        let context = self.observer_context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}

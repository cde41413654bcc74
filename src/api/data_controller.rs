use tracing::debug;

use crate::core::reduce::reduce;
use crate::core::{DurationPreset, RawNavRecord, Sample, prepare_samples, samples_in_duration};
use crate::error::ChartError;
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::NavChart;

impl<R: Renderer> NavChart<R> {
    /// Replaces the history from raw feed rows.
    ///
    /// Rows that fail the parse-or-exclude step are returned and left out of
    /// the chart.
    pub fn set_records<I>(&mut self, records: I) -> Vec<ChartError>
    where
        I: IntoIterator<Item = RawNavRecord>,
    {
        let prepared = prepare_samples(records);
        self.excluded_records = prepared.excluded.len();
        self.replace_history(prepared.samples);
        prepared.excluded
    }

    /// Replaces the history with already validated samples.
    pub fn set_samples(&mut self, samples: Vec<Sample<RawNavRecord>>) {
        self.excluded_records = 0;
        self.replace_history(samples);
    }

    #[must_use]
    pub fn history(&self) -> &[Sample<RawNavRecord>] {
        &self.history
    }

    /// Windowed and reduced samples currently plotted.
    #[must_use]
    pub fn series(&self) -> &[Sample<RawNavRecord>] {
        &self.series
    }

    #[must_use]
    pub fn series_revision(&self) -> u64 {
        self.series_revision
    }

    #[must_use]
    pub fn duration(&self) -> DurationPreset {
        self.duration
    }

    /// Shows the last `preset` worth of history using its default day count.
    pub fn set_duration(&mut self, preset: DurationPreset) {
        self.set_duration_with_days(preset, preset.default_days());
    }

    /// Shows the last `days` of history; `None` shows everything.
    pub fn set_duration_with_days(&mut self, preset: DurationPreset, days: Option<u32>) {
        self.duration = preset;
        self.duration_days = days;
        self.rebuild_series();
    }

    fn replace_history(&mut self, samples: Vec<Sample<RawNavRecord>>) {
        debug!(count = samples.len(), "set nav history");
        self.history = samples;
        self.rebuild_series();
    }

    /// Re-windows and reduces the history. Always counts as a new series.
    fn rebuild_series(&mut self) {
        let windowed = samples_in_duration(&self.history, self.duration_days);
        let windowed_count = windowed.len();
        self.series = reduce(&windowed, self.config.max_points);
        self.series_revision = self.series_revision.wrapping_add(1);
        self.frame = None;
        self.selection = self.selection.reset_for_series(self.series.len());
        debug!(
            history = self.history.len(),
            windowed = windowed_count,
            plotted = self.series.len(),
            revision = self.series_revision,
            "rebuilt plotted series"
        );
        self.emit_event(ChartEvent::SeriesReplaced {
            len: self.series.len(),
            excluded: self.excluded_records,
        });
    }
}

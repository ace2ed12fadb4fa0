use log::info;

use crate::clock::{week_start, Clock, SystemClock};
use crate::error::EntryError;
use crate::models::{Mood, MoodEntry};
use crate::recommend::recommend;
use crate::store::MoodEntryStore;
use crate::summary::WeeklySummary;
use crate::trend::TrendSeries;

/// Owns the entry store and the pending mood selection for one tracker
/// screen: created on mount, dropped on unmount, no process-wide singleton.
///
/// Everything here is synchronous and runs to completion inside a single UI
/// event handler; `save` is the only mutation point.
pub struct MoodTracker {
    store: MoodEntryStore,
    selected: Option<Mood>,
    clock: Box<dyn Clock>,
}

impl MoodTracker {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Construct with an explicit time source, e.g. a fixed clock in tests.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            store: MoodEntryStore::new(),
            selected: None,
            clock,
        }
    }

    pub fn select(&mut self, mood: Mood) {
        self.selected = Some(mood);
    }

    /// Selection via the string boundary. An unknown label is a collaborator
    /// bug; the current selection is left alone.
    pub fn select_label(&mut self, label: &str) -> Result<(), EntryError> {
        match Mood::from_label(label) {
            Some(mood) => {
                self.selected = Some(mood);
                Ok(())
            }
            None => {
                log::error!("Ignored selection of unknown mood category '{label}'");
                Err(EntryError::UnknownCategory(label.to_string()))
            }
        }
    }

    pub fn selected(&self) -> Option<Mood> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Commit the pending selection for the day named by `raw_date`.
    ///
    /// Fails without touching the store when nothing is selected or the date
    /// is invalid; the selection survives a failed save so the user can fix
    /// the date and retry. A successful save clears the selection.
    pub fn save(&mut self, raw_date: &str, author: Option<&str>) -> Result<(), EntryError> {
        let mood = self.selected.ok_or(EntryError::MissingSelection)?;
        self.store.add(mood, raw_date, author)?;
        self.selected = None;
        info!("Saved {} entry; {} total", mood.label(), self.store.len());
        Ok(())
    }

    pub fn entries(&self) -> &[MoodEntry] {
        self.store.all()
    }

    /// Distribution over the current ISO week (Monday start). "Now" is read
    /// from the clock on every call, never cached.
    pub fn weekly_summary(&self) -> WeeklySummary {
        let today = self.clock.now().date_naive();
        WeeklySummary::compute(self.store.all(), week_start(today))
    }

    /// Suggestion derived from the current weekly summary.
    pub fn recommendation(&self) -> &'static str {
        recommend(&self.weekly_summary())
    }

    /// Chart feed over all entries, oldest first.
    pub fn trend_series(&self) -> TrendSeries {
        TrendSeries::from_entries(self.store.all())
    }
}

impl Default for MoodTracker {
    fn default() -> Self {
        Self::new()
    }
}

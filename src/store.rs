use chrono::Utc;
use uuid::Uuid;

use crate::dates;
use crate::error::EntryError;
use crate::models::{Mood, MoodEntry, DEFAULT_AUTHOR};
use crate::{log_error, log_info};

const ENABLE_LOGS: bool = true;

/// Append-only, insertion-ordered collection of recorded moods. State lives
/// only as long as the owning screen; there is no persistence.
#[derive(Debug, Default)]
pub struct MoodEntryStore {
    entries: Vec<MoodEntry>,
}

impl MoodEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mood` for the day named by `raw_date` (`YYYY-MM-DD`).
    ///
    /// The date is validated before anything else: on an invalid date the
    /// store is untouched and the caller gets [`EntryError::InvalidDate`]
    /// back to show a retry prompt. A blank or missing `author` falls back
    /// to [`DEFAULT_AUTHOR`].
    pub fn add(
        &mut self,
        mood: Mood,
        raw_date: &str,
        author: Option<&str>,
    ) -> Result<(), EntryError> {
        let logged_on = dates::parse_strict(raw_date)?;

        let author = author
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_AUTHOR)
            .to_string();

        let entry = MoodEntry {
            id: Uuid::new_v4().to_string(),
            mood,
            logged_on,
            author,
            created_at: Utc::now(),
        };

        log_info!(
            "Recorded {} for {} by {}",
            entry.mood.label(),
            entry.logged_on,
            entry.author
        );
        self.entries.push(entry);
        Ok(())
    }

    /// String-label boundary used by input collaborators. A label outside
    /// the catalog means a bug in the caller, never user input, so it is
    /// logged at error level and rejected without coercion.
    pub fn add_labeled(
        &mut self,
        label: &str,
        raw_date: &str,
        author: Option<&str>,
    ) -> Result<(), EntryError> {
        let Some(mood) = Mood::from_label(label) else {
            log_error!("Rejected mood entry with unknown category '{label}'");
            return Err(EntryError::UnknownCategory(label.to_string()));
        };
        self.add(mood, raw_date, author)
    }

    /// All entries in recording order. Read-only; entries are immutable.
    pub fn all(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = MoodEntryStore::new();
        store.add(Mood::Happy, "2024-03-04", Some("Ann")).unwrap();
        store.add(Mood::Sad, "2024-03-05", Some("Ann")).unwrap();

        let entries = store.all();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].mood, Mood::Happy);
        assert_eq!(entries[1].mood, Mood::Sad);
        assert_eq!(
            entries[0].logged_on,
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
        );
    }

    #[test]
    fn invalid_date_is_a_no_op() {
        let mut store = MoodEntryStore::new();
        let err = store.add(Mood::Cool, "2024-13-01", None).unwrap_err();
        assert_eq!(err, EntryError::InvalidDate("2024-13-01".into()));
        assert!(store.is_empty());
    }

    #[test]
    fn author_defaults_to_anonymous() {
        let mut store = MoodEntryStore::new();
        store.add(Mood::Tired, "2024-03-04", None).unwrap();
        store.add(Mood::Tired, "2024-03-04", Some("   ")).unwrap();
        store.add(Mood::Tired, "2024-03-04", Some("  Bo ")).unwrap();

        assert_eq!(store.all()[0].author, DEFAULT_AUTHOR);
        assert_eq!(store.all()[1].author, DEFAULT_AUTHOR);
        assert_eq!(store.all()[2].author, "Bo");
    }

    #[test]
    fn multiple_entries_per_day_are_allowed() {
        let mut store = MoodEntryStore::new();
        store.add(Mood::Happy, "2024-03-04", None).unwrap();
        store.add(Mood::Angry, "2024-03-04", None).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_labeled_accepts_catalog_labels_only() {
        let mut store = MoodEntryStore::new();
        store.add_labeled("Happy", "2024-03-04", None).unwrap();

        let err = store
            .add_labeled("Euphoric", "2024-03-05", None)
            .unwrap_err();
        assert_eq!(err, EntryError::UnknownCategory("Euphoric".into()));
        assert_eq!(store.len(), 1);
    }
}

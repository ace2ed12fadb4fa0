use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Mood;

/// Author recorded when the input field is left blank.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// One recorded mood. Immutable once created; entries are never updated or
/// deleted, only appended and dropped with the owning store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub mood: Mood,
    /// Calendar day the mood was logged for; time of day is discarded.
    pub logged_on: NaiveDate,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

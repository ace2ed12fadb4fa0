//! Weekly mood tracking engine.
//!
//! Records dated mood entries, aggregates the current ISO week (Monday
//! start) into a per-mood percentage distribution, derives a suggestion from
//! the dominant mood, and builds a chart-ready trend series. Rendering,
//! input widgets, and navigation live with the UI collaborators consuming
//! this crate; state is process-lifetime only.

mod clock;
mod dates;
mod error;
mod models;
mod recommend;
mod store;
mod summary;
mod tracker;
mod trend;
mod utils;

pub use clock::{week_start, Clock, FixedClock, SystemClock};
pub use dates::{display_date, parse_strict};
pub use error::EntryError;
pub use models::{Mood, MoodEntry, DEFAULT_AUTHOR};
pub use recommend::{recommend, START_LOGGING_PROMPT};
pub use store::MoodEntryStore;
pub use summary::{MoodShare, WeeklySummary};
pub use tracker::MoodTracker;
pub use trend::TrendSeries;

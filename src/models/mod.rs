mod entry;
mod mood;

pub use entry::{MoodEntry, DEFAULT_AUTHOR};
pub use mood::Mood;

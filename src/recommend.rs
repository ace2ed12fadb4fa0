use crate::models::Mood;
use crate::summary::WeeklySummary;

/// Shown when the current week has no entries yet.
pub const START_LOGGING_PROMPT: &str =
    "No moods logged this week yet. Log how you feel to get a suggestion.";

/// Map the week's dominant mood to a fixed suggestion.
///
/// A tie at the top resolves to the earlier catalog position; a week with no
/// entries (max percent 0) gets [`START_LOGGING_PROMPT`] instead of any
/// mood-specific text.
pub fn recommend(summary: &WeeklySummary) -> &'static str {
    match summary.dominant() {
        Some(share) if share.percent > 0 => message_for(share.mood),
        _ => START_LOGGING_PROMPT,
    }
}

/// One fixed message per mood, total over the catalog by construction.
fn message_for(mood: Mood) -> &'static str {
    match mood {
        Mood::Happy => "You're having a great week. Keep doing what works!",
        Mood::Cool => "Calm and collected. Enjoy the steady pace.",
        Mood::Tired => "You've been running low on energy. Try an earlier night or two.",
        Mood::Sad => "It's been a heavy week. Be gentle with yourself and reach out to someone.",
        Mood::Angry => "A lot of frustration lately. A walk or a short break can take the edge off.",
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Mood, MoodEntry};

/// Share of one mood within the week's entries.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodShare {
    pub mood: Mood,
    pub label: &'static str,
    pub glyph: &'static str,
    pub count: usize,
    pub percent: u32,
}

/// Per-mood distribution of entries logged on or after `week_start`, in
/// catalog order.
///
/// Percentages are rounded independently per mood, so their sum can miss 100
/// by up to (number of moods - 1) points. Collaborators display them as-is;
/// nothing renormalizes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub total: usize,
    pub shares: Vec<MoodShare>,
}

impl WeeklySummary {
    /// Count entries falling inside the window and derive percentages.
    /// Deterministic for a given input; an empty window yields percent 0
    /// across the board rather than dividing by zero.
    pub fn compute(entries: &[MoodEntry], week_start: NaiveDate) -> Self {
        let mut counts = [0usize; Mood::ALL.len()];
        let mut total = 0usize;
        for entry in entries {
            if entry.logged_on >= week_start {
                counts[entry.mood as usize] += 1;
                total += 1;
            }
        }

        let shares = Mood::ALL
            .iter()
            .map(|&mood| {
                let count = counts[mood as usize];
                let percent = if total > 0 {
                    (count as f64 / total as f64 * 100.0).round() as u32
                } else {
                    0
                };
                MoodShare {
                    mood,
                    label: mood.label(),
                    glyph: mood.glyph(),
                    count,
                    percent,
                }
            })
            .collect();

        Self {
            week_start,
            total,
            shares,
        }
    }

    /// The share with the highest percent; a tie goes to the earlier catalog
    /// position. `None` only for a summary with no shares, which `compute`
    /// never produces.
    pub fn dominant(&self) -> Option<&MoodShare> {
        let mut best: Option<&MoodShare> = None;
        for share in &self.shares {
            match best {
                Some(current) if share.percent <= current.percent => {}
                _ => best = Some(share),
            }
        }
        best
    }
}

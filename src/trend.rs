use serde::Serialize;

use crate::dates;
use crate::models::MoodEntry;

/// Chart feed for the line-chart collaborator: parallel label and score
/// vectors of equal length, one point per saved entry in recording order.
/// Entries sharing a date each keep their own point. The consumer treats an
/// empty series as "no chart".
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub scores: Vec<u8>,
}

impl TrendSeries {
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        let mut labels = Vec::with_capacity(entries.len());
        let mut scores = Vec::with_capacity(entries.len());
        for entry in entries {
            labels.push(dates::display_date(entry.logged_on));
            scores.push(entry.mood.score());
        }
        Self { labels, scores }
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

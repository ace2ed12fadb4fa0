use serde::{Deserialize, Serialize};

/// The fixed set of moods available for logging.
///
/// Variant order is the catalog order: summary rows are emitted in it and
/// recommendation ties resolve to the earlier position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Mood {
    Happy,
    Cool,
    Tired,
    Sad,
    Angry,
}

impl Mood {
    /// Canonical catalog order.
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Cool, Mood::Tired, Mood::Sad, Mood::Angry];

    /// Unique key used at the string boundary and in log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Cool => "Cool",
            Mood::Tired => "Tired",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    /// Display glyph shown next to the label by list collaborators.
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Happy => "😄",
            Mood::Cool => "😎",
            Mood::Tired => "🥱",
            Mood::Sad => "😢",
            Mood::Angry => "😡",
        }
    }

    /// Numeric score plotted by the trend chart; higher is better.
    pub fn score(&self) -> u8 {
        match self {
            Mood::Happy => 5,
            Mood::Cool => 4,
            Mood::Tired => 3,
            Mood::Sad => 2,
            Mood::Angry => 1,
        }
    }

    pub fn from_label(label: &str) -> Option<Mood> {
        match label {
            "Happy" => Some(Mood::Happy),
            "Cool" => Some(Mood::Cool),
            "Tired" => Some(Mood::Tired),
            "Sad" => Some(Mood::Sad),
            "Angry" => Some(Mood::Angry),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_label(mood.label()), Some(mood));
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert_eq!(Mood::from_label("Excited"), None);
        assert_eq!(Mood::from_label("happy"), None);
        assert_eq!(Mood::from_label(""), None);
    }

    #[test]
    fn scores_descend_in_catalog_order() {
        let scores: Vec<u8> = Mood::ALL.iter().map(|m| m.score()).collect();
        assert_eq!(scores, vec![5, 4, 3, 2, 1]);
    }
}

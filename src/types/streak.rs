use serde::{Deserialize, Serialize};

/// Statistics shown on a streak card.
///
/// Dates are ISO-ish strings (`2024-03-01` or full RFC 3339 timestamps); the
/// renderer formats whatever it can parse and passes the rest through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakCardData {
    pub username: String,
    pub total_contributions: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub streak_start_date: String,
    pub streak_end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_streak_start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_streak_end_date: Option<String>,
    pub first_contribution_date: String,
}

impl StreakCardData {
    /// Both ends of the longest streak, if known.
    pub fn longest_streak_range(&self) -> Option<(&str, &str)> {
        match (&self.longest_streak_start_date, &self.longest_streak_end_date) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some((start.as_str(), end.as_str()))
            }
            _ => None,
        }
    }
}

//! Streak derivation from a daily contribution calendar.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Deserialize;

use crate::types::StreakCardData;

/// One calendar day and its contribution count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    pub date: NaiveDate,
    #[serde(rename = "contributionCount")]
    pub count: u32,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

#[derive(Debug, Default)]
struct Run {
    len: u32,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The run of active days ending at the most recent day.
///
/// A zero on the most recent day does not break the run, since that day may
/// still be in progress.
fn current_run(days: &[ContributionDay]) -> Run {
    let mut run = Run::default();
    let last = days.len().saturating_sub(1);
    for (i, day) in days.iter().enumerate().rev() {
        if day.count > 0 {
            run.len += 1;
            run.end.get_or_insert(day.date);
            run.start = Some(day.date);
        } else if i == last {
            continue;
        } else {
            break;
        }
    }
    run
}

/// The first longest run of active days.
fn longest_run(days: &[ContributionDay]) -> Run {
    let mut best = Run::default();
    let mut len = 0u32;
    let mut start = None;

    for (i, day) in days.iter().enumerate() {
        if day.count > 0 {
            if len == 0 {
                start = Some(day.date);
            }
            len += 1;
        } else {
            if len > best.len {
                best = Run {
                    len,
                    start,
                    end: i.checked_sub(1).map(|prev| days[prev].date).or(start),
                };
            }
            len = 0;
            start = None;
        }
    }
    if len > best.len {
        best = Run {
            len,
            start,
            end: days.last().map(|d| d.date).or(start),
        };
    }
    best
}

/// Build card statistics from a contribution calendar.
///
/// `days` may be in any order. With no days at all, every streak is zero and
/// every streak date is `now`.
pub fn compute(
    username: &str,
    total_contributions: u64,
    first_contribution_date: &str,
    days: &[ContributionDay],
    now: DateTime<Utc>,
) -> StreakCardData {
    let mut days = days.to_vec();
    days.sort_by_key(|d| d.date);

    let Some(last) = days.last() else {
        let now = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        return StreakCardData {
            username: username.to_owned(),
            total_contributions: 0,
            current_streak: 0,
            longest_streak: 0,
            streak_start_date: now.clone(),
            streak_end_date: now.clone(),
            longest_streak_start_date: Some(now.clone()),
            longest_streak_end_date: Some(now),
            first_contribution_date: first_contribution_date.to_owned(),
        };
    };

    let fallback = last.date;
    let current = current_run(&days);
    let longest = longest_run(&days);
    tracing::debug!(
        "{username}: current streak {}, longest streak {} over {} days",
        current.len,
        longest.len,
        days.len()
    );

    StreakCardData {
        username: username.to_owned(),
        total_contributions,
        current_streak: current.len,
        longest_streak: longest.len,
        streak_start_date: iso(current.start.unwrap_or(fallback)),
        streak_end_date: iso(current.end.unwrap_or(fallback)),
        longest_streak_start_date: Some(iso(longest.start.unwrap_or(fallback))),
        longest_streak_end_date: Some(iso(longest.end.unwrap_or(fallback))),
        first_contribution_date: first_contribution_date.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn calendar(counts: &[u32]) -> Vec<ContributionDay> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                ContributionDay::new(start + chrono::Days::new(i as u64), count)
            })
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn trailing_run_is_current() {
        let data = compute("u", 10, "2020-01-01", &calendar(&[1, 0, 2, 3, 1]), now());
        assert_eq!(data.current_streak, 3);
        assert_eq!(data.streak_start_date, "2024-01-03");
        assert_eq!(data.streak_end_date, "2024-01-05");
    }

    #[test]
    fn zero_today_keeps_yesterdays_streak() {
        let data = compute("u", 10, "2020-01-01", &calendar(&[0, 4, 4, 0]), now());
        assert_eq!(data.current_streak, 2);
        assert_eq!(data.streak_start_date, "2024-01-02");
        assert_eq!(data.streak_end_date, "2024-01-03");
    }

    #[test]
    fn two_trailing_zeros_end_the_streak() {
        let data = compute("u", 10, "2020-01-01", &calendar(&[3, 3, 0, 0]), now());
        assert_eq!(data.current_streak, 0);
        assert_eq!(data.streak_start_date, "2024-01-04");
        assert_eq!(data.streak_end_date, "2024-01-04");
    }

    #[test]
    fn longest_prefers_first_of_equal_runs() {
        let data = compute("u", 10, "2020-01-01", &calendar(&[1, 1, 0, 2, 2, 0, 1]), now());
        assert_eq!(data.longest_streak, 2);
        assert_eq!(data.longest_streak_start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(data.longest_streak_end_date.as_deref(), Some("2024-01-02"));
    }

    #[test]
    fn longest_can_be_the_trailing_run() {
        let data = compute("u", 10, "2020-01-01", &calendar(&[1, 0, 1, 1, 1]), now());
        assert_eq!(data.longest_streak, 3);
        assert_eq!(data.longest_streak_start_date.as_deref(), Some("2024-01-03"));
        assert_eq!(data.longest_streak_end_date.as_deref(), Some("2024-01-05"));
    }

    #[test]
    fn unsorted_days_are_sorted_first() {
        let mut days = calendar(&[0, 5, 5]);
        days.reverse();
        let data = compute("u", 10, "2020-01-01", &days, now());
        assert_eq!(data.current_streak, 2);
        assert_eq!(data.streak_start_date, "2024-01-02");
    }

    #[test]
    fn empty_calendar_uses_now() {
        let data = compute("u", 99, "2020-01-01T00:00:00Z", &[], now());
        assert_eq!(data.total_contributions, 0);
        assert_eq!(data.current_streak, 0);
        assert_eq!(data.streak_start_date, "2024-06-01T12:00:00.000Z");
        assert_eq!(
            data.longest_streak_end_date.as_deref(),
            Some("2024-06-01T12:00:00.000Z")
        );
        assert_eq!(data.first_contribution_date, "2020-01-01T00:00:00Z");
    }

    #[test]
    fn all_zero_days_fall_back_to_last_day() {
        let data = compute("u", 0, "2020-01-01", &calendar(&[0, 0, 0]), now());
        assert_eq!(data.current_streak, 0);
        assert_eq!(data.longest_streak, 0);
        assert_eq!(data.streak_start_date, "2024-01-03");
        assert_eq!(data.longest_streak_start_date.as_deref(), Some("2024-01-03"));
    }
}

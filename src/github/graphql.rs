use anyhow::{Context, Result, bail};
use chrono::Utc;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};

use crate::streak::{self, ContributionDay};
use crate::types::StreakCardData;

// ---------------------------------------------------------------------------
// GraphQL query strings
// ---------------------------------------------------------------------------

const CONTRIBUTION_CALENDAR_QUERY: &str = r"
query ContributionCalendar($login: String!) {
  user(login: $login) {
    createdAt
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
";

// ---------------------------------------------------------------------------
// Request payload
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GraphQLPayload<V: Serialize> {
    query: &'static str,
    variables: V,
}

#[derive(Serialize)]
struct LoginVariables<'a> {
    login: &'a str,
}

// ---------------------------------------------------------------------------
// Response types (the contents of the GraphQL `data` field)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CalendarData {
    user: Option<RawUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUser {
    created_at: String,
    contributions_collection: RawContributions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContributions {
    contribution_calendar: RawCalendar,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCalendar {
    total_contributions: u64,
    #[serde(default)]
    weeks: Vec<RawWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWeek {
    #[serde(default)]
    contribution_days: Vec<ContributionDay>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// A user's contribution calendar, flattened to days.
#[derive(Debug, Clone)]
pub struct ContributionCalendar {
    /// Account creation timestamp, used as the first contribution date.
    pub created_at: String,
    pub total_contributions: u64,
    pub days: Vec<ContributionDay>,
}

/// Fetch the contribution calendar for `login`.
///
/// octocrab strips the `data` envelope and turns an `errors` array into
/// `Error::Graphql`; both that and an unknown user are reported as errors.
/// Nothing is retried.
pub async fn fetch_contribution_calendar(
    octocrab: &Octocrab,
    login: &str,
) -> Result<ContributionCalendar> {
    let payload = GraphQLPayload {
        query: CONTRIBUTION_CALENDAR_QUERY,
        variables: LoginVariables { login },
    };

    let data: CalendarData = match octocrab.graphql(&payload).await {
        Ok(data) => data,
        Err(octocrab::Error::Graphql { source, .. }) => {
            let messages: Vec<_> = source.0.iter().map(|e| e.message.as_str()).collect();
            bail!("GraphQL errors: {}", messages.join("; "));
        }
        Err(err) => {
            return Err(err).context("GraphQL contribution calendar request failed");
        }
    };

    let user = data
        .user
        .with_context(|| format!("user {login} not found"))?;

    let calendar = user.contributions_collection.contribution_calendar;
    let days: Vec<ContributionDay> = calendar
        .weeks
        .into_iter()
        .flat_map(|w| w.contribution_days)
        .collect();
    tracing::debug!("fetched {} calendar days for {login}", days.len());

    Ok(ContributionCalendar {
        created_at: user.created_at,
        total_contributions: calendar.total_contributions,
        days,
    })
}

/// Fetch `login`'s calendar and derive the card statistics from it.
pub async fn fetch_streak_data(octocrab: &Octocrab, login: &str) -> Result<StreakCardData> {
    let calendar = fetch_contribution_calendar(octocrab, login).await?;
    Ok(streak::compute(
        login,
        calendar.total_contributions,
        &calendar.created_at,
        &calendar.days,
        Utc::now(),
    ))
}

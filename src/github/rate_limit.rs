//! Spotting GitHub rate limits in fetch errors.
//!
//! The calendar query reports a limit either as an HTTP 403/429 surfaced by
//! octocrab, or as a GraphQL error whose message mentions "rate limit".

/// Which limit a failed request ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimit {
    /// Hourly point budget of the token.
    Primary,
    /// Abuse-detection limit; clears after a short pause.
    Secondary,
}

impl RateLimit {
    pub fn hint(self) -> &'static str {
        match self {
            RateLimit::Primary => {
                "API rate limit exceeded; run again once the limit resets, or use a token with a higher quota"
            }
            RateLimit::Secondary => "Secondary rate limit hit; wait a minute before running again",
        }
    }
}

/// Classify `error` (including its context chain) as a rate limit, if it is one.
pub fn classify(error: &anyhow::Error) -> Option<RateLimit> {
    let msg = format!("{error:#}").to_lowercase();
    if msg.contains("secondary rate limit") || msg.contains("status code: 429") {
        Some(RateLimit::Secondary)
    } else if msg.contains("rate limit") || msg.contains("status code: 403") {
        Some(RateLimit::Primary)
    } else {
        None
    }
}

pub fn is_rate_limited(error: &anyhow::Error) -> bool {
    classify(error).is_some()
}

/// Operator hint for `error`; the primary-limit text when it is not a rate limit.
pub fn format_rate_limit_message(error: &anyhow::Error) -> String {
    classify(error).unwrap_or(RateLimit::Primary).hint().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn graphql_limit_in_context_chain() {
        let err = anyhow!("GraphQL errors: API rate limit exceeded").context("fetching calendar");
        assert_eq!(classify(&err), Some(RateLimit::Primary));
        assert!(is_rate_limited(&err));
    }

    #[test]
    fn status_codes() {
        assert_eq!(classify(&anyhow!("HTTP status code: 403")), Some(RateLimit::Primary));
        assert_eq!(classify(&anyhow!("HTTP status code: 429")), Some(RateLimit::Secondary));
    }

    #[test]
    fn secondary_limit_message() {
        let err = anyhow!("You have exceeded a secondary rate limit");
        assert_eq!(classify(&err), Some(RateLimit::Secondary));
        assert!(format_rate_limit_message(&err).starts_with("Secondary rate limit"));
    }

    #[test]
    fn other_errors_are_not_limits() {
        let err = anyhow!("user octocat not found");
        assert_eq!(classify(&err), None);
        assert!(!is_rate_limited(&err));
    }
}

use std::process::Command;

use anyhow::{Context, Result, bail};

/// Resolve a GitHub auth token.
///
/// Priority:
/// 1. `explicit` (the `--github-token` flag / `INPUT_GITHUB_TOKEN`)
/// 2. `GH_TOKEN` environment variable
/// 3. `GITHUB_TOKEN` environment variable
/// 4. `gh auth token` (gh CLI)
pub fn resolve_token(explicit: Option<&str>) -> Result<String> {
    if let Some(token) = explicit.map(str::trim)
        && !token.is_empty()
    {
        return Ok(token.to_owned());
    }

    for var in ["GH_TOKEN", "GITHUB_TOKEN"] {
        if let Ok(token) = std::env::var(var)
            && !token.trim().is_empty()
        {
            tracing::debug!("using token from {var}");
            return Ok(token.trim().to_owned());
        }
    }

    token_from_gh_cli().context(
        "no GitHub token found. Pass --github-token, set GH_TOKEN / GITHUB_TOKEN, \
         or run `gh auth login`",
    )
}

fn token_from_gh_cli() -> Result<String> {
    let output = Command::new("gh")
        .args(["auth", "token"])
        .output()
        .context("failed to run `gh auth token`")?;

    if !output.status.success() {
        bail!("gh auth token exited with non-zero status");
    }

    let token = String::from_utf8(output.stdout)
        .context("gh auth token produced non-UTF-8 output")?
        .trim()
        .to_owned();

    if token.is_empty() {
        bail!("gh auth token returned empty string");
    }

    Ok(token)
}

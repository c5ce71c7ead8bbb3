use anyhow::{Context, Result};
use octocrab::Octocrab;

/// Build an authenticated Octocrab instance.
///
/// `base_uri` points at a GitHub Enterprise API root (or a test server);
/// `None` targets api.github.com.
pub fn build(token: &str, base_uri: Option<&str>) -> Result<Octocrab> {
    let builder = Octocrab::builder().personal_token(token.to_owned());
    let builder = match base_uri {
        Some(uri) => builder
            .base_uri(uri)
            .with_context(|| format!("setting base URI {uri}"))?,
        None => builder,
    };
    builder.build().context("building octocrab instance")
}

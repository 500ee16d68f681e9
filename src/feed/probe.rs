use crate::feed::fetcher::{fetch_bytes, FetchError, FetchOptions};
use crate::util::{validate_url, UrlValidationError};
use thiserror::Error;
use url::Url;

/// Metadata extracted from a candidate feed URL that checked out.
#[derive(Debug, Clone)]
pub struct ProbedFeed {
    /// Feed title, used as the descriptor name ("Untitled Feed" when absent).
    pub title: String,
    /// URL of the RSS/Atom feed itself.
    pub feed_url: String,
    /// Feed description, if available.
    pub description: Option<String>,
}

/// Errors that can occur while probing a candidate feed URL.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The candidate URL was empty.
    #[error("empty URL")]
    EmptyUrl,
    /// The URL failed validation (unparseable, bad scheme, SSRF policy).
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    /// The URL was reachable but its body is not an RSS/Atom feed.
    #[error("not a feed: no RSS/Atom content found")]
    NotAFeed,
    /// The URL could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

/// Probes a candidate URL for the feed adder.
///
/// Validates the URL (rejecting empty strings before any I/O), fetches it,
/// and confirms the body parses as RSS/Atom. On success the extracted
/// metadata names the new registry entry. The registry itself is untouched
/// here; the caller appends only after a successful probe.
///
/// `allow_private_hosts` relaxes the localhost/private-IP policy for
/// self-hosted feeds; parse and scheme failures are never forgiven.
pub async fn probe_feed(
    client: &reqwest::Client,
    url: &str,
    opts: &FetchOptions,
    allow_private_hosts: bool,
) -> Result<ProbedFeed, ProbeError> {
    if url.is_empty() {
        return Err(ProbeError::EmptyUrl);
    }

    let validated = match validate_url(url) {
        Ok(u) => u,
        Err(UrlValidationError::Localhost | UrlValidationError::PrivateIp(_))
            if allow_private_hosts =>
        {
            // Policy errors only: by this point the URL parsed as http(s)
            Url::parse(url).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?
        }
        Err(e) => return Err(ProbeError::InvalidUrl(e.to_string())),
    };
    let url_str = validated.to_string();

    let bytes = fetch_bytes(client, &url_str, opts).await?;

    let feed = feed_rs::parser::parse(bytes.as_slice()).map_err(|_| ProbeError::NotAFeed)?;

    let title = feed
        .title
        .map(|t| t.content)
        .unwrap_or_else(|| "Untitled Feed".to_owned());
    let description = feed.description.map(|d| d.content);

    Ok(ProbedFeed {
        title,
        feed_url: url_str,
        description,
    })
}

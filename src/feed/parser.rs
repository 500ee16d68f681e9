use anyhow::Result;
use chrono::{DateTime, Utc};
use feed_rs::parser;
use sha2::{Digest, Sha256};

/// A single entry extracted from a parsed feed document.
#[derive(Debug, Clone)]
pub struct Entry {
    pub guid: String,
    pub title: String,
    pub link: Option<String>,
    pub published: Option<DateTime<Utc>>,
    pub summary: Option<String>,
}

/// A parsed feed document: channel-level metadata plus its entries.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    /// Feed title, when the document declares one.
    pub title: Option<String>,
    pub entries: Vec<Entry>,
}

/// Parses RSS/Atom bytes into a [`ParsedFeed`].
///
/// Entries without a guid get a content-derived SHA-256 fallback so they
/// keep a stable identity; entries without a title fall back to "Untitled".
pub fn parse_feed(bytes: &[u8]) -> Result<ParsedFeed> {
    let feed = parser::parse(bytes)?;

    let title = feed.title.map(|t| t.content);

    let entries: Vec<Entry> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone());
            let published = entry.published.or(entry.updated);
            let summary = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body));
            let title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());

            let existing_id = if entry.id.is_empty() {
                None
            } else {
                Some(entry.id.as_str())
            };
            let guid = generate_guid(existing_id, link.as_deref(), &title, published);

            Entry {
                guid,
                title,
                link,
                published,
                summary,
            }
        })
        .collect();

    Ok(ParsedFeed { title, entries })
}

fn generate_guid(
    existing: Option<&str>,
    link: Option<&str>,
    title: &str,
    published: Option<DateTime<Utc>>,
) -> String {
    if let Some(guid) = existing {
        let trimmed = guid.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let input = format!(
        "{}|{}|{}",
        link.unwrap_or(""),
        title,
        published.map(|p| p.timestamp().to_string()).unwrap_or_default()
    );
    let hash = Sha256::digest(input.as_bytes());
    format!("{:x}", hash)
}

//! The reader widget: owns the feed registry, the view state, and the HTTP
//! client, and implements the two asynchronous operations of the contract —
//! loading a feed's entries and adding a new feed.
//!
//! # Completion and cancellation
//!
//! Both operations are `async fn`s; the returned future resolving (Ok or
//! Err) is the completion signal — every rejection path settles, so callers
//! can treat resolution uniformly as "operation settled". The per-request
//! deadline comes from [`Config::request_timeout_secs`]; dropping a future
//! cancels its in-flight request.
//!
//! # Serialization
//!
//! Both operations take `&mut self`, so two operations on one widget can
//! never overlap. Callers wanting parallelism own separate widgets.

use crate::config::Config;
use crate::feed::{fetch_feed, probe_feed, FetchError, FetchOptions, ProbeError};
use crate::registry::{FeedDescriptor, FeedRegistry, RegistryError};
use crate::view::{EntryView, FeedListItem, ViewState};
use std::time::Duration;
use thiserror::Error;

/// Errors from [`ReaderWidget::load_feed`]. Every variant settles the
/// operation; rendered state is untouched on failure.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The requested index is not a valid registry position.
    #[error("feed index {index} out of range (registry has {len} feeds)")]
    IndexOutOfRange { index: usize, len: usize },
    /// The feed could not be fetched or parsed.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Errors from [`ReaderWidget::add_feed`]. Every variant settles the
/// operation with the registry unmutated.
#[derive(Debug, Error)]
pub enum AddError {
    /// The candidate URL was rejected (empty, malformed, unreachable,
    /// or not a feed).
    #[error(transparent)]
    Probe(#[from] ProbeError),
    /// The probed metadata could not form a valid descriptor.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Outcome of a successful feed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOutcome {
    /// Index of the feed that was loaded.
    pub index: usize,
    /// Number of entries now rendered.
    pub entries_rendered: usize,
}

pub struct ReaderWidget {
    registry: FeedRegistry,
    view: ViewState,
    client: reqwest::Client,
    fetch_opts: FetchOptions,
    allow_private_hosts: bool,
}

impl ReaderWidget {
    /// Builds a widget from configuration.
    ///
    /// Seeds the registry (startup fails on an empty or invalid seed list),
    /// renders the initial feed list, and configures the HTTP client with
    /// connection pooling the way long-lived fetch clients want it.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let registry = FeedRegistry::from_seeds(&config.feeds)?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let fetch_opts = FetchOptions {
            timeout: Duration::from_secs(config.request_timeout_secs),
            max_retries: config.max_retries,
            max_response_bytes: config.max_response_bytes,
        };

        let mut view = ViewState::new();
        view.render_feed_list(
            registry
                .iter()
                .map(|f| FeedListItem {
                    name: f.name().to_string(),
                })
                .collect(),
        );

        Ok(Self {
            registry,
            view,
            client,
            fetch_opts,
            allow_private_hosts: config.allow_private_hosts,
        })
    }

    pub fn registry(&self) -> &FeedRegistry {
        &self.registry
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// Loads the feed at `index` and renders its entries.
    ///
    /// Fetches and parses the feed, then REPLACES any previously rendered
    /// entries. After an Ok resolution the rendered entries reflect the
    /// requested feed; a feed that produced content renders at least one
    /// entry. On any error the previously rendered entries are left as they
    /// were.
    pub async fn load_feed(&mut self, index: usize) -> Result<LoadOutcome, LoadError> {
        let feed = self
            .registry
            .get(index)
            .ok_or(LoadError::IndexOutOfRange {
                index,
                len: self.registry.len(),
            })?;

        tracing::debug!(index = index, url = %feed.url(), "Loading feed");

        let parsed = fetch_feed(&self.client, feed.url(), &self.fetch_opts).await?;

        let entries: Vec<EntryView> = parsed
            .entries
            .into_iter()
            .map(|e| {
                let link = e.link.unwrap_or_else(|| e.guid.clone());
                EntryView {
                    title: e.title,
                    link,
                }
            })
            .collect();

        let entries_rendered = entries.len();
        self.view.render_entries(entries);

        tracing::info!(
            index = index,
            entries = entries_rendered,
            "Feed loaded and rendered"
        );

        Ok(LoadOutcome {
            index,
            entries_rendered,
        })
    }

    /// Adds a new feed from a candidate URL.
    ///
    /// Probes the URL (empty strings are rejected before any I/O), and on
    /// success appends exactly one descriptor to the registry — named by the
    /// probed feed title — and renders exactly one new feed-list item. On
    /// any rejection the registry and feed list are untouched; the future
    /// still resolves, so rejection is distinguishable from a hang.
    ///
    /// No dedup: adding the same URL twice appends two descriptors.
    pub async fn add_feed(&mut self, url: &str) -> Result<&FeedDescriptor, AddError> {
        let probed = probe_feed(&self.client, url, &self.fetch_opts, self.allow_private_hosts)
            .await
            .inspect_err(|e| {
                tracing::warn!(url = %url, error = %e, "Feed rejected");
            })?;

        // Probed title names the descriptor; a feed that parsed has a
        // non-empty fallback title, and the URL survived validation.
        let descriptor = FeedDescriptor::new(probed.title, probed.feed_url)?;

        self.view.render_feed_item(FeedListItem {
            name: descriptor.name().to_string(),
        });
        let added = self.registry.push(descriptor);

        tracing::info!(name = %added.name(), url = %added.url(), "Feed added");
        Ok(added)
    }
}

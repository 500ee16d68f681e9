//! The feed registry: an ordered, append-only collection of feed sources.
//!
//! The registry is an owned value injected into [`crate::widget::ReaderWidget`]
//! rather than ambient global state, so tests can build isolated instances.
//! Insertion order is display order; there is no removal or reordering.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced when constructing descriptors or seeding the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A descriptor was given an empty name.
    #[error("feed name must be non-empty")]
    EmptyName,
    /// A descriptor was given an empty URL.
    #[error("feed URL must be non-empty")]
    EmptyUrl,
    /// The registry was seeded with no feeds at all.
    #[error("registry must contain at least one feed at startup")]
    EmptySeed,
}

/// A named feed source.
///
/// Both fields are invariantly non-empty: construction goes through
/// [`FeedDescriptor::new`], which rejects empty strings, so every descriptor
/// ever stored in a [`FeedRegistry`] satisfies the invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedDescriptor {
    name: String,
    url: String,
}

impl FeedDescriptor {
    /// Creates a descriptor, rejecting empty names or URLs.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self, RegistryError> {
        let name = name.into();
        let url = url.into();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if url.is_empty() {
            return Err(RegistryError::EmptyUrl);
        }
        Ok(Self { name, url })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A registry seed entry as it appears in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFeed {
    pub name: String,
    pub url: String,
}

/// Ordered collection of [`FeedDescriptor`]s.
///
/// Mutated only by appending; existing elements and their order are never
/// disturbed. Duplicate URLs are permitted (no dedup contract).
#[derive(Debug, Clone)]
pub struct FeedRegistry {
    feeds: Vec<FeedDescriptor>,
}

impl FeedRegistry {
    /// Builds a registry from seed entries, validating every descriptor.
    ///
    /// Fails if the seed list is empty or any entry has an empty field —
    /// the registry must be non-empty and valid from startup.
    pub fn from_seeds(seeds: &[SeedFeed]) -> Result<Self, RegistryError> {
        if seeds.is_empty() {
            return Err(RegistryError::EmptySeed);
        }
        let feeds = seeds
            .iter()
            .map(|s| FeedDescriptor::new(s.name.clone(), s.url.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { feeds })
    }

    /// Appends exactly one descriptor, preserving all existing elements.
    /// Returns the stored descriptor.
    pub fn push(&mut self, feed: FeedDescriptor) -> &FeedDescriptor {
        self.feeds.push(feed);
        &self.feeds[self.feeds.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&FeedDescriptor> {
        self.feeds.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedDescriptor> {
        self.feeds.iter()
    }

    pub fn len(&self) -> usize {
        self.feeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.feeds.is_empty()
    }
}

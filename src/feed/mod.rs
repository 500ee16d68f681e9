//! Feed fetching, parsing, and probing.
//!
//! This module is the network half of the widget:
//!
//! - [`parser`] - RSS/Atom parsing into entry records using `feed-rs`
//! - [`fetcher`] - HTTP retrieval with retry, timeout, and size limits
//! - [`probe`] - candidate-URL validation for the feed adder

mod fetcher;
mod parser;
mod probe;

pub use fetcher::{fetch_feed, FetchError, FetchOptions};
pub use parser::{parse_feed, Entry, ParsedFeed};
pub use probe::{probe_feed, ProbeError, ProbedFeed};

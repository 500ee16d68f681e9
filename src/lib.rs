//! plume — a feed reader widget core.
//!
//! The crate models the contract between a UI shell and a feed-list module:
//!
//! - [`registry`] — an ordered, append-only collection of feed sources
//! - [`feed`] — fetching, RSS/Atom parsing, and candidate-URL probing
//! - [`widget`] — the asynchronous load/add operations over owned state
//! - [`view`] — menu visibility flags and the rendered entry/feed lists
//!
//! State is explicitly owned and injectable: a [`widget::ReaderWidget`] is
//! built from a [`config::Config`] and carries its own registry and view
//! state, so isolated instances never share mutable state.

pub mod config;
pub mod feed;
pub mod registry;
pub mod util;
pub mod view;
pub mod widget;

pub use config::Config;
pub use registry::{FeedDescriptor, FeedRegistry};
pub use view::{ViewState, Visibility};
pub use widget::{AddError, LoadError, LoadOutcome, ReaderWidget};

//! Shared utilities.
//!
//! Currently only URL validation: security-focused checks applied before any
//! candidate feed URL is fetched.

mod url_validator;

pub use url_validator::{validate_url, UrlValidationError};

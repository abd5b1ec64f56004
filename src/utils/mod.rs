//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`fetch_decoded`] - Network fetching with timeout and body decoding
//! - [`dom`] - Element lookup and event delegation helpers

pub mod dom;
mod fetch;

pub use fetch::fetch_decoded;

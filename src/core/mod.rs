//! Core logic shared by the views.
//!
//! This module provides:
//! - [`decode`] - Endpoint body decoding, including the double-encoded market listing
//! - [`escape_html`], [`escape_attr`] - Escaping for rendered fragments
//! - [`market_url`] - Query string construction
//! - [`RequestSequence`] - Latest-request-wins guard per container
//! - [`run_poll_loop`], [`PollHandle`] - Stoppable fixed-interval polling

pub mod decode;
pub mod error;
mod escape;
mod poll;
mod query;
mod sequence;

pub use escape::{escape_attr, escape_html};
pub use poll::{PollHandle, run_poll_loop};
pub use query::market_url;
pub use sequence::RequestSequence;

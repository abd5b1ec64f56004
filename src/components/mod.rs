//! UI components built with Leptos.
//!
//! - [`category_panel`] - Selectable category cards for the filter modal
//! - [`market`] - Market listing filtered by the selected category
//! - [`transactions`] - Periodically refreshed list of recent trades
//! - [`notice`] - Inline info and error messages
//!
//! Views render to HTML strings with every interpolated value escaped,
//! and are mounted into containers the host page already provides.

pub mod category_panel;
pub mod market;
pub mod notice;
pub mod transactions;

pub use category_panel::CategoryPanel;
pub use market::MarketListing;
pub use transactions::TransactionFeed;

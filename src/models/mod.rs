//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Category`], [`MarketItem`], [`Transaction`], [`Price`] - Backend payloads
//! - [`Endpoint`] - Backend paths and their display names
//! - [`CategorySelection`] - Which category card is selected
//! - [`Loadable`] - Per-view fetch state

mod category;
mod endpoint;
mod load;
mod market;
mod selection;
mod transaction;

pub use category::Category;
pub use endpoint::Endpoint;
pub use load::Loadable;
pub use market::MarketItem;
pub use selection::CategorySelection;
pub use transaction::{Price, Transaction};

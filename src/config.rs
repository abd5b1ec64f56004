//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend is reached through relative paths, so the app works under
//! whatever origin serves the host page.

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Endpoint paths consumed by the views.
pub mod endpoints {
    /// Category list for the filter panel.
    pub const CATEGORIES: &str = "categories";
    /// Market listing, filtered with a `category` query parameter.
    pub const MARKET: &str = "market";
    /// Query parameter name used by [`MARKET`].
    pub const MARKET_CATEGORY_PARAM: &str = "category";
    /// Recently completed trades.
    pub const NEW_ORDERS: &str = "neworders";
}

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Delay between transaction feed refreshes in milliseconds.
pub const POLL_INTERVAL_MS: u32 = 5000;

// =============================================================================
// Host Page Contract
// =============================================================================

/// Element ids the host page provides.
pub mod dom_ids {
    /// Container for the category cards.
    pub const CATEGORY_PANEL: &str = "categoryecho";
    /// Container for the market listing.
    pub const MARKET: &str = "tab-2";
    /// Container for the transaction feed.
    pub const TRANSACTIONS: &str = "recenttransactions";
    /// Modal holding the category panel.
    pub const FILTER_MODAL: &str = "item-filters";
}

/// Selectors used for delegated click handling.
pub mod selectors {
    /// Any element that opens the filter modal.
    pub const OPEN_FILTERS: &str = "[data-target=\"#item-filters\"]";
    /// Dismiss buttons inside the filter modal.
    pub const CLOSE_FILTERS: &str = "#item-filters [data-dismiss=\"modal\"]";
    /// The category apply button.
    pub const CATEGORY_SELECTOR: &str = "#categoryselector";
    /// A rendered category card.
    pub const CATEGORY_CARD: &str = "[data-category-index]";
    /// Attribute carrying a card's position in the rendered list.
    pub const CATEGORY_INDEX_ATTR: &str = "data-category-index";
}

// =============================================================================
// Display
// =============================================================================

/// Currency suffix appended to every price.
pub const CURRENCY_SUFFIX: &str = "R€";

/// Shown in place of a price when a market item carries none.
pub const MISSING_PRICE: &str = "—";

/// User-facing labels.
pub mod labels {
    pub const RECENT_TRANSACTIONS: &str = "Recent Transactions";
    pub const NO_TRANSACTIONS: &str = "No recent transactions";
    pub const ITEM_FILTERS: &str = "Item filters...";
}

//! Root application module.
//!
//! Contains the [`MarketContext`] shared by the category panel and market
//! listing, and mounts each view into the host page container it owns.

use leptos::{ev, prelude::*};
use wasm_bindgen_futures::spawn_local;

use crate::components::{CategoryPanel, MarketListing, TransactionFeed};
use crate::config::{dom_ids, selectors};
use crate::core::decode::{decode_categories, decode_market, require_entries};
use crate::core::{RequestSequence, market_url};
use crate::models::{Category, CategorySelection, Endpoint, Loadable, MarketItem};
use crate::utils::{dom, fetch_decoded};

// ============================================================================
// MarketContext
// ============================================================================

/// Reactive state of the category filter and the market listing.
///
/// The selection lives here rather than in a global so that its lifetime
/// is explicit: it starts empty, changes on card clicks and is cleared
/// whenever the filter panel opens or closes.
///
/// Each container has its own [`RequestSequence`], so only the most
/// recently issued request may render into it.
///
/// # Note
///
/// This struct is `Copy` because all fields are arena-backed Leptos
/// handles.
#[derive(Clone, Copy)]
pub struct MarketContext {
    /// Categories shown in the filter panel.
    pub categories: RwSignal<Loadable<Vec<Category>>>,
    /// Currently selected category card.
    pub selection: RwSignal<CategorySelection>,
    /// Items of the market listing.
    pub market: RwSignal<Loadable<Vec<MarketItem>>>,
    category_requests: StoredValue<RequestSequence>,
    market_requests: StoredValue<RequestSequence>,
}

impl MarketContext {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Loadable::Idle),
            selection: RwSignal::new(CategorySelection::default()),
            market: RwSignal::new(Loadable::Idle),
            category_requests: StoredValue::new(RequestSequence::new()),
            market_requests: StoredValue::new(RequestSequence::new()),
        }
    }

    /// Fetch the categories and render them as fresh, unselected cards.
    ///
    /// The previous cards are withdrawn while the fetch is in flight, so
    /// a click can never select a card from the outdated list.
    pub fn open_category_panel(self) {
        let requests = self.category_requests.get_value();
        let ticket = requests.issue();
        self.show_categories(Loadable::Idle);

        spawn_local(async move {
            let endpoint = Endpoint::Categories;
            let result = fetch_decoded(endpoint, endpoint.path(), |body| {
                decode_categories(body).and_then(|list| require_entries(endpoint, list))
            })
            .await;

            if !requests.is_current(ticket) {
                leptos::logging::debug_warn!("dropping stale {} response", endpoint);
                return;
            }
            if let Err(e) = &result {
                leptos::logging::warn!("category panel: {}", e.detail());
            }
            self.show_categories(result.into());
        });
    }

    /// Replace the rendered cards. Indices refer to the new list, so the
    /// selection is cleared in the same step.
    fn show_categories(self, state: Loadable<Vec<Category>>) {
        self.categories.set(state);
        self.selection.update(|s| s.clear());
    }

    /// Discard the selection and any category fetch still in flight.
    pub fn close_category_panel(self) {
        self.category_requests.get_value().invalidate();
        self.selection.update(|s| s.clear());
    }

    /// Mark the card at `index` as the only selected one.
    ///
    /// Ignored when no card exists at `index`, e.g. for a click that
    /// raced a re-render.
    pub fn select_category(self, index: usize) {
        let category = self
            .categories
            .with_untracked(|state| state.loaded().and_then(|list| list.get(index)).cloned());
        if let Some(category) = category {
            self.selection.update(|s| s.select(index, &category));
        }
    }

    /// Fetch and render the market listing for `category`.
    pub fn open_market(self, category: &str) {
        let url = market_url(category);
        let requests = self.market_requests.get_value();
        let ticket = requests.issue();
        leptos::logging::log!("loading {}", url);

        spawn_local(async move {
            let endpoint = Endpoint::Market;
            let result = fetch_decoded(endpoint, &url, |body| {
                decode_market(body).and_then(|items| require_entries(endpoint, items))
            })
            .await;

            if !requests.is_current(ticket) {
                leptos::logging::debug_warn!("dropping stale response for {}", url);
                return;
            }
            if let Err(e) = &result {
                leptos::logging::warn!("market listing: {}", e.detail());
            }
            self.market.set(result.into());
        });
    }

    /// Open the market for whatever category is currently selected.
    pub fn apply_selection(self) {
        let category = self.selected_query();
        self.open_market(&category);
    }

    /// Market filter value of the current selection: the category key
    /// when the backend sent one, otherwise the displayed name.
    fn selected_query(self) -> String {
        self.selection
            .with_untracked(|s| s.query_value().to_string())
    }
}

impl Default for MarketContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Mounting
// ============================================================================

/// Mount every view whose container exists on the current page.
///
/// The category panel and the market listing share one [`MarketContext`];
/// the transaction feed is independent and owns its own poll loop.
pub fn mount() {
    let ctx = MarketContext::new();
    let mut market_views = 0;

    if let Some(root) = dom::html_element_by_id(dom_ids::CATEGORY_PANEL) {
        mount_to(root, move || {
            provide_context(ctx);
            view! { <CategoryPanel /> }
        })
        .forget();
        market_views += 1;
    }

    if let Some(root) = dom::html_element_by_id(dom_ids::MARKET) {
        mount_to(root, move || {
            provide_context(ctx);
            view! { <MarketListing /> }
        })
        .forget();
        market_views += 1;
    }

    if market_views > 0 {
        install_market_triggers(ctx);
    }

    if let Some(root) = dom::html_element_by_id(dom_ids::TRANSACTIONS) {
        mount_to(root, TransactionFeed).forget();
        leptos::logging::log!("transaction feed mounted");
    }

    leptos::logging::log!("{} market view(s) mounted", market_views);
}

/// Page-level action a click can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    ApplySelection,
    OpenFilters,
    CloseFilters,
}

/// Actions for a click, in the order they must run.
///
/// `matches` reports whether the click target lies inside an element
/// matching a selector. The apply button usually also dismisses the
/// modal, so the selection is read before the close resets it.
fn click_triggers(matches: impl Fn(&str) -> bool) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    if matches(selectors::CATEGORY_SELECTOR) {
        triggers.push(Trigger::ApplySelection);
    } else if matches(selectors::OPEN_FILTERS) {
        triggers.push(Trigger::OpenFilters);
    }
    if matches(selectors::CLOSE_FILTERS) {
        triggers.push(Trigger::CloseFilters);
    }
    triggers
}

/// Wire page-level buttons that live outside the mounted containers.
///
/// Uses one delegated click listener, so buttons rendered later (such as
/// the market's filter button) are covered as well.
fn install_market_triggers(ctx: MarketContext) {
    let _ = window_event_listener(ev::click, move |ev| {
        let event: &web_sys::Event = ev.as_ref();
        let triggers = click_triggers(|selector| dom::closest_target(event, selector).is_some());
        for trigger in triggers {
            match trigger {
                Trigger::ApplySelection => ctx.apply_selection(),
                Trigger::OpenFilters => ctx.open_category_panel(),
                Trigger::CloseFilters => ctx.close_category_panel(),
            }
        }
    });
}

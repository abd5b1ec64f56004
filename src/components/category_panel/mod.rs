//! Category filter panel.
//!
//! Renders the fetched categories as cards inside the filter modal.
//! Clicks are handled by one delegated listener on the container, which
//! survives every re-render of the cards.

use leptos::{ev, prelude::*};

use crate::app::MarketContext;
use crate::config::selectors;
use crate::utils::dom;

pub(crate) mod render;

use render::render_category_panel;

stylance::import_crate_style!(css, "src/components/category_panel/category_panel.module.css");

#[component]
pub fn CategoryPanel() -> impl IntoView {
    let ctx = use_context::<MarketContext>().expect("MarketContext must be provided at mount");

    let html = move || {
        ctx.categories
            .with(|state| ctx.selection.with(|selection| render_category_panel(state, selection)))
    };

    let on_click = move |ev: ev::MouseEvent| {
        if let Some(card) = dom::closest_target(ev.as_ref(), selectors::CATEGORY_CARD)
            && let Some(index) = dom::usize_attribute(&card, selectors::CATEGORY_INDEX_ATTR)
        {
            ctx.select_category(index);
        }
    };

    view! { <div on:click=on_click inner_html=html></div> }
}

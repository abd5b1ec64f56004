//! Market listing for the selected category.

use leptos::prelude::*;

use crate::app::MarketContext;

mod render;

use render::render_market;

stylance::import_crate_style!(css, "src/components/market/market.module.css");

#[component]
pub fn MarketListing() -> impl IntoView {
    let ctx = use_context::<MarketContext>().expect("MarketContext must be provided at mount");

    view! { <div inner_html=move || ctx.market.with(render_market)></div> }
}

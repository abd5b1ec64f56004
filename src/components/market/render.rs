//! HTML rendering for the market listing.

use std::fmt::Write;

use crate::components::notice;
use crate::config::{CURRENCY_SUFFIX, MISSING_PRICE, dom_ids, labels};
use crate::core::escape_html;
use crate::models::{Loadable, MarketItem};

use super::css;

/// Render the filter button followed by one row per item.
///
/// Failures keep the filter button so the panel can be reopened.
pub fn render_market(state: &Loadable<Vec<MarketItem>>) -> String {
    let items = match state {
        Loadable::Idle => return String::new(),
        Loadable::Failed(err) => return format!("{}{}", filter_toolbar(), notice::render_error(err)),
        Loadable::Loaded(items) => items,
    };

    let mut html = filter_toolbar();
    for item in items {
        let _ = write!(
            html,
            r#"<div class="d-flex align-items-center my-item {row}"><h1 class="{name_class}">{name}</h1><h1 class="{price_class}">{price}</h1></div>"#,
            row = css::row,
            name_class = css::name,
            name = escape_html(&item.item_name),
            price_class = css::price,
            price = price_label(item),
        );
    }
    html
}

/// Price label in the same form the transaction feed uses.
fn price_label(item: &MarketItem) -> String {
    let amount = item
        .price
        .as_ref()
        .map_or_else(|| MISSING_PRICE.to_string(), |p| escape_html(&p.to_string()));
    format!("{} {}", amount, CURRENCY_SUFFIX)
}

fn filter_toolbar() -> String {
    format!(
        r##"<div class="d-flex align-items-center {toolbar}"><button class="btn btn-primary {button}" type="button" data-toggle="modal" data-target="#{modal}"><i class="fas fa-sliders-h"></i><span class="pull-right {label_class}">{label}</span></button></div>"##,
        toolbar = css::toolbar,
        button = css::filterButton,
        modal = dom_ids::FILTER_MODAL,
        label_class = css::filterLabel,
        label = labels::ITEM_FILTERS,
    )
}

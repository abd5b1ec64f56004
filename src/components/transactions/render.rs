//! HTML rendering for the transaction feed.

use std::fmt::Write;

use crate::components::notice;
use crate::config::{CURRENCY_SUFFIX, labels};
use crate::core::escape_html;
use crate::models::{Loadable, Transaction};

use super::css;

/// Render the heading and one row per transaction.
///
/// The output depends only on `state`, so each refresh fully replaces
/// the previous list.
pub fn render_transactions(state: &Loadable<Vec<Transaction>>) -> String {
    let mut html = format!(
        r#"<h1 class="{}">{}</h1>"#,
        css::heading,
        labels::RECENT_TRANSACTIONS
    );
    match state {
        Loadable::Idle => {}
        Loadable::Failed(err) => html.push_str(&notice::render_error(err)),
        Loadable::Loaded(txs) if txs.is_empty() => {
            html.push_str(&notice::render_info(labels::NO_TRANSACTIONS))
        }
        Loadable::Loaded(txs) => {
            for tx in txs {
                let _ = write!(
                    html,
                    r#"<div class="d-flex align-items-center {row}"><h1 class="{name_class}">{name}</h1><h1 class="{price_class}">{price} {suffix}</h1></div>"#,
                    row = css::row,
                    name_class = css::name,
                    name = escape_html(&tx.item_name),
                    price_class = css::price,
                    price = escape_html(&tx.price.to_string()),
                    suffix = CURRENCY_SUFFIX,
                );
            }
        }
    }
    html
}

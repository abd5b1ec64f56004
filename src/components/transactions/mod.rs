//! Live feed of recently completed trades.
//!
//! The feed refreshes immediately on mount and then every
//! `POLL_INTERVAL_MS`. Its poll loop is stopped when the view unmounts.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::config::POLL_INTERVAL_MS;
use crate::core::decode::decode_transactions;
use crate::core::error::LoadError;
use crate::core::{PollHandle, RequestSequence, run_poll_loop};
use crate::models::{Endpoint, Loadable, Transaction};
use crate::utils::fetch_decoded;

mod render;

use render::render_transactions;

stylance::import_crate_style!(css, "src/components/transactions/transactions.module.css");

#[component]
pub fn TransactionFeed() -> impl IntoView {
    let feed = RwSignal::new(Loadable::<Vec<Transaction>>::Idle);
    let requests = RequestSequence::new();
    let handle = PollHandle::new();

    on_cleanup({
        let handle = handle.clone();
        let requests = requests.clone();
        move || {
            handle.stop();
            requests.invalidate();
        }
    });

    spawn_local(async move {
        let cycles = run_poll_loop(
            handle,
            move || refresh_transactions(feed, requests.clone()),
            || TimeoutFuture::new(POLL_INTERVAL_MS),
        )
        .await;
        leptos::logging::log!("transaction feed stopped after {} refreshes", cycles);
    });

    view! { <div inner_html=move || feed.with(render_transactions)></div> }
}

/// Fetch `neworders` once and replace the rendered feed.
///
/// Failures are rendered inline and also returned so the poll loop can
/// log them.
async fn refresh_transactions(
    feed: RwSignal<Loadable<Vec<Transaction>>>,
    requests: RequestSequence,
) -> Result<(), LoadError> {
    let ticket = requests.issue();
    let endpoint = Endpoint::NewOrders;
    let result = fetch_decoded(endpoint, endpoint.path(), decode_transactions).await;

    if !requests.is_current(ticket) {
        return Ok(());
    }
    let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
    feed.set(result.into());
    outcome
}

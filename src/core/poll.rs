//! Fixed-interval polling with an explicit stop.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::error::LoadError;

/// Stop switch for a running poll loop.
///
/// Clones control the same loop. Stopping takes effect before the next
/// cycle starts; a cycle already in flight is allowed to finish.
#[derive(Debug, Clone, Default)]
pub struct PollHandle {
    stopped: Arc<AtomicBool>,
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Run `cycle` immediately and then once per `wait()`, until `handle` is stopped.
///
/// A failed cycle is logged and the loop carries on, so a single bad
/// response never ends the feed. Cycles never overlap. Returns the
/// number of cycles run.
pub async fn run_poll_loop<C, CF, W, WF>(handle: PollHandle, mut cycle: C, mut wait: W) -> u64
where
    C: FnMut() -> CF,
    CF: Future<Output = Result<(), LoadError>>,
    W: FnMut() -> WF,
    WF: Future<Output = ()>,
{
    let mut cycles = 0;
    while !handle.is_stopped() {
        cycles += 1;
        if let Err(e) = cycle().await {
            leptos::logging::warn!("poll cycle {} failed: {}", cycles, e.detail());
        }
        if handle.is_stopped() {
            break;
        }
        wait().await;
    }
    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::FetchError;
    use crate::models::Endpoint;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_failed_cycle_does_not_stop_loop() {
        let handle = PollHandle::new();
        let results = RefCell::new(vec![
            Ok(()),
            Err(LoadError::parse(Endpoint::NewOrders, "expected value")),
            Err(LoadError::Network(Endpoint::NewOrders, FetchError::Timeout)),
            Ok(()),
        ]);
        let waits = RefCell::new(0);

        let stopper = handle.clone();
        let cycles = run_poll_loop(
            handle,
            || {
                let next = results.borrow_mut().remove(0);
                if results.borrow().is_empty() {
                    stopper.stop();
                }
                async move { next }
            },
            || {
                *waits.borrow_mut() += 1;
                async {}
            },
        )
        .await;

        assert_eq!(cycles, 4);
        assert_eq!(*waits.borrow(), 3);
    }

    #[tokio::test]
    async fn test_stopped_handle_runs_nothing() {
        let handle = PollHandle::new();
        handle.stop();
        let cycles = run_poll_loop(handle, || async { Ok(()) }, || async {}).await;
        assert_eq!(cycles, 0);
    }

    #[tokio::test]
    async fn test_stop_during_wait() {
        let handle = PollHandle::new();
        let stopper = handle.clone();
        let cycles = run_poll_loop(
            handle,
            || async { Ok(()) },
            || {
                stopper.stop();
                async {}
            },
        )
        .await;
        assert_eq!(cycles, 1);
    }
}

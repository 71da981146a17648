//! Cancellable local tasks.
//!
//! Every simulated network delay and every countdown is spawned through a
//! [`TaskGroup`] owned by the view that started it. The view cancels the
//! group from `on_cleanup`, which aborts each pending future at its next
//! poll, so nothing scheduled by a torn-down view can write to state.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use crate::error::MockApiError;

/// A set of abortable tasks sharing one lifetime.
///
/// Only unfinished tasks hold a handle; each guarded future removes its own
/// entry when it resolves, so a long-lived group stays small.
#[derive(Clone, Debug, Default)]
pub struct TaskGroup {
    handles: Arc<Mutex<HashMap<u64, AbortHandle>>>,
    next_id: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

impl TaskGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `fut` so that cancelling the group stops it.
    ///
    /// A future guarded after the group was cancelled never runs.
    pub fn guard<F: Future>(
        &self,
        fut: F,
    ) -> impl Future<Output = Result<F::Output, MockApiError>> + use<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if self.is_cancelled() {
            handle.abort();
        }
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut handles) = self.handles.lock() {
            handles.insert(id, handle);
        }
        let handles = Arc::clone(&self.handles);
        async move {
            let result = Abortable::new(fut, registration).await;
            if let Ok(mut handles) = handles.lock() {
                handles.remove(&id);
            }
            result.map_err(|_aborted| MockApiError::Cancelled)
        }
    }

    /// Spawn `fut` on the local executor under this group.
    pub fn spawn(&self, fut: impl Future<Output = ()> + 'static) {
        let guarded = self.guard(fut);
        leptos::task::spawn_local(async move {
            if guarded.await.is_err() {
                log::debug!("local task aborted");
            }
        });
    }

    /// Abort every task in the group, including ones guarded later.
    pub fn cancel_all(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Ok(mut handles) = self.handles.lock() {
            for (_, handle) in handles.drain() {
                handle.abort();
            }
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Number of guarded futures that have not resolved yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.handles.lock().map_or(0, |handles| handles.len())
    }
}

/// A task group cancelled when the current reactive owner is disposed.
///
/// Call from a component body; the group dies with the component.
#[must_use]
pub fn scoped_tasks() -> TaskGroup {
    let tasks = TaskGroup::new();
    let on_dispose = tasks.clone();
    leptos::prelude::on_cleanup(move || on_dispose.cancel_all());
    tasks
}

/// Wait for `duration`. Resolves immediately outside the browser.
#[cfg_attr(not(feature = "csr"), allow(unused_variables, clippy::unused_async))]
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "csr")]
    {
        if !duration.is_zero() {
            gloo_timers::future::sleep(duration).await;
        }
    }
}

/// Call `on_tick` every `period` until it returns `false`.
///
/// Returns the number of ticks delivered.
pub async fn every(period: Duration, mut on_tick: impl FnMut() -> bool) -> u32 {
    let mut ticks = 0;
    loop {
        sleep(period).await;
        ticks += 1;
        if !on_tick() {
            return ticks;
        }
    }
}

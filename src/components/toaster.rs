//! Stack of transient notices in the corner of the screen.

use std::collections::HashSet;
use std::time::Duration;

use leptos::prelude::*;

use crate::config::TOAST_TTL_MS;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::task::{scoped_tasks, sleep};

/// Renders [`ToastState`] and dismisses each notice after a few seconds.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let tasks = scoped_tasks();
    let scheduled = StoredValue::new(HashSet::<String>::new());

    Effect::new(move || {
        let fresh = toasts
            .with(|t| scheduled.try_update_value(|s| t.take_unscheduled(s)))
            .unwrap_or_default();
        for id in fresh {
            tasks.spawn(async move {
                sleep(Duration::from_millis(TOAST_TTL_MS)).await;
                toasts.update(|t| t.dismiss(&id));
            });
        }
    });

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || toasts.with(|t| t.items.iter().cloned().collect::<Vec<_>>())
                key=|toast| toast.id.clone()
                let:toast
            >
                {
                    let id = toast.id.clone();
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            <span>{toast.message}</span>
                            <button
                                class="btn btn--icon"
                                title="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(&id))
                            >
                                "\u{2715}"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}

//! Notifications page: tabs, time groups, and read/delete actions.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::state::notifications::{
    Notification, NotificationKind, NotificationTab, NotificationsState,
};
use crate::state::session::{Route, SessionState};
use crate::util::format::format_vnd;

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Mention => "@",
        NotificationKind::Hashtag => "#",
        NotificationKind::SavedPost => "\u{2605}",
        NotificationKind::Follow => "+",
        NotificationKind::System => "i",
    }
}

/// Notification list. State lives at the root so the header badge and
/// read markers survive navigation.
#[component]
pub fn NotificationsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let on_open = move |id: String| {
        let target = notifications.try_update(|n| n.open(&id)).flatten();
        if let Some(post_id) = target {
            session.update(|s| s.navigate(Route::product(post_id)));
        }
    };

    let row = move |n: Notification| {
        let open_id = n.id.clone();
        let details_id = n.id.clone();
        let delete_id = n.id.clone();
        let has_details = n.has_details();
        let deleted = n.deleted;
        view! {
            <li class="notification" class:is-unread=!n.read class:is-deleted=deleted>
                <button class="notification__body" on:click=move |_| on_open(open_id.clone())>
                    <span class="notification__icon">{icon(n.kind)}</span>
                    <div>
                        <p class="notification__title">
                            {n.title}
                            {n
                                .count
                                .map(|c| {
                                    view! { <span class="badge notification__count">{c}</span> }
                                })}
                        </p>
                        <p class="notification__message">{n.message}</p>
                        {n.price_change
                            .map(|p| {
                                view! {
                                    <p class="notification__price">
                                        <s>{format_vnd(p.from)}</s>
                                        " \u{2192} "
                                        <strong>{format_vnd(p.to)}</strong>
                                    </p>
                                }
                            })}
                        <span class="notification__time">{n.timestamp}</span>
                    </div>
                </button>
                <div class="notification__actions">
                    {has_details
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--link"
                                    on:click=move |_| on_open(details_id.clone())
                                >
                                    "Details"
                                </button>
                            }
                        })}
                    {deleted
                        .then(|| {
                            view! {
                                <button
                                    class="btn btn--link"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        session.update(|s| s.navigate(Route::Home));
                                    }
                                >
                                    "View similar"
                                </button>
                            }
                        })}
                    <button
                        class="btn btn--icon"
                        title="Delete"
                        on:click=move |_| notifications.update(|s| s.delete(&delete_id))
                    >
                        "\u{2715}"
                    </button>
                </div>
            </li>
        }
    };

    view! {
        <div class="page notifications-page">
            <Header/>
            <main class="notifications-page__main">
                <header class="notifications-page__header">
                    <h1>"Notifications"</h1>
                    <button
                        class="btn btn--link"
                        disabled=move || notifications.with(|n| n.unread_count() == 0)
                        on:click=move |_| notifications.update(NotificationsState::mark_all_read)
                    >
                        "Mark all as read"
                    </button>
                </header>
                <div class="notifications-page__tabs" role="tablist">
                    {NotificationTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="notifications-page__tab"
                                    class:is-active=move || notifications.with(|n| n.tab == tab)
                                    on:click=move |_| notifications.update(|n| n.tab = tab)
                                >
                                    {tab.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                {move || {
                    let groups = notifications.with(|n| n.grouped(n.tab));
                    if groups.is_empty() {
                        return view! { <p class="empty-state">"Nothing here yet."</p> }.into_any();
                    }
                    groups
                        .into_iter()
                        .map(|(group, items)| {
                            view! {
                                <section class="notifications-page__group">
                                    <h2>{group.label()}</h2>
                                    <ul>{items.into_iter().map(row).collect::<Vec<_>>()}</ul>
                                </section>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </main>
        </div>
    }
}

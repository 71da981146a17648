//! Sticky top bar with logo, search, theme toggle, and account actions.

use leptos::prelude::*;

use crate::components::mobile_menu::MobileMenu;
use crate::state::access::guard_destination;
use crate::state::notifications::NotificationsState;
use crate::state::session::{Route, SessionState};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Navigate to `target`, redirecting guests away from protected pages.
pub fn go_to(session: RwSignal<SessionState>, target: Route) {
    session.update(|s| {
        let destination = guard_destination(s, target);
        s.navigate(destination);
    });
}

/// Top header shown on every page after the auth screens.
///
/// Guests see sign-in and register buttons; members see notifications,
/// orders, their avatar, and a logout button.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let search = RwSignal::new(String::new());

    let is_guest = move || session.with(SessionState::is_guest);
    let unread = move || notifications.with(NotificationsState::unread_count);
    let initial =
        move || session.with(|s| s.current_user().map(|u| u.initial()).unwrap_or_default());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = search.get_untracked();
        let query = query.trim();
        if !query.is_empty() {
            log::info!("search: {query}");
        }
    };

    let on_theme = move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));

    let on_logout = move |_| {
        session.update(SessionState::log_out);
        toasts.update(|t| {
            t.success("You have been signed out");
        });
    };

    view! {
        <header class="header">
            <button class="header__logo" on:click=move |_| go_to(session, Route::Home)>
                "Marketplace"
            </button>
            <form class="header__search" on:submit=on_search>
                <input
                    class="input"
                    type="search"
                    placeholder="Search products, shops, #tags"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </form>
            <div class="header__actions">
                <button class="btn btn--icon" title="Toggle theme" on:click=on_theme>
                    {move || if ui.with(|u| u.dark_mode) { "\u{2600}" } else { "\u{263e}" }}
                </button>
                {move || {
                    if is_guest() {
                        view! {
                            <button
                                class="btn"
                                on:click=move |_| session.update(SessionState::log_out)
                            >
                                "Sign in"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| ui.update(UiState::prompt_register)
                            >
                                "Register"
                            </button>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn--icon header__bell"
                                title="Notifications"
                                on:click=move |_| go_to(session, Route::Notifications)
                            >
                                "\u{1f514}"
                                <Show when=move || { unread() > 0 }>
                                    <span class="header__badge">{unread}</span>
                                </Show>
                            </button>
                            <button class="btn" on:click=move |_| go_to(session, Route::Orders)>
                                "Orders"
                            </button>
                            <button
                                class="header__avatar"
                                title="Profile"
                                on:click=move |_| go_to(session, Route::Profile)
                            >
                                {initial}
                            </button>
                            <button class="btn header__logout" on:click=on_logout>
                                "Logout"
                            </button>
                        }
                            .into_any()
                    }
                }}
                <button
                    class="btn btn--icon header__menu"
                    title="Menu"
                    on:click=move |_| ui.update(|u| u.mobile_menu_open = true)
                >
                    "\u{2630}"
                </button>
            </div>
        </header>
        <Show when=move || ui.with(|u| u.mobile_menu_open)>
            <MobileMenu/>
        </Show>
    }
}

//! Slide-over navigation for narrow screens.

use leptos::prelude::*;

use crate::components::header::go_to;
use crate::net::fixtures;
use crate::state::session::{Route, SessionState};
use crate::state::ui::UiState;

#[component]
pub fn MobileMenu() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let close = move || ui.update(|u| u.mobile_menu_open = false);
    let open = move |target: Route| {
        close();
        go_to(session, target);
    };
    let is_guest = move || session.with(SessionState::is_guest);

    let links = [
        ("Home", Route::Home),
        ("Notifications", Route::Notifications),
        ("Orders", Route::Orders),
        ("Profile", Route::Profile),
    ];

    view! {
        <div class="mobile-menu__backdrop" on:click=move |_| close()>
            <nav class="mobile-menu" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="btn btn--icon mobile-menu__close"
                    title="Close"
                    on:click=move |_| close()
                >
                    "\u{2715}"
                </button>
                <Show when=is_guest>
                    <div class="mobile-menu__guest">
                        <p>"Create an account to buy, save, and follow shops."</p>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| ui.update(UiState::prompt_register)
                        >
                            "Create account"
                        </button>
                    </div>
                </Show>
                <ul class="mobile-menu__links">
                    {links
                        .into_iter()
                        .map(|(label, route)| {
                            view! {
                                <li>
                                    <button
                                        class="mobile-menu__link"
                                        on:click=move |_| open(route.clone())
                                    >
                                        {label}
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
                <h3 class="mobile-menu__heading">"Trending"</h3>
                <ul class="mobile-menu__tags">
                    {fixtures::trending_tags()
                        .into_iter()
                        .map(|t| {
                            view! {
                                <li class="mobile-menu__tag">
                                    <span>"#" {t.tag}</span>
                                    <span class="mobile-menu__count">{t.count}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
        </div>
    }
}

//! Profile page with account details and shortcuts.

use leptos::prelude::*;

use crate::components::header::{Header, go_to};
use crate::state::session::{Route, SessionState};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let user = move || session.with(|s| s.current_user().cloned());

    view! {
        <div class="page profile-page">
            <Header/>
            <main class="profile-page__main">
                {move || {
                    user()
                        .map(|u| {
                            let initial = u.initial();
                            let is_new = u.is_new_user;
                            view! {
                                <section class="profile-card">
                                    <div class="profile-card__avatar">{initial}</div>
                                    <div>
                                        <h1>{u.name}</h1>
                                        <p>{u.email}</p>
                                        {u.username.map(|name| view! { <p>"@" {name}</p> })}
                                        {u.phone.map(|phone| view! { <p>{phone}</p> })}
                                        {u.provider.map(|p| view! { <p>"Signed in with " {p}</p> })}
                                        <Show when=move || is_new>
                                            <span class="badge badge--new">"New member"</span>
                                        </Show>
                                    </div>
                                </section>
                            }
                        })
                }}
                <nav class="profile-page__links">
                    <button class="btn" on:click=move |_| go_to(session, Route::Orders)>
                        "My orders"
                    </button>
                    <button class="btn" on:click=move |_| go_to(session, Route::Notifications)>
                        "Notifications"
                    </button>
                    <button class="btn" on:click=move |_| session.update(SessionState::log_out)>
                        "Sign out"
                    </button>
                </nav>
            </main>
        </div>
    }
}

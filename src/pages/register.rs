//! Register page: phone code, full form, or provider sign-up.

use leptos::prelude::*;

use crate::components::auth_forms::{AuthIntent, OAuthButtons, OtpPanel, RegistrationPanel};
use crate::components::register_prompt::AuthTabs;
use crate::net::mock_api::MockApi;
use crate::state::auth::AuthTab;
use crate::state::session::{Route, SessionState};

/// Register page. Also rendered for guests who reach a protected route.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let tab = RwSignal::new(AuthTab::default());
    let api = MockApi::for_view();
    let is_guest = move || session.with(SessionState::is_guest);

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create your account"</h1>
                <Show when=is_guest>
                    <p class="auth-card__notice">
                        "That page needs an account. Sign up to continue."
                    </p>
                </Show>
                <AuthTabs tab=tab/>
                {move || match tab.get() {
                    AuthTab::Phone => view! {
                        <OtpPanel intent=AuthIntent::Register api=api.clone()/>
                    }
                    .into_any(),
                    AuthTab::Account => view! { <RegistrationPanel api=api.clone()/> }.into_any(),
                    AuthTab::Other => view! {
                        <OAuthButtons intent=AuthIntent::Register api=api.clone()/>
                    }
                    .into_any(),
                }}
                <div class="auth-card__footer">
                    <Show
                        when=is_guest
                        fallback=move || {
                            view! {
                                <span>
                                    "Already have an account? "
                                    <button
                                        class="btn btn--link"
                                        on:click=move |_| {
                                            session.update(|s| s.navigate(Route::Login));
                                        }
                                    >
                                        "Sign in"
                                    </button>
                                </span>
                            }
                        }
                    >
                        <button
                            class="btn btn--link"
                            on:click=move |_| session.update(|s| s.navigate(Route::Home))
                        >
                            "Keep browsing"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

//! Login page: phone code, password, or provider sign-in, plus guest entry.

use leptos::prelude::*;

use crate::components::auth_forms::{AuthIntent, OAuthButtons, OtpPanel, PasswordPanel};
use crate::components::register_prompt::AuthTabs;
use crate::net::mock_api::MockApi;
use crate::state::auth::AuthTab;
use crate::state::session::{Route, SessionState};
use crate::state::toast::ToastState;

/// Login page. Signing in lands on home; "continue as guest" does too.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let tab = RwSignal::new(AuthTab::default());
    let api = MockApi::for_view();

    let on_guest = move |_| {
        session.update(|s| s.set_guest(true));
        toasts.update(|t| {
            t.success("Browsing as a guest");
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome back"</h1>
                <p class="auth-card__lead">
                    "Sign in to buy, sell, and follow your favourite shops."
                </p>
                <AuthTabs tab=tab/>
                {move || match tab.get() {
                    AuthTab::Phone => {
                        view! { <OtpPanel intent=AuthIntent::Login api=api.clone()/> }.into_any()
                    }
                    AuthTab::Account => view! { <PasswordPanel api=api.clone()/> }.into_any(),
                    AuthTab::Other => view! {
                        <OAuthButtons intent=AuthIntent::Login api=api.clone()/>
                    }
                    .into_any(),
                }}
                <div class="auth-card__footer">
                    <button class="btn btn--link" on:click=on_guest>
                        "Continue as guest"
                    </button>
                    <span>
                        "New here? "
                        <button
                            class="btn btn--link"
                            on:click=move |_| session.update(|s| s.navigate(Route::Register))
                        >
                            "Create an account"
                        </button>
                    </span>
                </div>
            </div>
        </div>
    }
}

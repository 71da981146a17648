//! Modal offering guests a way to sign up without leaving the page.

use leptos::prelude::*;

use crate::components::auth_forms::{AuthIntent, OAuthButtons, OtpPanel, RegistrationPanel};
use crate::net::mock_api::MockApi;
use crate::state::auth::AuthTab;
use crate::state::ui::UiState;

/// Register prompt shown when a guest tries something that needs an account.
///
/// Mounted once at the root; opened through [`UiState::prompt_register`].
/// Signing up keeps the current route, so the guest stays on the page they
/// were looking at.
#[component]
pub fn RegisterPrompt() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(|u| u.register_prompt_open = false);

    view! {
        <Show when=move || ui.with(|u| u.register_prompt_open)>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog register-prompt" on:click=move |ev| ev.stop_propagation()>
                    <button
                        class="btn btn--icon dialog__close"
                        title="Close"
                        on:click=move |_| close()
                    >
                        "\u{2715}"
                    </button>
                    <h2>"Create an account"</h2>
                    <p class="register-prompt__lead">
                        "Sign up to buy, save listings, comment, and follow shops."
                    </p>
                    <PromptForms on_done=Callback::new(move |()| close())/>
                </div>
            </div>
        </Show>
    }
}

/// Tabbed forms inside the prompt. Owns the API handle, so closing the
/// prompt cancels whatever it had in flight.
#[component]
fn PromptForms(on_done: Callback<()>) -> impl IntoView {
    let tab = RwSignal::new(AuthTab::default());
    let api = MockApi::for_view();

    view! {
        <AuthTabs tab=tab/>
        {move || match tab.get() {
            AuthTab::Phone => view! {
                <OtpPanel intent=AuthIntent::Register api=api.clone() on_done=on_done/>
            }
            .into_any(),
            AuthTab::Account => {
                view! { <RegistrationPanel api=api.clone() on_done=on_done/> }.into_any()
            }
            AuthTab::Other => view! {
                <OAuthButtons intent=AuthIntent::Register api=api.clone() on_done=on_done/>
            }
            .into_any(),
        }}
    }
}

/// Tab strip for the phone, account, and provider forms.
#[component]
pub fn AuthTabs(tab: RwSignal<AuthTab>) -> impl IntoView {
    view! {
        <div class="auth-tabs" role="tablist">
            {AuthTab::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <button
                            class="auth-tabs__tab"
                            class:is-active=move || tab.get() == t
                            role="tab"
                            on:click=move |_| tab.set(t)
                        >
                            {t.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

//! Form pieces shared by the login page, the register page, and the guest
//! register prompt.
//!
//! Each form keeps its field values in a local signal, validates locally,
//! and runs the simulated API call through the owning view's task group.
//! A successful call signs the user in, which moves the root view on.

use leptos::prelude::*;

use crate::config::{AuthRules, COUNTRY_CODES, MockLatency};
use crate::net::mock_api::MockApi;
use crate::net::types::{OAuthProvider, User};
use crate::state::auth::{AuthState, OtpForm, PasswordLogin, RegistrationForm};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::task::every;

/// Whether a form signs in an existing account or creates a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthIntent {
    Login,
    Register,
}

impl AuthIntent {
    fn welcome(self, user: &User) -> String {
        match self {
            Self::Login => format!("Welcome back, {}", user.name),
            Self::Register => "Your account has been created".to_owned(),
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }
}

/// Shared signals a form writes to when it completes.
#[derive(Clone, Copy)]
struct Outcome {
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    on_done: Option<Callback<()>>,
}

impl Outcome {
    fn from_context(on_done: Option<Callback<()>>) -> Self {
        Self {
            session: expect_context::<RwSignal<SessionState>>(),
            toasts: expect_context::<RwSignal<ToastState>>(),
            on_done,
        }
    }

    fn error(self, message: String) {
        self.toasts.update(|t| {
            t.error(message);
        });
    }

    fn notice(self, message: &str) {
        self.toasts.update(|t| {
            t.success(message);
        });
    }

    /// Record the signed-in user and enter the authenticated mode.
    fn signed_in(self, intent: AuthIntent, user: User) {
        finish_sign_in(self.session, self.toasts, intent, user);
        if let Some(done) = self.on_done {
            done.run(());
        }
    }
}

/// Record the signed-in user and enter the authenticated mode.
pub fn finish_sign_in(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    intent: AuthIntent,
    user: User,
) {
    let message = intent.welcome(&user);
    session.update(|s| s.sign_in(user));
    toasts.update(|t| {
        t.success(message);
    });
}

/// Phone number plus one-time code.
///
/// Step one collects the number and "sends" a code; step two collects the
/// code, with a resend countdown driven by a cancellable ticker.
#[component]
pub fn OtpPanel(
    intent: AuthIntent,
    api: MockApi,
    /// Run after a successful sign-in (the guest prompt closes itself).
    #[prop(optional)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let outcome = Outcome::from_context(on_done);
    let latency = expect_context::<MockLatency>();
    let form = RwSignal::new(OtpForm::default());
    let auth = RwSignal::new(AuthState::default());
    let sent = Memo::new(move |_| form.with(|f| f.otp_sent));
    let api = StoredValue::new(api);
    // Only the most recently started countdown may tick.
    let generation = StoredValue::new(0_u32);

    let start_countdown = move || {
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        let tasks = api.with_value(|a| a.tasks().clone());
        tasks.spawn(async move {
            let ticks = every(latency.tick(), move || {
                generation.get_value() == mine && form.try_update(OtpForm::tick).unwrap_or(false)
            })
            .await;
            log::debug!("resend countdown stopped after {ticks} ticks");
        });
    };

    let send_code = move || {
        let current = form.get_untracked();
        if let Err(err) = current.validate_phone() {
            outcome.error(err.to_string());
            return;
        }
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        let api = api.get_value();
        api.tasks().clone().spawn(async move {
            let result = api.send_otp(&current.full_number()).await;
            auth.update(AuthState::finish);
            if result.is_ok() {
                form.update(OtpForm::mark_sent);
                start_countdown();
                outcome.notice("A verification code was sent to your phone");
            }
        });
    };

    let verify_code = move || {
        let current = form.get_untracked();
        if let Err(err) = current.verify() {
            outcome.error(err.to_string());
            return;
        }
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        let api = api.get_value();
        api.tasks().clone().spawn(async move {
            let phone = current.full_number();
            let result = match intent {
                AuthIntent::Login => api.verify_otp(&phone).await,
                AuthIntent::Register => api.register_with_otp(&phone).await,
            };
            auth.update(AuthState::finish);
            if let Ok(user) = result {
                outcome.signed_in(intent, user);
            }
        });
    };

    let resend_code = move || {
        start_countdown();
        let phone = form.with_untracked(OtpForm::full_number);
        let api = api.get_value();
        api.tasks().clone().spawn(async move {
            if api.send_otp(&phone).await.is_ok() {
                outcome.notice("A new code was sent");
            }
        });
    };

    let on_resend = move |_| match form.try_update(OtpForm::request_resend) {
        Some(Ok(())) => resend_code(),
        Some(Err(err)) => outcome.error(err.to_string()),
        None => {}
    };

    let loading = move || auth.with(|a| a.loading);

    view! {
        <div class="otp-panel">
            {move || {
                if sent.get() {
                    view! {
                        <div class="otp-panel__step">
                            <p class="otp-panel__hint">
                                "Code sent to " {move || form.with(OtpForm::full_number)}
                            </p>
                            <input
                                class="input otp-panel__code"
                                inputmode="numeric"
                                autocomplete="one-time-code"
                                placeholder="000000"
                                prop:value=move || form.with(|f| f.code.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.set_code(&event_target_value(&ev)));
                                }
                            />
                            <button
                                class="btn btn--primary"
                                disabled=loading
                                on:click=move |_| verify_code()
                            >
                                {move || {
                                    if loading() { "Verifying..." } else { intent.submit_label() }
                                }}
                            </button>
                            <div class="otp-panel__footer">
                                <button
                                    class="btn btn--link"
                                    on:click=move |_| form.update(OtpForm::reset)
                                >
                                    "Change number"
                                </button>
                                <button
                                    class="btn btn--link"
                                    disabled=move || form.with(|f| f.countdown > 0)
                                    on:click=on_resend
                                >
                                    {move || {
                                        let countdown = form.with(|f| f.countdown);
                                        if countdown > 0 {
                                            format!("Resend in {countdown}s")
                                        } else {
                                            "Resend code".to_owned()
                                        }
                                    }}
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="otp-panel__step">
                            <div class="otp-panel__phone">
                                <select
                                    class="input otp-panel__country"
                                    prop:value=move || form.with(|f| f.country_code.clone())
                                    on:change=move |ev| {
                                        form.update(|f| f.country_code = event_target_value(&ev));
                                    }
                                >
                                    {COUNTRY_CODES
                                        .iter()
                                        .map(|code| view! { <option value=*code>{*code}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                                <input
                                    class="input"
                                    type="tel"
                                    placeholder="Phone number"
                                    prop:value=move || form.with(|f| f.phone.clone())
                                    on:input=move |ev| {
                                        form.update(|f| f.phone = event_target_value(&ev));
                                    }
                                />
                            </div>
                            <button
                                class="btn btn--primary"
                                disabled=move || loading() || !form.with(OtpForm::can_send)
                                on:click=move |_| send_code()
                            >
                                {move || if loading() { "Sending..." } else { "Send code" }}
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Username or email plus password.
#[component]
pub fn PasswordPanel(api: MockApi) -> impl IntoView {
    let outcome = Outcome::from_context(None);
    let form = RwSignal::new(PasswordLogin::default());
    let auth = RwSignal::new(AuthState::default());
    let api = StoredValue::new(api);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(err) = current.validate() {
            outcome.error(err.to_string());
            return;
        }
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        let api = api.get_value();
        api.tasks().clone().spawn(async move {
            let result = api.login_with_password(current.username.trim()).await;
            auth.update(AuthState::finish);
            if let Ok(user) = result {
                outcome.signed_in(AuthIntent::Login, user);
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-form__field">
                "Username or email"
                <input
                    class="input"
                    autocomplete="username"
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
            </label>
            <label class="auth-form__field">
                "Password"
                <div class="auth-form__password">
                    <input
                        class="input"
                        type=move || {
                            if form.with(|f| f.show_password) { "text" } else { "password" }
                        }
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="btn btn--icon"
                        on:click=move |_| form.update(|f| f.show_password = !f.show_password)
                    >
                        {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                    </button>
                </div>
            </label>
            <label class="auth-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.remember_me)
                    on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                />
                "Remember me"
            </label>
            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || auth.with(|a| a.loading)
            >
                {move || if auth.with(|a| a.loading) { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}

/// Full registration form with email, username, and password.
#[component]
pub fn RegistrationPanel(
    api: MockApi,
    #[prop(optional)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let outcome = Outcome::from_context(on_done);
    let form = RwSignal::new(RegistrationForm::default());
    let auth = RwSignal::new(AuthState::default());
    let api = StoredValue::new(api);
    let rules = AuthRules::default();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if let Err(err) = current.validate(&rules) {
            outcome.error(err.to_string());
            return;
        }
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        let api = api.get_value();
        api.tasks().clone().spawn(async move {
            let result = api.register_with_form(&current).await;
            auth.update(AuthState::finish);
            if let Ok(user) = result {
                outcome.signed_in(AuthIntent::Register, user);
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            {text_field(form, "Full name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
            {text_field(form, "Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
            {text_field(form, "Username", "text", |f| f.username.clone(), |f, v| f.username = v)}
            <label class="auth-form__field">
                "Password"
                <div class="auth-form__password">
                    <input
                        class="input"
                        type=move || {
                            if form.with(|f| f.show_password) { "text" } else { "password" }
                        }
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="btn btn--icon"
                        on:click=move |_| form.update(|f| f.show_password = !f.show_password)
                    >
                        {move || if form.with(|f| f.show_password) { "Hide" } else { "Show" }}
                    </button>
                </div>
            </label>
            <label class="auth-form__field">
                "Confirm password"
                <div class="auth-form__password">
                    <input
                        class="input"
                        type=move || {
                            if form.with(|f| f.show_confirm_password) { "text" } else { "password" }
                        }
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.confirm_password.clone())
                        on:input=move |ev| {
                            form.update(|f| f.confirm_password = event_target_value(&ev));
                        }
                    />
                    <button
                        type="button"
                        class="btn btn--icon"
                        on:click=move |_| {
                            form.update(|f| f.show_confirm_password = !f.show_confirm_password);
                        }
                    >
                        {move || {
                            if form.with(|f| f.show_confirm_password) { "Hide" } else { "Show" }
                        }}
                    </button>
                </div>
            </label>
            <label class="auth-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.agree_terms)
                    on:change=move |ev| form.update(|f| f.agree_terms = event_target_checked(&ev))
                />
                "I agree to the terms of service and privacy policy"
            </label>
            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || auth.with(|a| a.loading)
            >
                {move || {
                    if auth.with(|a| a.loading) { "Creating account..." } else { "Create account" }
                }}
            </button>
        </form>
    }
}

fn text_field(
    form: RwSignal<RegistrationForm>,
    label: &'static str,
    kind: &'static str,
    get: fn(&RegistrationForm) -> String,
    set: fn(&mut RegistrationForm, String),
) -> impl IntoView {
    view! {
        <label class="auth-form__field">
            {label}
            <input
                class="input"
                type=kind
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </label>
    }
}

/// One button per third-party provider.
#[component]
pub fn OAuthButtons(
    intent: AuthIntent,
    api: MockApi,
    #[prop(optional)]
    on_done: Option<Callback<()>>,
) -> impl IntoView {
    let outcome = Outcome::from_context(on_done);
    let auth = RwSignal::new(AuthState::default());
    let api = StoredValue::new(api);

    let sign_in_with = move |provider: OAuthProvider| {
        if !auth.try_update(AuthState::begin).unwrap_or(false) {
            return;
        }
        let api = api.get_value();
        api.tasks().clone().spawn(async move {
            let result = match intent {
                AuthIntent::Login => api.login_with_oauth(provider).await,
                AuthIntent::Register => api.register_with_oauth(provider).await,
            };
            auth.update(AuthState::finish);
            if let Ok(user) = result {
                outcome.signed_in(intent, user);
            }
        });
    };

    view! {
        <div class="oauth-buttons">
            {OAuthProvider::ALL
                .into_iter()
                .map(|provider| {
                    let class = format!("btn oauth-buttons__{}", provider.label().to_lowercase());
                    view! {
                        <button
                            class=class
                            disabled=move || auth.with(|a| a.loading)
                            on:click=move |_| sign_in_with(provider)
                        >
                            "Continue with " {provider.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

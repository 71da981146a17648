//! Root application component with context providers and page selection.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::register_prompt::RegisterPrompt;
use crate::components::toaster::Toaster;
use crate::config::MockLatency;
use crate::net::fixtures;
use crate::pages::{
    home::HomePage, login::LoginPage, notifications::NotificationsPage, orders::OrdersPage,
    product::ProductPage,
    profile::ProfilePage, register::RegisterPage,
};
use crate::state::access::{Page, resolve_page};
use crate::state::notifications::NotificationsState;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the shared state contexts and renders whichever page
/// [`resolve_page`] picks for the current session. The page is only rebuilt
/// when the choice (or the product being shown) changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let ui =
        RwSignal::new(UiState { dark_mode: dark_mode::read_preference(), ..UiState::default() });
    let toasts = RwSignal::new(ToastState::default());
    let notifications = RwSignal::new(NotificationsState::new(fixtures::notifications()));

    provide_context(session);
    provide_context(ui);
    provide_context(toasts);
    provide_context(notifications);
    provide_context(MockLatency::from_env());

    dark_mode::apply(ui.get_untracked().dark_mode);

    let current = Memo::new(move |_| {
        session.with(|s| (resolve_page(s), s.product_params().map(|p| p.post_id.clone())))
    });

    view! {
        <Stylesheet id="marketplace" href="/pkg/marketplace.css"/>
        <Title text="Marketplace"/>

        <div class="app">
            {move || {
                let (page, post_id) = current.get();
                log::debug!("rendering {page:?}");
                match page {
                    Page::Login => view! { <LoginPage/> }.into_any(),
                    Page::Register => view! { <RegisterPage/> }.into_any(),
                    Page::Home => view! { <HomePage/> }.into_any(),
                    Page::Product => {
                        view! { <ProductPage post_id=post_id.unwrap_or_default()/> }.into_any()
                    }
                    Page::Notifications => view! { <NotificationsPage/> }.into_any(),
                    Page::Profile => view! { <ProfilePage/> }.into_any(),
                    Page::Orders => view! { <OrdersPage/> }.into_any(),
                }
            }}
            <RegisterPrompt/>
            <Toaster/>
        </div>
    }
}

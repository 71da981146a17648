//! Home feed with sort, categories, and sidebars.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::post_card::PostCard;
use crate::net::fixtures;
use crate::state::feed::{FeedState, SortOrder};
use crate::state::session::SessionState;
use crate::state::ui::UiState;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let feed = RwSignal::new(FeedState::new(fixtures::feed_posts()));

    let greeting = move || {
        session.with(|s| match s.current_user() {
            Some(user) => format!("Hi, {}", user.name),
            None => "You are browsing as a guest".to_owned(),
        })
    };

    view! {
        <div class="page home-page">
            <Header/>
            <div class="home-page__layout">
                <aside class="home-page__sidebar">
                    <h3>"Categories"</h3>
                    <ul class="home-page__categories">
                        {fixtures::categories()
                            .into_iter()
                            .map(|name| {
                                let selected =
                                    move || feed.with(|f| f.category.as_deref() == Some(name));
                                view! {
                                    <li>
                                        <button
                                            class="home-page__category"
                                            class:is-active=selected
                                            on:click=move |_| {
                                                let next = (!selected()).then(|| name.to_owned());
                                                feed.update(|f| f.set_category(next));
                                            }
                                        >
                                            {name}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </aside>

                <main class="home-page__feed">
                    <div class="home-page__toolbar">
                        <span class="home-page__greeting">{greeting}</span>
                        <select
                            class="input"
                            prop:value=move || feed.with(|f| f.sort.as_str())
                            on:change=move |ev| {
                                let sort = SortOrder::parse(&event_target_value(&ev));
                                feed.update(|f| f.set_sort(sort));
                            }
                        >
                            {SortOrder::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <Show when=move || session.with(SessionState::is_guest)>
                        <div class="home-page__banner">
                            <p>"Create an account to vote, save listings, and order."</p>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| ui.update(UiState::prompt_register)
                            >
                                "Sign up"
                            </button>
                        </div>
                    </Show>
                    <For
                        each=move || {
                            feed.with(|f| f.posts.iter().map(|p| p.id.clone()).collect::<Vec<_>>())
                        }
                        key=String::clone
                        let:id
                    >
                        <PostCard id=id feed=feed/>
                    </For>
                </main>

                <aside class="home-page__sidebar">
                    <h3>"Trending"</h3>
                    <ul class="home-page__trending">
                        {fixtures::trending_tags()
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <li>
                                        <span>"#" {t.tag}</span>
                                        <span class="home-page__count">
                                            {format!("{} posts", t.count)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <h3>"Suggested shops"</h3>
                    <ul class="home-page__sellers">
                        {fixtures::suggested_sellers()
                            .into_iter()
                            .map(|s| {
                                let verified = s.verified;
                                view! {
                                    <li class="home-page__seller">
                                        <span>{s.name}</span>
                                        <Show when=move || verified>
                                            <span class="home-page__verified">"\u{2713}"</span>
                                        </Show>
                                        <span class="home-page__count">
                                            {format!("{} followers", s.followers)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </aside>
            </div>
        </div>
    }
}

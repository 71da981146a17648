//! Feed card for a single listing.

use leptos::prelude::*;

use crate::state::feed::{FeedState, Post};
use crate::state::session::{Route, SessionState};
use crate::state::ui::UiState;

/// A listing card. Reads the post from `feed` by id so votes and saves
/// re-render only this card.
///
/// Voting and saving need an account; guests get the register prompt.
#[component]
pub fn PostCard(id: String, feed: RwSignal<FeedState>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let key = id.clone();
    let post = Memo::new(move |_| feed.with(|f| f.posts.iter().find(|p| p.id == key).cloned()));

    let act = move |change: fn(&mut Post)| {
        if session.with_untracked(SessionState::is_guest) {
            ui.update(UiState::prompt_register);
            return;
        }
        let id = id.clone();
        feed.update(|f| {
            if let Some(p) = f.post_mut(&id) {
                change(p);
            }
        });
    };
    let act = StoredValue::new(act);

    view! {
        {move || {
            post.get()
                .map(|p| {
                    let open_id = p.id.clone();
                    let cover = p.images.first().cloned().unwrap_or_default();
                    let score = p.score();
                    let verified = p.seller.verified;
                    view! {
                        <article class="post-card">
                            <header class="post-card__seller">
                                <span class="post-card__seller-name">{p.seller.name.clone()}</span>
                                <Show when=move || verified>
                                    <span class="post-card__verified" title="Verified shop">
                                        "\u{2713}"
                                    </span>
                                </Show>
                                <span class="post-card__time">{p.timestamp.clone()}</span>
                            </header>
                            <button
                                class="post-card__body"
                                on:click=move |_| {
                                    session.update(|s| s.navigate(Route::product(open_id.clone())));
                                }
                            >
                                <img class="post-card__image" src=cover alt=p.title.clone()/>
                                <h2 class="post-card__title">{p.title.clone()}</h2>
                                <p class="post-card__description">{p.description.clone()}</p>
                            </button>
                            <div class="post-card__meta">
                                {p
                                    .price_label()
                                    .map(|label| {
                                        view! { <span class="post-card__price">{label}</span> }
                                    })}
                                <span class="post-card__stock">
                                    {format!("{} in stock", p.stock)}
                                </span>
                            </div>
                            <ul class="post-card__tags">
                                {p
                                    .tags
                                    .iter()
                                    .map(|t| view! { <li>"#" {t.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <footer class="post-card__actions">
                                <button
                                    class="btn btn--icon"
                                    class:is-active=p.upvoted
                                    title="Upvote"
                                    on:click=move |_| act.with_value(|a| a(Post::upvote))
                                >
                                    "\u{25b2}"
                                </button>
                                <span class="post-card__score">{score}</span>
                                <button
                                    class="btn btn--icon"
                                    class:is-active=p.downvoted
                                    title="Downvote"
                                    on:click=move |_| act.with_value(|a| a(Post::downvote))
                                >
                                    "\u{25bc}"
                                </button>
                                <span class="post-card__comments">
                                    {format!("{} comments", p.comments)}
                                </span>
                                <button
                                    class="btn btn--icon"
                                    class:is-active=p.saved
                                    title="Save"
                                    on:click=move |_| act.with_value(|a| a(Post::toggle_saved))
                                >
                                    {if p.saved { "Saved" } else { "Save" }}
                                </button>
                            </footer>
                        </article>
                    }
                })
        }}
    }
}

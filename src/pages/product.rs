//! Product detail page for a feed post.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::net::mock_api::MockApi;
use crate::state::product::{
    Comment, CommentSort, Gate, ProductAction, ProductDetail, ProductState, sorted_comments,
};
use crate::state::session::{Route, SessionState};
use crate::state::toast::ToastState;
use crate::state::ui::UiState;
use crate::util::format::{discount_percent, format_vnd};

/// Product page for `post_id`. Unknown ids show a not-found notice.
#[component]
pub fn ProductPage(post_id: String) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let body = match MockApi::product(&post_id) {
        Ok(detail) => view! { <ProductView detail=detail/> }.into_any(),
        Err(err) => {
            log::warn!("product page: {err}");
            view! {
                <div class="empty-state">
                    <p>"This listing is no longer available."</p>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| session.update(|s| s.navigate(Route::Home))
                    >
                        "Back to home"
                    </button>
                </div>
            }
                .into_any()
        }
    };

    view! {
        <div class="page product-page">
            <Header/>
            {body}
        </div>
    }
}

#[component]
fn ProductView(detail: ProductDetail) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let state = RwSignal::new(ProductState::new(&detail));

    let attempt = move |action: ProductAction| {
        let is_member = session.with_untracked(SessionState::is_authenticated);
        let gate = state.try_update(|s| s.attempt(action, is_member)).unwrap_or(Gate::Ignored);
        match (gate, action) {
            (Gate::PromptRegister, _) => ui.update(UiState::prompt_register),
            (Gate::Allowed, ProductAction::AddToCart) => toasts.update(|t| {
                t.success("Added to cart");
            }),
            (Gate::Allowed, ProductAction::BuyNow) => toasts.update(|t| {
                t.success("Order placed");
            }),
            _ => {}
        }
    };

    let images = detail.images.clone();
    let image_count = images.len();
    let image = move || images.get(state.with(|s| s.image_index)).cloned().unwrap_or_default();
    let comments = StoredValue::new(detail.comments.clone());
    let visible_comments =
        move || comments.with_value(|c| sorted_comments(c, state.with(|s| s.comment_sort)));
    let discount =
        detail.original_price.map(|original| (original, discount_percent(detail.price, original)));
    let shop = detail.shop.clone();
    let shop_stats = format!(
        "\u{2605} {:.1} ({} ratings) \u{b7} {} followers",
        shop.rating, shop.total_ratings, shop.followers
    );

    view! {
        <nav class="breadcrumb">
            <button
                class="btn btn--link"
                on:click=move |_| session.update(|s| s.navigate(Route::Home))
            >
                "Home"
            </button>
            " / "
            <span>{detail.title.clone()}</span>
        </nav>
        <div class="product-page__layout">
            <section class="product-page__gallery">
                <img class="product-page__image" src=image alt=detail.title.clone()/>
                <div class="product-page__gallery-nav">
                    <button
                        class="btn btn--icon"
                        title="Previous image"
                        on:click=move |_| state.update(ProductState::prev_image)
                    >
                        "\u{2039}"
                    </button>
                    <span>
                        {move || format!("{} / {}", state.with(|s| s.image_index) + 1, image_count)}
                    </span>
                    <button
                        class="btn btn--icon"
                        title="Next image"
                        on:click=move |_| state.update(ProductState::next_image)
                    >
                        "\u{203a}"
                    </button>
                </div>
            </section>

            <section class="product-page__info">
                <h1>{detail.title.clone()}</h1>
                <div class="product-page__stats">
                    <span>{format!("\u{25b2} {}", detail.upvotes)}</span>
                    <span>{format!("\u{25bc} {}", detail.downvotes)}</span>
                    <span>{format!("{} sold", detail.sold)}</span>
                </div>
                <div class="product-page__price">
                    <strong>{format_vnd(detail.price)}</strong>
                    {discount
                        .map(|(original, percent)| {
                            view! {
                                <span class="product-page__original">{format_vnd(original)}</span>
                                <span class="badge badge--sale">{format!("-{percent}%")}</span>
                            }
                        })}
                </div>
                <p class="product-page__description">{detail.description.clone()}</p>
                <ul class="product-page__tags">
                    {detail
                        .tags
                        .iter()
                        .map(|t| view! { <li>"#" {t.clone()}</li> })
                        .collect::<Vec<_>>()}
                </ul>

                <div class="product-page__quantity">
                    <button
                        class="btn btn--icon"
                        on:click=move |_| state.update(|s| s.change_quantity(-1))
                    >
                        "\u{2212}"
                    </button>
                    <span>{move || state.with(|s| s.quantity)}</span>
                    <button
                        class="btn btn--icon"
                        on:click=move |_| state.update(|s| s.change_quantity(1))
                    >
                        "+"
                    </button>
                    <span class="product-page__stock">{format!("{} available", detail.stock)}</span>
                </div>

                <div class="product-page__actions">
                    <button class="btn" on:click=move |_| attempt(ProductAction::AddToCart)>
                        "Add to cart"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| attempt(ProductAction::BuyNow)
                    >
                        "Buy now"
                    </button>
                    <button
                        class="btn btn--icon"
                        class:is-active=move || state.with(|s| s.saved)
                        on:click=move |_| attempt(ProductAction::Save)
                    >
                        {move || if state.with(|s| s.saved) { "Saved" } else { "Save" }}
                    </button>
                </div>
            </section>

            <section class="product-page__shop">
                <h2>{shop.seller.name.clone()}</h2>
                <p>{shop_stats}</p>
                <p class="product-page__joined">{shop.joined.clone()}</p>
                <button class="btn" on:click=move |_| attempt(ProductAction::Follow)>
                    {move || if state.with(|s| s.following) { "Following" } else { "Follow" }}
                </button>
            </section>

            <section class="product-page__comments">
                <header class="product-page__comments-header">
                    <h2>"Comments"</h2>
                    <select
                        class="input"
                        on:change=move |ev| {
                            let sort = if event_target_value(&ev) == "newest" {
                                CommentSort::Newest
                            } else {
                                CommentSort::Top
                            };
                            state.update(|s| s.comment_sort = sort);
                        }
                    >
                        <option value="top">"Top"</option>
                        <option value="newest">"Newest"</option>
                    </select>
                </header>
                <div class="product-page__comment-form">
                    <textarea
                        class="input"
                        placeholder="Ask the seller a question"
                        prop:value=move || state.with(|s| s.comment.clone())
                        on:input=move |ev| state.update(|s| s.comment = event_target_value(&ev))
                    ></textarea>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| attempt(ProductAction::Comment)
                    >
                        "Post"
                    </button>
                </div>
                <ul class="product-page__comment-list">
                    {move || visible_comments().into_iter().map(comment_view).collect::<Vec<_>>()}
                </ul>
            </section>
        </div>
    }
}

fn comment_view(comment: Comment) -> impl IntoView {
    view! {
        <li class="comment">
            <div class="comment__head">
                <strong>{comment.author}</strong>
                <span class="comment__time">{comment.timestamp}</span>
            </div>
            <p>{comment.content}</p>
            <span class="comment__votes">{format!("\u{25b2} {}", comment.upvotes)}</span>
            <ul class="comment__replies">
                {comment
                    .replies
                    .into_iter()
                    .map(|reply| {
                        view! {
                            <li class="comment comment--reply">
                                <div class="comment__head">
                                    <strong>{reply.author}</strong>
                                    <span class="comment__time">{reply.timestamp}</span>
                                </div>
                                <p>{reply.content}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </li>
    }
}

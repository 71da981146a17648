//! Order history with status filter, search, and a detail modal.

use leptos::prelude::*;

use crate::components::header::{Header, go_to};
use crate::components::order_detail::OrderDetail;
use crate::net::fixtures;
use crate::state::orders::{Order, OrderStatus, OrdersState, StatusFilter};
use crate::state::session::{Route, SessionState};
use crate::util::format::format_vnd;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let orders = RwSignal::new(OrdersState::new(fixtures::orders()));

    let visible = move || orders.with(|o| o.visible().into_iter().cloned().collect::<Vec<Order>>());
    let selected = Memo::new(move |_| orders.with(|o| o.selected_order().cloned()));
    let close = Callback::new(move |()| orders.update(|o| o.selected = None));
    let open = move |id: String| orders.update(|o| o.selected = Some(id));

    view! {
        <div class="page orders-page">
            <Header/>
            <main class="orders-page__main">
                <nav class="breadcrumb">
                    <button class="btn btn--link" on:click=move |_| go_to(session, Route::Home)>
                        "Home"
                    </button>
                    " / "
                    <button class="btn btn--link" on:click=move |_| go_to(session, Route::Profile)>
                        "Profile"
                    </button>
                    " / "
                    <span>"Orders"</span>
                </nav>
                <h1>"My orders"</h1>
                <div class="orders-page__filters">
                    <select
                        class="input"
                        prop:value=move || orders.with(|o| o.filter.as_str())
                        on:change=move |ev| {
                            let filter = StatusFilter::parse(&event_target_value(&ev));
                            orders.update(|o| o.filter = filter);
                        }
                    >
                        <option value=StatusFilter::All.as_str()>"All"</option>
                        {OrderStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="input"
                        type="search"
                        placeholder="Search by order code or shop"
                        prop:value=move || orders.with(|o| o.query.clone())
                        on:input=move |ev| orders.update(|o| o.query = event_target_value(&ev))
                    />
                </div>
                {move || {
                    let list = visible();
                    if list.is_empty() {
                        return view! { <p class="empty-state">"No orders match."</p> }.into_any();
                    }
                    view! {
                        <ul class="orders-page__list">
                            {list
                                .into_iter()
                                .map(|order| {
                                    let id = order.id.clone();
                                    let badge = format!("badge badge--{}", order.status.badge());
                                    let code = format!("{} \u{b7} {}", order.code, order.date);
                                    view! {
                                        <li class="order-card">
                                            <header class="order-card__header">
                                                <span>{order.seller.name.clone()}</span>
                                                <span class=badge>
                                                    {order.status.label()}
                                                </span>
                                            </header>
                                            <p class="order-card__code">{code}</p>
                                            <p>{format!("{} items", order.item_count())}</p>
                                            <footer class="order-card__footer">
                                                <strong>{format_vnd(order.total)}</strong>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| open(id.clone())
                                                >
                                                    "View details"
                                                </button>
                                            </footer>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }}
            </main>
            {move || {
                selected.get().map(|order| view! { <OrderDetail order=order on_close=close/> })
            }}
        </div>
    }
}

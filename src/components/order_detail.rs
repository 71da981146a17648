//! Modal with the full detail of one order.

use leptos::prelude::*;

use crate::state::orders::{Order, StepState};
use crate::util::format::format_vnd;

#[component]
pub fn OrderDetail(order: Order, on_close: Callback<()>) -> impl IntoView {
    let steps = order.timeline_steps();
    let item_count = order.item_count();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog order-detail" on:click=move |ev| ev.stop_propagation()>
                <header class="order-detail__header">
                    <h2>"Order " {order.code.clone()}</h2>
                    <span class=format!("badge badge--{}", order.status.badge())>
                        {order.status.label()}
                    </span>
                    <button
                        class="btn btn--icon dialog__close"
                        title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        "\u{2715}"
                    </button>
                </header>

                <ol class="order-detail__timeline">
                    {steps
                        .into_iter()
                        .map(|step| {
                            let state = match step.state {
                                StepState::Done => "is-done",
                                StepState::Active => "is-active",
                                StepState::Upcoming => "is-upcoming",
                            };
                            view! {
                                <li class=format!("order-detail__step {state}")>
                                    <span class="order-detail__step-label">{step.label}</span>
                                    <span class="order-detail__step-time">
                                        {step.time.unwrap_or_default()}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>

                <section class="order-detail__section">
                    <h3>{order.seller.name.clone()}</h3>
                    <ul class="order-detail__lines">
                        {order
                            .products
                            .iter()
                            .map(|line| {
                                view! {
                                    <li class="order-detail__line">
                                        <img src=line.image.clone() alt=line.name.clone()/>
                                        <div>
                                            <p class="order-detail__name">{line.name.clone()}</p>
                                            <p class="order-detail__variant">
                                                {line.variant.clone()}
                                            </p>
                                            <p>{format!("x{}", line.quantity)}</p>
                                        </div>
                                        <span class="order-detail__price">
                                            {format_vnd(line.price)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>

                <section class="order-detail__section">
                    <h3>"Shipping"</h3>
                    <p>
                        {order.shipping.recipient.clone()}
                        " \u{b7} "
                        {order.shipping.phone.clone()}
                    </p>
                    <p>{order.shipping.address.clone()}</p>
                </section>

                <footer class="order-detail__footer">
                    <span>{format!("{item_count} items \u{b7} {}", order.payment_method)}</span>
                    <strong>{format_vnd(order.total)}</strong>
                </footer>
            </div>
        </div>
    }
}

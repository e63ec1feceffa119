//! Profile page: account details and order history.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use menu::{Order, OrderStatus};

use crate::state::session::SessionStore;

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Placed => "Placed",
        OrderStatus::Preparing => "Preparing",
        OrderStatus::Delivered => "Delivered",
        OrderStatus::Cancelled => "Cancelled",
    }
}

/// Rendered only behind a gate, so a user is always present once resolved.
#[component]
pub fn ProfilePage(session: SessionStore) -> impl IntoView {
    let orders = LocalResource::new(crate::net::api::fetch_orders);
    let navigate = use_navigate();
    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate("/", NavigateOptions::default());
    });

    view! {
        <div class="profile-page">
            {move || {
                session
                    .user()
                    .map(|user| {
                        view! {
                            <section class="profile-card">
                                <h1>{user.name.clone()}</h1>
                                <p class="profile-card__email">{user.email.clone()}</p>
                                <p class="profile-card__role">"Role: " {user.role.as_str()}</p>
                                <button class="btn" on:click=move |_| on_logout.run(())>"Log out"</button>
                            </section>
                        }
                    })
            }}
            <section class="profile-page__orders">
                <h2>"Your orders"</h2>
                <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                    {move || {
                        orders
                            .get()
                            .map(|result| match result {
                                Ok(list) if list.is_empty() => {
                                    view! { <p class="notice">"No orders yet."</p> }.into_any()
                                }
                                Ok(list) => {
                                    view! {
                                        <ul class="order-list">
                                            {list.into_iter().map(|order| view! { <OrderRow order=order/> }).collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(e) => view! { <p class="notice notice--error">{e.message}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let created = order.created_at.get(..10).unwrap_or(&order.created_at).to_owned();
    view! {
        <li class="order">
            <div class="order__header">
                <span class="order__date">{created}</span>
                <span class="order__status">{status_label(order.status)}</span>
                <span class="order__total">{menu::format_price(order.total_cents)}</span>
            </div>
            <ul class="order__lines">
                {order
                    .items
                    .into_iter()
                    .map(|line| {
                        view! {
                            <li>
                                {line.quantity} " x " {line.name} " "
                                <span class="order__price">{menu::format_price(line.unit_price_cents)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </li>
    }
}

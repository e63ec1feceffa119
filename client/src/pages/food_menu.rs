//! Menu page: paginated dishes, category filter, cart, and checkout.
//!
//! Browsing is public. Checkout runs the same gate policy as protected
//! routes, but only when the customer presses "Place order".

#[cfg(test)]
#[path = "food_menu_test.rs"]
mod food_menu_test;

use access::{GateDecision, GatePolicy};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};
use menu::{DEFAULT_PER_PAGE, Food, FoodCategory};

use crate::components::food_card::FoodCard;
use crate::components::pager::Pager;
use crate::state::cart::Cart;
use crate::state::session::SessionStore;
use crate::util::pagination::Pagination;

/// Page number from `?page=`; anything unparsable or zero is page 1.
fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok()).unwrap_or(1).max(1)
}

/// Category from `?category=`; unknown values and `all` mean no filter.
fn parse_category(raw: Option<&str>) -> Option<FoodCategory> {
    raw.and_then(|c| c.parse().ok())
}

/// Canonical menu URL, omitting defaults.
fn menu_href(page: u32, category: Option<FoodCategory>) -> String {
    let mut params = Vec::new();
    if page > 1 {
        params.push(format!("page={page}"));
    }
    if let Some(category) = category {
        params.push(format!("category={}", category.as_str()));
    }
    if params.is_empty() { "/menu".to_owned() } else { format!("/menu?{}", params.join("&")) }
}

#[component]
pub fn MenuPage(session: SessionStore, cart: RwSignal<Cart>) -> impl IntoView {
    let query = use_query_map();
    let page = Memo::new(move |_| query.with(|q| parse_page(q.get("page").as_deref())));
    let category = Memo::new(move |_| query.with(|q| parse_category(q.get("category").as_deref())));
    let foods = LocalResource::new(move || crate::net::api::fetch_foods(page.get(), DEFAULT_PER_PAGE, category.get()));

    let navigate = use_navigate();
    let go_to = Callback::new(move |(page, category): (u32, Option<FoodCategory>)| {
        navigate(&menu_href(page, category), NavigateOptions::default());
    });
    let on_page = Callback::new(move |p: u32| go_to.run((p, category.get_untracked())));
    let on_add = Callback::new(move |food: Food| cart.update(|c| c.add(&food)));

    view! {
        <div class="menu-page">
            <header class="menu-page__header">
                <h1>"Menu"</h1>
                <select
                    class="menu-page__filter"
                    prop:value=move || category.get().map_or("all", FoodCategory::as_str)
                    on:change=move |ev| go_to.run((1, parse_category(Some(event_target_value(&ev).as_str()))))
                >
                    <option value="all">"Everything"</option>
                    {FoodCategory::ALL
                        .iter()
                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </header>
            <div class="menu-page__layout">
                <section class="menu-page__list">
                    <Suspense fallback=move || view! { <p>"Loading dishes..."</p> }>
                        {move || {
                            foods
                                .get()
                                .map(|result| match result {
                                    Ok(food_page) => {
                                        let pagination = Pagination::new(food_page.page, food_page.per_page, food_page.total);
                                        let empty = food_page.items.is_empty();
                                        view! {
                                            <Show when=move || empty>
                                                <p class="notice">"Nothing here yet."</p>
                                            </Show>
                                            <div class="food-grid">
                                                {food_page
                                                    .items
                                                    .into_iter()
                                                    .map(|food| view! { <FoodCard food=food on_add=on_add/> })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                            <Pager pagination=pagination on_change=on_page/>
                                        }
                                            .into_any()
                                    }
                                    Err(e) => view! { <p class="notice notice--error">{e.message}</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                </section>
                <CartPanel session=session cart=cart return_path=Signal::derive(move || menu_href(page.get(), category.get()))/>
            </div>
        </div>
    }
}

#[component]
fn CartPanel(session: SessionStore, cart: RwSignal<Cart>, return_path: Signal<String>) -> impl IntoView {
    let placing = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let on_place = Callback::new(move |()| {
        if placing.get_untracked() || cart.with_untracked(Cart::is_empty) {
            return;
        }
        let decision = access::evaluate(&session.snapshot(), &GatePolicy::authenticated(), &return_path.get_untracked());
        match decision {
            GateDecision::Wait => return,
            GateDecision::Redirect { target, .. } => {
                navigate(&target, NavigateOptions::default());
                return;
            }
            GateDecision::Render => {}
        }

        placing.set(true);
        status.set(None);
        let request = cart.with_untracked(Cart::to_order_request);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::place_order(&request).await {
                Ok(order) => {
                    cart.update(Cart::clear);
                    status.set(Some(format!("Order placed. Total {}.", menu::format_price(order.total_cents))));
                }
                Err(e) if e.is_unauthenticated() => {
                    session.expire();
                    status.set(Some("Your session expired. Sign in again to order.".to_owned()));
                }
                Err(e) => status.set(Some(e.message)),
            }
            placing.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            placing.set(false);
        }
    });

    view! {
        <aside class="cart">
            <h2>"Your order"</h2>
            <Show
                when=move || !cart.with(Cart::is_empty)
                fallback=|| view! { <p class="cart__empty">"Add a dish to get started."</p> }
            >
                <ul class="cart__lines">
                    {move || {
                        cart.with(|c| c.lines().to_vec())
                            .into_iter()
                            .map(|line| {
                                let id_minus = line.food_id.clone();
                                let id_plus = line.food_id.clone();
                                let id_remove = line.food_id.clone();
                                let quantity = line.quantity;
                                view! {
                                    <li class="cart__line">
                                        <span class="cart__name">{line.name.clone()}</span>
                                        <button on:click=move |_| cart.update(|c| c.set_quantity(&id_minus, quantity - 1))>"-"</button>
                                        <span class="cart__qty">{quantity}</span>
                                        <button on:click=move |_| cart.update(|c| c.set_quantity(&id_plus, quantity + 1))>"+"</button>
                                        <span class="cart__subtotal">{menu::format_price(line.subtotal_cents())}</span>
                                        <button class="cart__remove" on:click=move |_| cart.update(|c| c.remove(&id_remove))>
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <p class="cart__total">"Total " {move || menu::format_price(cart.with(Cart::total_cents))}</p>
            </Show>
            <button
                class="btn btn--primary cart__place"
                disabled=move || placing.get() || cart.with(Cart::is_empty) || session.is_loading()
                on:click=move |_| on_place.run(())
            >
                {move || if placing.get() { "Placing..." } else { "Place order" }}
            </button>
            {move || status.get().map(|s| view! { <p class="cart__status">{s}</p> })}
        </aside>
    }
}

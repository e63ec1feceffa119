//! Top navigation. Links depend on who is signed in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::cart::Cart;
use crate::state::session::SessionStore;

#[component]
pub fn NavBar(session: SessionStore, cart: RwSignal<Cart>) -> impl IntoView {
    let navigate = use_navigate();
    let on_logout = Callback::new(move |()| {
        session.logout();
        navigate("/", NavigateOptions::default());
    });
    let is_admin = move || session.user().is_some_and(|u| u.is_admin());
    let signed_in = move || session.user().is_some();
    let cart_count = move || cart.with(Cart::item_count);

    view! {
        <header class="nav">
            <A href="/" attr:class="nav__brand">"Forkful"</A>
            <nav class="nav__links">
                <A href="/menu">"Menu"</A>
                <A href="/support">"Support"</A>
                <Show when=is_admin>
                    <A href="/admin/create">"New dish"</A>
                </Show>
            </nav>
            <div class="nav__account">
                <A href="/menu" attr:class="nav__cart">
                    "Cart (" {cart_count} ")"
                </A>
                <Show
                    when=signed_in
                    fallback=move || {
                        view! {
                            <Show when=move || !session.is_loading()>
                                <A href="/auth">"Sign in"</A>
                            </Show>
                        }
                    }
                >
                    <A href="/profile">{move || session.user().map(|u| u.name).unwrap_or_default()}</A>
                    <button class="nav__logout" on:click=move |_| on_logout.run(())>
                        "Log out"
                    </button>
                </Show>
            </div>
        </header>
    }
}

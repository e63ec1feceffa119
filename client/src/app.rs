//! Root application component with routing.
//!
//! The session store and cart are created here and passed down as props.
//! Each protected route shows one of the three gate styles.

use access::{GatePolicy, Role};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    admin_food::AdminFoodPage, food_menu::MenuPage, home::HomePage, login::LoginPage, not_found::NotFoundPage,
    profile::ProfilePage, support::SupportPage, unauthorized::UnauthorizedPage,
};
use crate::state::cart::Cart;
use crate::state::session::SessionStore;
use crate::util::auth::with_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let cart = RwSignal::new(Cart::default());
    session.resolve();

    let admin_create = with_auth(AdminFoodPage, session, GatePolicy::require_roles([Role::Admin]));

    view! {
        <Stylesheet id="leptos" href="/pkg/forkful.css"/>
        <Title text="Forkful"/>

        <Router>
            <NavBar session=session cart=cart/>
            <main class="page">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("menu") view=move || view! { <MenuPage session=session cart=cart/> }/>
                    <Route path=StaticSegment("auth") view=move || view! { <LoginPage session=session/> }/>
                    <Route
                        path=StaticSegment("profile")
                        view=move || {
                            view! {
                                <ProtectedRoute session=session>
                                    <ProfilePage session=session/>
                                </ProtectedRoute>
                            }
                        }
                    />
                    <Route path=(StaticSegment("admin"), StaticSegment("create")) view=admin_create/>
                    <Route path=StaticSegment("support") view=move || view! { <SupportPage session=session/> }/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                </Routes>
            </main>
        </Router>
    }
}

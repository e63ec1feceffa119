use leptos::prelude::*;
use leptos_router::components::A;

/// Where role-gated routes send signed-in users who lack the role.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <h1>"Access denied"</h1>
            <p>"Your account doesn't have permission to view that page."</p>
            <A href="/">"Back to the home page"</A>
        </div>
    }
}

//! Landing page: hero, a few dishes, and the FAQ bubble.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::faq_widget::FaqWidget;
use crate::components::food_card::FoodCard;

const PREVIEW_COUNT: u32 = 6;

#[component]
pub fn HomePage() -> impl IntoView {
    let preview = LocalResource::new(|| crate::net::api::fetch_foods(1, PREVIEW_COUNT, None));

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Dinner, sorted."</h1>
                <p>"Seasonal plates from our kitchen, ready in about half an hour."</p>
                <A href="/menu" attr:class="btn btn--primary">"See the menu"</A>
            </section>
            <section class="home-page__preview">
                <h2>"Popular right now"</h2>
                <Suspense fallback=move || view! { <p>"Loading dishes..."</p> }>
                    {move || {
                        preview
                            .get()
                            .map(|result| match result {
                                Ok(page) => {
                                    view! {
                                        <div class="food-grid">
                                            {page
                                                .items
                                                .into_iter()
                                                .map(|food| view! { <FoodCard food=food/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                                Err(_) => view! { <p class="notice">"The menu is unavailable right now."</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
            <FaqWidget/>
        </div>
    }
}

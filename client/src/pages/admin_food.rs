//! Admin form for adding a dish to the menu.
//!
//! Reachable only through `with_auth` with the admin role; the server checks
//! the role again on `POST /api/foods`.

use leptos::prelude::*;
use leptos_router::components::A;
use menu::{FieldError, FoodCategory};

use crate::state::food_form::{FoodDraft, field_message, validate_food_draft};

#[component]
pub fn AdminFoodPage() -> impl IntoView {
    let draft = RwSignal::new(FoodDraft::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let new_food = match draft.with_untracked(validate_food_draft) {
            Ok(food) => food,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(Vec::new());
        notice.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_food(&new_food).await {
                Ok(food) => {
                    log::info!("created food {}", food.id);
                    notice.set(Some(format!("Added {} at {}.", food.name, menu::format_price(food.price_cents))));
                    draft.set(FoodDraft::default());
                }
                Err(e) => {
                    notice.set(Some(e.message.clone()));
                    errors.set(e.fields);
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_food;
            busy.set(false);
        }
    };

    let error_for = move |field: &'static str| move || errors.with(|list| field_message(list, field));

    view! {
        <div class="admin-page">
            <h1>"New dish"</h1>
            <form class="food-form" on:submit=on_submit>
                <label class="food-form__field">
                    "Name"
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.name.clone())
                        on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                    />
                    <span class="food-form__error">{error_for("name")}</span>
                </label>
                <label class="food-form__field">
                    "Description"
                    <textarea
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    <span class="food-form__error">{error_for("description")}</span>
                </label>
                <label class="food-form__field">
                    "Category"
                    <select
                        prop:value=move || draft.with(|d| d.category.clone())
                        on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    >
                        {FoodCategory::ALL
                            .iter()
                            .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <span class="food-form__error">{error_for("category")}</span>
                </label>
                <label class="food-form__field">
                    "Price"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="12.50"
                        prop:value=move || draft.with(|d| d.price.clone())
                        on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                    />
                    <span class="food-form__error">{error_for("price")}</span>
                </label>
                <label class="food-form__field">
                    "Image URL"
                    <input
                        type="url"
                        placeholder="https://"
                        prop:value=move || draft.with(|d| d.image_url.clone())
                        on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
                    />
                    <span class="food-form__error">{error_for("image_url")}</span>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Add dish" }}
                </button>
            </form>
            {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
            <A href="/menu">"Back to the menu"</A>
        </div>
    }
}

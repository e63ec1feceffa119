use leptos::prelude::*;
use menu::Food;

/// A menu entry with an optional "add to cart" action.
#[component]
pub fn FoodCard(food: Food, #[prop(optional)] on_add: Option<Callback<Food>>) -> impl IntoView {
    let price = menu::format_price(food.price_cents);
    let category = food.category.label();
    let image = food.image_url.clone();
    let name = food.name.clone();
    let description = food.description.clone();

    view! {
        <article class="food-card">
            {image.map(|src| view! { <img class="food-card__image" src=src alt=name.clone() loading="lazy"/> })}
            <div class="food-card__body">
                <span class="food-card__category">{category}</span>
                <h3 class="food-card__name">{name}</h3>
                <p class="food-card__description">{description}</p>
            </div>
            <div class="food-card__footer">
                <span class="food-card__price">{price}</span>
                {on_add.map(|on_add| {
                    let food = food.clone();
                    view! {
                        <button class="food-card__add" on:click=move |_| on_add.run(food.clone())>
                            "Add to cart"
                        </button>
                    }
                })}
            </div>
        </article>
    }
}

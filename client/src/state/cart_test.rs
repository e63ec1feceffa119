use menu::FoodCategory;

use super::*;

fn food(id: &str, price_cents: i64) -> Food {
    Food {
        id: id.to_owned(),
        name: format!("Food {id}"),
        description: String::new(),
        category: FoodCategory::Main,
        price_cents,
        image_url: None,
        available: true,
    }
}

#[test]
fn add_merges_repeated_food() {
    let mut cart = Cart::default();
    cart.add(&food("a", 500));
    cart.add(&food("a", 500));
    cart.add(&food("b", 250));
    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total_cents(), 1250);
}

#[test]
fn add_caps_quantity() {
    let mut cart = Cart::default();
    for _ in 0..(MAX_ORDER_QUANTITY + 5) {
        cart.add(&food("a", 100));
    }
    assert_eq!(cart.item_count(), MAX_ORDER_QUANTITY);
}

#[test]
fn set_quantity_zero_removes_line() {
    let mut cart = Cart::default();
    cart.add(&food("a", 100));
    cart.add(&food("b", 100));
    cart.set_quantity("a", 0);
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].food_id, "b");
}

#[test]
fn set_quantity_ignores_unknown_food() {
    let mut cart = Cart::default();
    cart.set_quantity("missing", 3);
    assert!(cart.is_empty());
}

#[test]
fn order_request_preserves_line_order() {
    let mut cart = Cart::default();
    cart.add(&food("b", 100));
    cart.add(&food("a", 100));
    cart.set_quantity("a", 4);
    let request = cart.to_order_request();
    let ids: Vec<_> = request.items.iter().map(|i| (i.food_id.as_str(), i.quantity)).collect();
    assert_eq!(ids, vec![("b", 1), ("a", 4)]);
}

#[test]
fn clear_empties_cart() {
    let mut cart = Cart::default();
    cart.add(&food("a", 100));
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total_cents(), 0);
}

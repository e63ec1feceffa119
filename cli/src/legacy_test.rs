use super::*;

#[test]
fn map_category_handles_aliases() {
    assert_eq!(map_category("Appetizer"), Some(FoodCategory::Starter));
    assert_eq!(map_category(" beverage "), Some(FoodCategory::Drink));
    assert_eq!(map_category("Entree"), Some(FoodCategory::Main));
    assert_eq!(map_category("sides"), Some(FoodCategory::Side));
    assert_eq!(map_category("brunch"), None);
    assert_eq!(map_category(""), None);
}

#[test]
fn plan_import_maps_string_and_number_prices() {
    let json = r#"[
        {"title": "Garlic bread", "desc": "Toasted.", "price": "4.50", "type": "appetizer"},
        {"title": "Lemonade", "price": 3, "type": "beverage", "img": "https://cdn.example.com/l.jpg"},
        {"title": "Steak", "price": 24.99, "type": "main"}
    ]"#;
    let plan = plan_import(json).unwrap();
    assert!(plan.skipped.is_empty(), "{:?}", plan.skipped);
    let prices: Vec<_> = plan.foods.iter().map(|(_, f)| (f.name.as_str(), f.price_cents)).collect();
    assert_eq!(prices, vec![("Garlic bread", 450), ("Lemonade", 300), ("Steak", 2499)]);
    assert_eq!(plan.foods[0].1.category, FoodCategory::Starter);
    assert_eq!(plan.foods[1].1.image_url.as_deref(), Some("https://cdn.example.com/l.jpg"));
}

#[test]
fn plan_import_skips_bad_rows_with_reasons() {
    let json = r#"[
        {"title": "Mystery", "price": "5", "type": "brunch"},
        {"title": "Free lunch", "price": "0", "type": "main"},
        {"title": "No price", "type": "main"},
        {"title": "", "price": "5", "type": "side"},
        {"title": "Soup", "price": "6", "type": "starter"}
    ]"#;
    let plan = plan_import(json).unwrap();
    assert_eq!(plan.foods.len(), 1);
    assert_eq!(plan.foods[0].0, 4);

    let reasons: Vec<_> = plan.skipped.iter().map(|s| (s.index, s.reason.as_str())).collect();
    assert_eq!(reasons[0], (0, "unknown category \"brunch\""));
    assert_eq!(reasons[1], (1, "price must be between $0.01 and $1000.00"));
    assert!(reasons[2].1.starts_with("malformed row"));
    assert_eq!(reasons[3], (3, "name: Name is required."));
    assert_eq!(plan.skipped[1].title, "Free lunch");
}

#[test]
fn plan_import_rejects_non_array() {
    assert!(plan_import(r#"{"title": "Soup"}"#).is_err());
}

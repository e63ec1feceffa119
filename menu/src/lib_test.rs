use super::*;

fn sample_food() -> NewFood {
    NewFood {
        name: "  Margherita  ".to_owned(),
        description: " Tomato, mozzarella, basil ".to_owned(),
        category: FoodCategory::Main,
        price_cents: 1250,
        image_url: Some("  ".to_owned()),
    }
}

// =============================================================================
// Category
// =============================================================================

#[test]
fn category_parses_and_displays() {
    for category in FoodCategory::ALL {
        assert_eq!(category.as_str().parse::<FoodCategory>(), Ok(category));
        assert_eq!(category.to_string(), category.as_str());
    }
    assert!("appetizer".parse::<FoodCategory>().is_err());
}

#[test]
fn food_deserializes_from_api_json() {
    let json = r#"{"id":"f1","name":"Soda","description":"","category":"drink","price_cents":250,"image_url":null,"available":true}"#;
    let food: Food = serde_json::from_str(json).unwrap();
    assert_eq!(food.category, FoodCategory::Drink);
    assert_eq!(food.price_cents, 250);
    assert!(food.image_url.is_none());
}

// =============================================================================
// Prices
// =============================================================================

#[test]
fn parse_price_accepts_common_shapes() {
    assert_eq!(parse_price_cents("12"), Ok(1200));
    assert_eq!(parse_price_cents("12.5"), Ok(1250));
    assert_eq!(parse_price_cents("12.50"), Ok(1250));
    assert_eq!(parse_price_cents(" $0.99 "), Ok(99));
    assert_eq!(parse_price_cents("7."), Ok(700));
}

#[test]
fn parse_price_rejects_bad_input() {
    assert_eq!(parse_price_cents(""), Err(PriceError::Empty));
    assert_eq!(parse_price_cents("$"), Err(PriceError::Empty));
    assert_eq!(parse_price_cents("abc"), Err(PriceError::Malformed));
    assert_eq!(parse_price_cents(".50"), Err(PriceError::Malformed));
    assert_eq!(parse_price_cents("-3"), Err(PriceError::Malformed));
    assert_eq!(parse_price_cents("1.2.3"), Err(PriceError::Malformed));
    assert_eq!(parse_price_cents("1.999"), Err(PriceError::TooManyDecimals));
}

#[test]
fn parse_price_enforces_range() {
    assert_eq!(parse_price_cents("0"), Err(PriceError::OutOfRange));
    assert_eq!(parse_price_cents("0.00"), Err(PriceError::OutOfRange));
    assert_eq!(parse_price_cents("1000"), Ok(MAX_PRICE_CENTS));
    assert_eq!(parse_price_cents("1000.01"), Err(PriceError::OutOfRange));
    assert_eq!(parse_price_cents("99999999999999999999"), Err(PriceError::OutOfRange));
}

#[test]
fn format_price_pads_cents() {
    assert_eq!(format_price(1250), "$12.50");
    assert_eq!(format_price(5), "$0.05");
    assert_eq!(format_price(0), "$0.00");
    assert_eq!(format_price(-100), "-$1.00");
}

// =============================================================================
// validate_new_food
// =============================================================================

#[test]
fn validate_new_food_trims_and_drops_blank_image() {
    let food = validate_new_food(&sample_food()).expect("valid food");
    assert_eq!(food.name, "Margherita");
    assert_eq!(food.description, "Tomato, mozzarella, basil");
    assert!(food.image_url.is_none());
}

#[test]
fn validate_new_food_reports_every_bad_field() {
    let food = NewFood {
        name: "   ".to_owned(),
        description: "x".repeat(MAX_DESCRIPTION_LEN + 1),
        category: FoodCategory::Side,
        price_cents: 0,
        image_url: Some("ftp://files/pic.png".to_owned()),
    };
    let errors = validate_new_food(&food).expect_err("invalid food");
    let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["name", "description", "price", "image_url"]);
}

#[test]
fn validate_new_food_counts_characters_not_bytes() {
    let mut food = sample_food();
    food.name = "é".repeat(MAX_NAME_LEN);
    assert!(validate_new_food(&food).is_ok());
    food.name.push('é');
    assert!(validate_new_food(&food).is_err());
}

#[test]
fn validate_new_food_accepts_https_image() {
    let mut food = sample_food();
    food.image_url = Some("https://cdn.example.com/pizza.jpg".to_owned());
    let food = validate_new_food(&food).expect("valid food");
    assert_eq!(food.image_url.as_deref(), Some("https://cdn.example.com/pizza.jpg"));
}

// =============================================================================
// normalize_order
// =============================================================================

const SOUP: &str = "6f1c2d3e-4a5b-4c6d-8e7f-0123456789ab";
const PIE: &str = "0a1b2c3d-4e5f-4a6b-9c7d-8e9fa0b1c2d3";

fn line(food_id: &str, quantity: u32) -> OrderItemRequest {
    OrderItemRequest { food_id: food_id.to_owned(), quantity }
}

#[test]
fn normalize_order_merges_duplicate_lines() {
    let request = OrderRequest { items: vec![line(SOUP, 1), line(PIE, 2), line(&format!(" {SOUP} "), 3)] };
    let items = normalize_order(&request).expect("valid order");
    assert_eq!(items, vec![line(PIE, 2), line(SOUP, 4)]);
}

#[test]
fn normalize_order_merges_spellings_of_the_same_id() {
    let upper = SOUP.to_ascii_uppercase();
    let request = OrderRequest { items: vec![line(&upper, 2), line(SOUP, 3)] };
    assert_eq!(normalize_order(&request), Ok(vec![line(SOUP, 5)]));
}

#[test]
fn normalize_order_caps_quantity_across_spellings() {
    let upper = SOUP.to_ascii_uppercase();
    let request = OrderRequest { items: vec![line(&upper, 15), line(SOUP, 15)] };
    let errors = normalize_order(&request).expect_err("over the cap");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains(SOUP), "{}", errors[0].message);
}

#[test]
fn normalize_order_rejects_malformed_ids() {
    let request = OrderRequest { items: vec![line("soup", 1), line(PIE, 1)] };
    let errors = normalize_order(&request).expect_err("malformed id");
    assert_eq!(errors, vec![FieldError::new("items", "Unknown food: soup")]);
}

#[test]
fn normalize_order_rejects_empty_and_out_of_range() {
    assert!(normalize_order(&OrderRequest::default()).is_err());

    let zero = OrderRequest { items: vec![line(SOUP, 0)] };
    assert!(normalize_order(&zero).is_err());

    let merged_too_many = OrderRequest { items: vec![line(SOUP, MAX_ORDER_QUANTITY), line(SOUP, 1)] };
    assert!(normalize_order(&merged_too_many).is_err());
}

// =============================================================================
// Support + paging
// =============================================================================

#[test]
fn validate_support_body_trims_and_bounds() {
    assert_eq!(validate_support_body("  where is my order? "), Ok("where is my order?".to_owned()));
    assert!(validate_support_body("   ").is_err());
    assert!(validate_support_body(&"a".repeat(MAX_SUPPORT_MESSAGE_LEN + 1)).is_err());
}

#[test]
fn clamp_per_page_bounds_requests() {
    assert_eq!(clamp_per_page(None), DEFAULT_PER_PAGE);
    assert_eq!(clamp_per_page(Some(0)), 1);
    assert_eq!(clamp_per_page(Some(500)), MAX_PER_PAGE);
    assert_eq!(clamp_per_page(Some(20)), 20);
}

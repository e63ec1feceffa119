//! Food, order and support-chat wire types shared by `client`, `server` and `cli`.
//!
//! Validation lives next to the types so the admin form, the API and the
//! legacy import all reject the same inputs with the same field messages.

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 80;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_PRICE_CENTS: i64 = 100_000;
pub const MAX_ORDER_QUANTITY: u32 = 20;
pub const MAX_SUPPORT_MESSAGE_LEN: usize = 1000;
pub const DEFAULT_PER_PAGE: u32 = 12;
pub const MAX_PER_PAGE: u32 = 50;

// =============================================================================
// FOOD
// =============================================================================

/// Menu section a food is listed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodCategory {
    Starter,
    Main,
    Dessert,
    Drink,
    Side,
}

impl FoodCategory {
    pub const ALL: [Self; 5] = [Self::Starter, Self::Main, Self::Side, Self::Dessert, Self::Drink];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Main => "main",
            Self::Dessert => "dessert",
            Self::Drink => "drink",
            Self::Side => "side",
        }
    }

    /// Plural heading used in menu filters.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Starter => "Starters",
            Self::Main => "Mains",
            Self::Dessert => "Desserts",
            Self::Drink => "Drinks",
            Self::Side => "Sides",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown food category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for FoodCategory {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "main" => Ok(Self::Main),
            "dessert" => Ok(Self::Dessert),
            "drink" => Ok(Self::Drink),
            "side" => Ok(Self::Side),
            _ => Err(ParseCategoryError(s.to_owned())),
        }
    }
}

/// A menu item as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Food identifier (UUID string).
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: FoodCategory,
    /// Unit price in cents.
    pub price_cents: i64,
    pub image_url: Option<String>,
    /// Hidden from the menu and refused by ordering when false.
    pub available: bool,
}

/// Admin payload for creating a food.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: FoodCategory,
    pub price_cents: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// One page of the menu listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodPage {
    pub items: Vec<Food>,
    /// 1-based page number actually served.
    pub page: u32,
    pub per_page: u32,
    /// Total matching foods across all pages.
    pub total: u64,
}

// =============================================================================
// ORDERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub food_id: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<OrderItemRequest>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Placed,
    Preparing,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Preparing => "preparing",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "preparing" => Ok(Self::Preparing),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub food_id: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub total_cents: i64,
    /// RFC 3339 creation time.
    pub created_at: String,
    pub items: Vec<OrderLine>,
}

// =============================================================================
// SUPPORT CHAT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportAuthor {
    Customer,
    Agent,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportMessage {
    pub id: String,
    pub author: SupportAuthor,
    pub body: String,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSupportMessage {
    pub body: String,
}

// =============================================================================
// VALIDATION
// =============================================================================

/// A single rejected input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self { field: field.to_owned(), message: message.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("enter a price")]
    Empty,
    #[error("price must look like 12 or 12.50")]
    Malformed,
    #[error("price may have at most two decimals")]
    TooManyDecimals,
    #[error("price must be between $0.01 and $1000.00")]
    OutOfRange,
}

/// Parse a user-entered price (`"12"`, `"12.5"`, `"$12.50"`) into cents.
///
/// # Errors
///
/// Returns a [`PriceError`] for empty, malformed, over-precise or
/// out-of-range input.
pub fn parse_price_cents(raw: &str) -> Result<i64, PriceError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return Err(PriceError::Malformed);
    }
    if !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(PriceError::Malformed);
    }
    if frac.len() > 2 {
        return Err(PriceError::TooManyDecimals);
    }

    let whole: i64 = whole.parse().map_err(|_| PriceError::OutOfRange)?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| PriceError::Malformed)? * 10,
        _ => frac.parse().map_err(|_| PriceError::Malformed)?,
    };
    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or(PriceError::OutOfRange)?;
    if !(1..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(PriceError::OutOfRange);
    }
    Ok(cents)
}

/// Render cents as a dollar amount, e.g. `1250` -> `"$12.50"`.
#[must_use]
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", abs / 100, abs % 100)
}

fn is_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    rest.is_some_and(|host| !host.is_empty() && !host.chars().any(char::is_whitespace))
}

/// Check a new food and return a trimmed copy.
///
/// # Errors
///
/// Returns every failing field, in form order.
pub fn validate_new_food(food: &NewFood) -> Result<NewFood, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = food.name.trim().to_owned();
    let name_len = name.chars().count();
    if name_len == 0 {
        errors.push(FieldError::new("name", "Name is required."));
    } else if name_len > MAX_NAME_LEN {
        errors.push(FieldError::new("name", format!("Name must be at most {MAX_NAME_LEN} characters.")));
    }

    let description = food.description.trim().to_owned();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        errors.push(FieldError::new(
            "description",
            format!("Description must be at most {MAX_DESCRIPTION_LEN} characters."),
        ));
    }

    if !(1..=MAX_PRICE_CENTS).contains(&food.price_cents) {
        errors.push(FieldError::new("price", PriceError::OutOfRange.to_string()));
    }

    let image_url = food
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_owned);
    if let Some(url) = &image_url {
        if !is_http_url(url) {
            errors.push(FieldError::new("image_url", "Image URL must start with http:// or https://."));
        }
    }

    if errors.is_empty() {
        Ok(NewFood { name, description, category: food.category, price_cents: food.price_cents, image_url })
    } else {
        Err(errors)
    }
}

/// Merge duplicate lines and check quantities.
///
/// Food ids are parsed as UUIDs and merged on their canonical lowercase
/// hyphenated form, which is also what the returned lines carry.
///
/// # Errors
///
/// Returns field errors for an empty order, blank or malformed food ids, or
/// quantities outside `1..=MAX_ORDER_QUANTITY` after merging.
pub fn normalize_order(request: &OrderRequest) -> Result<Vec<OrderItemRequest>, Vec<FieldError>> {
    if request.items.is_empty() {
        return Err(vec![FieldError::new("items", "Add at least one item.")]);
    }

    let mut errors = Vec::new();
    let mut merged: BTreeMap<Uuid, u32> = BTreeMap::new();
    for item in &request.items {
        let raw = item.food_id.trim();
        if raw.is_empty() {
            errors.push(FieldError::new("items", "Every item needs a food id."));
            continue;
        }
        let Ok(food_id) = Uuid::try_parse(raw) else {
            errors.push(FieldError::new("items", format!("Unknown food: {raw}")));
            continue;
        };
        let entry = merged.entry(food_id).or_insert(0);
        *entry = entry.saturating_add(item.quantity);
    }

    for (food_id, quantity) in &merged {
        if !(1..=MAX_ORDER_QUANTITY).contains(quantity) {
            errors.push(FieldError::new(
                "items",
                format!("Quantity for {food_id} must be between 1 and {MAX_ORDER_QUANTITY}."),
            ));
        }
    }

    if errors.is_empty() {
        Ok(merged
            .into_iter()
            .map(|(food_id, quantity)| OrderItemRequest { food_id: food_id.to_string(), quantity })
            .collect())
    } else {
        Err(errors)
    }
}

/// Trim a support message and check its length.
///
/// # Errors
///
/// Returns a `body` field error when the message is blank or too long.
pub fn validate_support_body(body: &str) -> Result<String, FieldError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(FieldError::new("body", "Type a message first."));
    }
    if trimmed.chars().count() > MAX_SUPPORT_MESSAGE_LEN {
        return Err(FieldError::new(
            "body",
            format!("Messages are limited to {MAX_SUPPORT_MESSAGE_LEN} characters."),
        ));
    }
    Ok(trimmed.to_owned())
}

/// Clamp requested page size to `1..=MAX_PER_PAGE`.
#[must_use]
pub fn clamp_per_page(requested: Option<u32>) -> u32 {
    requested.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

//! Legacy menu export import.
//!
//! The old site exported its menu as a JSON array of
//! `{title, desc, price, type, img}` rows, with prices as either strings
//! (`"12.50"`, `"$8"`) or numbers and free-form category names. Rows that
//! cannot be mapped are reported and skipped; they never abort the import.

#[cfg(test)]
#[path = "legacy_test.rs"]
mod legacy_test;

use menu::{FoodCategory, NewFood};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LegacyPrice {
    Text(String),
    Number(f64),
}

#[derive(Debug, Deserialize)]
struct LegacyFood {
    title: String,
    #[serde(default)]
    desc: Option<String>,
    price: LegacyPrice,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    img: Option<String>,
}

/// A row left out of the import, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 0-based position in the export.
    pub index: usize,
    pub title: String,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ImportPlan {
    /// Mapped foods with their export positions.
    pub foods: Vec<(usize, NewFood)>,
    pub skipped: Vec<SkippedRow>,
}

/// Map a legacy category label onto the current categories.
pub fn map_category(raw: &str) -> Option<FoodCategory> {
    let normalized = raw.trim().to_ascii_lowercase();
    let category = match normalized.as_str() {
        "appetizer" | "appetizers" | "appetiser" | "starter" | "starters" => FoodCategory::Starter,
        "main" | "mains" | "main course" | "entree" | "entrees" => FoodCategory::Main,
        "dessert" | "desserts" | "sweets" => FoodCategory::Dessert,
        "drink" | "drinks" | "beverage" | "beverages" => FoodCategory::Drink,
        "side" | "sides" | "side dish" => FoodCategory::Side,
        _ => return None,
    };
    Some(category)
}

fn price_cents(price: &LegacyPrice) -> Result<i64, String> {
    let text = match price {
        LegacyPrice::Text(text) => text.clone(),
        LegacyPrice::Number(n) if n.is_finite() => format!("{n:.2}"),
        LegacyPrice::Number(n) => return Err(format!("price {n} is not a number")),
    };
    menu::parse_price_cents(&text).map_err(|e| e.to_string())
}

fn map_row(row: LegacyFood) -> Result<NewFood, String> {
    let kind = row.kind.as_deref().unwrap_or("");
    let category = map_category(kind).ok_or_else(|| format!("unknown category {kind:?}"))?;
    let price_cents = price_cents(&row.price)?;
    let candidate = NewFood {
        name: row.title,
        description: row.desc.unwrap_or_default(),
        category,
        price_cents,
        image_url: row.img,
    };
    menu::validate_new_food(&candidate).map_err(|errors| {
        errors.into_iter().map(|e| format!("{}: {}", e.field, e.message)).collect::<Vec<_>>().join("; ")
    })
}

/// Parse an export and map every row it can.
///
/// # Errors
///
/// Fails only when the document is not a JSON array.
pub fn plan_import(json: &str) -> Result<ImportPlan, serde_json::Error> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let mut plan = ImportPlan::default();
    for (index, value) in rows.into_iter().enumerate() {
        let title = value.get("title").and_then(Value::as_str).unwrap_or("").to_owned();
        let mapped = serde_json::from_value::<LegacyFood>(value)
            .map_err(|e| format!("malformed row: {e}"))
            .and_then(map_row);
        match mapped {
            Ok(food) => plan.foods.push((index, food)),
            Err(reason) => plan.skipped.push(SkippedRow { index, title, reason }),
        }
    }
    Ok(plan)
}

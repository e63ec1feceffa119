//! Admin "new food" form: raw inputs and their conversion to an API payload.

#[cfg(test)]
#[path = "food_form_test.rs"]
mod food_form_test;

use menu::{FieldError, FoodCategory, NewFood};

/// Form fields exactly as typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

impl Default for FoodDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: FoodCategory::Main.as_str().to_owned(),
            price: String::new(),
            image_url: String::new(),
        }
    }
}

/// Turn a draft into a validated [`NewFood`].
///
/// # Errors
///
/// Returns one error per failing field, in form order.
pub fn validate_food_draft(draft: &FoodDraft) -> Result<NewFood, Vec<FieldError>> {
    let mut errors = Vec::new();

    let category = draft.category.parse::<FoodCategory>().map_err(|_| {
        FieldError::new("category", "Pick a category.")
    });
    let price_cents = menu::parse_price_cents(&draft.price).map_err(|e| FieldError::new("price", e.to_string()));

    let candidate = NewFood {
        name: draft.name.clone(),
        description: draft.description.clone(),
        category: *category.as_ref().unwrap_or(&FoodCategory::Main),
        price_cents: *price_cents.as_ref().unwrap_or(&1),
        image_url: Some(draft.image_url.clone()),
    };
    let checked = menu::validate_new_food(&candidate);

    let shared = checked.as_ref().err().map_or(&[][..], Vec::as_slice);
    errors.extend(shared.iter().filter(|e| e.field == "name" || e.field == "description").cloned());
    if let Err(e) = category {
        errors.push(e);
    }
    if let Err(e) = price_cents {
        errors.push(e);
    }
    errors.extend(shared.iter().filter(|e| e.field == "image_url").cloned());

    match checked {
        Ok(food) if errors.is_empty() => Ok(food),
        _ => Err(errors),
    }
}

/// First message for `field`, for rendering under an input.
#[must_use]
pub fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors.iter().find(|e| e.field == field).map(|e| e.message.clone())
}

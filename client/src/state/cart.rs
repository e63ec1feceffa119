//! Shopping cart held in the browser until the order is placed.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use menu::{Food, MAX_ORDER_QUANTITY, OrderItemRequest, OrderRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub food_id: String,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.unit_price_cents * i64::from(self.quantity)
    }
}

/// Lines in insertion order; one line per food.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::subtotal_cents).sum()
    }

    /// Add one unit of `food`. Quantities stop at the per-item order cap.
    pub fn add(&mut self, food: &Food) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.food_id == food.id) {
            line.quantity = (line.quantity + 1).min(MAX_ORDER_QUANTITY);
            return;
        }
        self.lines.push(CartLine {
            food_id: food.id.clone(),
            name: food.name.clone(),
            unit_price_cents: food.price_cents,
            quantity: 1,
        });
    }

    /// Set a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, food_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(food_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.food_id == food_id) {
            line.quantity = quantity.min(MAX_ORDER_QUANTITY);
        }
    }

    pub fn remove(&mut self, food_id: &str) {
        self.lines.retain(|l| l.food_id != food_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn to_order_request(&self) -> OrderRequest {
        OrderRequest {
            items: self
                .lines
                .iter()
                .map(|l| OrderItemRequest { food_id: l.food_id.clone(), quantity: l.quantity })
                .collect(),
        }
    }
}

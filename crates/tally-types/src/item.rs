use serde::{Deserialize, Serialize};

/// A single cart line: unit price times quantity.
///
/// Quantities are floating point so weighed goods (`1.5` kg) fit the same
/// shape as counted ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub price: f64,
    pub quantity: f64,
}

impl Item {
    pub fn new(price: f64, quantity: f64) -> Self {
        Self { price, quantity }
    }

    /// `price * quantity`.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity
    }
}

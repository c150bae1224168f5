//! Shopping list selection and checkout summary.
//!
//! # Responsibility
//! - Turn a multi-select over the product catalog into line items and a
//!   total for the summary screen.
//!
//! # Invariants
//! - An empty selection yields no checkout at all.
//! - Out-of-range selection indices are ignored.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} — {} руб.", self.name, self.price)
    }
}

/// Summary handed to the checkout screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    /// Display lines for the selected products, in catalog order.
    pub lines: Vec<String>,
    /// Sum of selected prices.
    pub total: f64,
}

/// Builds the checkout summary for the checked catalog positions.
///
/// Returns `None` when nothing valid is selected.
pub fn checkout(products: &[Product], selected: &[usize]) -> Option<Checkout> {
    let mut lines = Vec::new();
    let mut total = 0.0;
    for &index in selected {
        let Some(product) = products.get(index) else {
            continue;
        };
        lines.push(product.to_string());
        total += product.price;
    }

    if lines.is_empty() {
        None
    } else {
        Some(Checkout { lines, total })
    }
}

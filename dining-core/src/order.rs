//! Order lines accumulated during a session
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single accepted order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub meal: String,
    pub quantity: u32,
}

/// Meals ordered so far, one line per distinct meal in first-entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub lines: Vec<OrderLine>,
}

/// Reasons an order line is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("meal '{meal}' is not on the menu")]
    UnknownMeal { meal: String },
    #[error("quantity {quantity} is outside {min}..={max}")]
    QuantityOutOfRange { quantity: i32, min: u32, max: u32 },
}

impl Order {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an order line by meal name.
    #[must_use]
    pub fn find_line(&self, meal: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.meal == meal)
    }

    fn find_line_mut(&mut self, meal: &str) -> Option<&mut OrderLine> {
        self.lines.iter_mut().find(|line| line.meal == meal)
    }

    /// Record a quantity for a meal, replacing any earlier quantity for it.
    /// Returns the quantity that was replaced, if any.
    pub fn set_quantity(&mut self, meal: &str, quantity: u32) -> Option<u32> {
        if let Some(line) = self.find_line_mut(meal) {
            let previous = line.quantity;
            line.quantity = quantity;
            Some(previous)
        } else {
            self.lines.push(OrderLine {
                meal: meal.to_string(),
                quantity,
            });
            None
        }
    }

    /// Current quantity for a meal, 0 if it was never ordered.
    #[must_use]
    pub fn get_quantity(&self, meal: &str) -> u32 {
        self.find_line(meal).map_or(0, |line| line.quantity)
    }

    /// Sum of quantities across every line.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderLine> {
        self.lines.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> IntoIterator for &'a Order {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, u32)> for Order {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut order = Self::new();
        for (meal, quantity) in iter {
            order.set_quantity(&meal, quantity);
        }
        order
    }
}

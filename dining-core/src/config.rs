//! Startup configuration: menu, pricing rules and quantity bounds.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{MAX_QUANTITY, MIN_QUANTITY};
use crate::menu::MenuCatalog;
use crate::pricing::PricingRules;

/// Errors raised when configuration invariants are violated.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("menu must contain at least one meal")]
    EmptyMenu,
    #[error("menu contains a blank meal name")]
    BlankMealName,
    #[error("meal '{name}' is listed more than once")]
    DuplicateMeal { name: String },
    #[error("meal '{name}' has invalid price {price}")]
    InvalidPrice { name: String, price: f64 },
    #[error("base cost must be a non-negative number (got {value})")]
    InvalidBaseCost { value: f64 },
    #[error("discount rate for more than {min_quantity} meals must be in [0, 1) (got {rate})")]
    InvalidTierRate { min_quantity: u32, rate: f64 },
    #[error("flat discount of {amount} over {over} is invalid")]
    InvalidFlatDiscount { over: f64, amount: f64 },
    #[error("quantity bounds invalid (min {min}, max {max})")]
    QuantityBounds { min: u32, max: u32 },
}

/// Inclusive bounds a quantity must fall in for an order line to be kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityLimits {
    #[serde(default = "QuantityLimits::default_min")]
    pub min: u32,
    #[serde(default = "QuantityLimits::default_max")]
    pub max: u32,
}

impl QuantityLimits {
    const fn default_min() -> u32 {
        MIN_QUANTITY
    }

    const fn default_max() -> u32 {
        MAX_QUANTITY
    }

    /// Whether a parsed quantity falls inside the bounds.
    #[must_use]
    pub fn accepts(&self, quantity: i32) -> bool {
        u32::try_from(quantity).is_ok_and(|value| value >= self.min && value <= self.max)
    }

    /// Check the bounds describe a non-empty positive range.
    ///
    /// # Errors
    ///
    /// Returns an error when `min` is zero or greater than `max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::QuantityBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for QuantityLimits {
    fn default() -> Self {
        Self {
            min: Self::default_min(),
            max: Self::default_max(),
        }
    }
}

/// Everything a session needs, fixed before the first prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiningConfig {
    #[serde(default)]
    pub menu: MenuCatalog,
    #[serde(default)]
    pub pricing: PricingRules,
    #[serde(default)]
    pub limits: QuantityLimits,
}

impl DiningConfig {
    /// Parse a configuration document; omitted sections take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a configuration.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.menu.validate()?;
        self.pricing.validate()?;
        self.limits.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = DiningConfig::from_json("{}").unwrap();
        assert_eq!(config, DiningConfig::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.limits, QuantityLimits { min: 1, max: 100 });
    }

    #[test]
    fn partial_document_overrides_sections() {
        let config = DiningConfig::from_json(
            r#"{
                "menu": [{"name": "Ramen", "price": 14.0}],
                "limits": {"max": 20}
            }"#,
        )
        .unwrap();
        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu.lookup("RAMEN"), Some(14.0));
        assert_eq!(config.limits.min, 1);
        assert_eq!(config.limits.max, 20);
        assert_eq!(config.pricing, PricingRules::default());
    }

    #[test]
    fn limits_accept_inclusive_range() {
        let limits = QuantityLimits::default();
        assert!(limits.accepts(1));
        assert!(limits.accepts(100));
        assert!(!limits.accepts(101));
        assert!(!limits.accepts(0));
        assert!(!limits.accepts(-5));
    }

    #[test]
    fn validate_reports_first_problem() {
        let config = DiningConfig {
            limits: QuantityLimits { min: 5, max: 2 },
            ..DiningConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::QuantityBounds { min: 5, max: 2 })
        );

        let config = DiningConfig::from_json(r#"{"menu": []}"#).unwrap();
        assert_eq!(config.validate(), Err(ConfigError::EmptyMenu));
    }
}

//! Discount tiers and the final cost calculation.
//!
//! Percentage tiers are keyed on the total number of meals ordered and
//! compose multiplicatively. Flat discounts are checked afterwards against the
//! already discounted cost, highest threshold first, and at most one applies.

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::constants::{
    BASE_COST, FLAT_HIGH_AMOUNT, FLAT_HIGH_THRESHOLD, FLAT_LOW_AMOUNT, FLAT_LOW_THRESHOLD,
    TIER_LARGE_RATE, TIER_LARGE_THRESHOLD, TIER_SMALL_RATE, TIER_SMALL_THRESHOLD,
};
use crate::numbers::u64_to_f64;
use crate::order::Order;

/// Percentage discount applied once more than `min_quantity` meals are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityTier {
    pub min_quantity: u32,
    /// Fraction taken off, e.g. `0.10` for ten percent
    pub rate: f64,
}

/// Fixed amount subtracted once the discounted cost exceeds `over`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatDiscount {
    pub over: f64,
    pub amount: f64,
}

/// Pricing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    #[serde(default = "PricingRules::default_base_cost")]
    pub base_cost: f64,
    #[serde(default = "PricingRules::default_tiers")]
    pub tiers: Vec<QuantityTier>,
    #[serde(default = "PricingRules::default_flat_discounts")]
    pub flat_discounts: Vec<FlatDiscount>,
}

/// Step-by-step view of how a final cost was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub total_quantity: u64,
    pub tiers_applied: Vec<QuantityTier>,
    pub flat_discount: Option<FlatDiscount>,
    pub final_cost: f64,
}

impl PricingRules {
    const fn default_base_cost() -> f64 {
        BASE_COST
    }

    fn default_tiers() -> Vec<QuantityTier> {
        vec![
            QuantityTier {
                min_quantity: TIER_SMALL_THRESHOLD,
                rate: TIER_SMALL_RATE,
            },
            QuantityTier {
                min_quantity: TIER_LARGE_THRESHOLD,
                rate: TIER_LARGE_RATE,
            },
        ]
    }

    fn default_flat_discounts() -> Vec<FlatDiscount> {
        vec![
            FlatDiscount {
                over: FLAT_HIGH_THRESHOLD,
                amount: FLAT_HIGH_AMOUNT,
            },
            FlatDiscount {
                over: FLAT_LOW_THRESHOLD,
                amount: FLAT_LOW_AMOUNT,
            },
        ]
    }

    /// Check rates and amounts are sane.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative or non-finite base cost, a tier rate
    /// outside `[0, 1)`, or a negative flat discount.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_cost.is_finite() || self.base_cost < 0.0 {
            return Err(ConfigError::InvalidBaseCost {
                value: self.base_cost,
            });
        }
        for tier in &self.tiers {
            if !(0.0..1.0).contains(&tier.rate) {
                return Err(ConfigError::InvalidTierRate {
                    min_quantity: tier.min_quantity,
                    rate: tier.rate,
                });
            }
        }
        for flat in &self.flat_discounts {
            if !flat.amount.is_finite() || flat.amount < 0.0 || !flat.over.is_finite() {
                return Err(ConfigError::InvalidFlatDiscount {
                    over: flat.over,
                    amount: flat.amount,
                });
            }
        }
        Ok(())
    }

    /// Apply every discount to a running total and report each step.
    #[must_use]
    pub fn quote(&self, order: &Order, running_total: f64) -> PriceBreakdown {
        let total_quantity = order.total_quantity();
        let mut cost = running_total;

        let mut tiers: Vec<QuantityTier> = self.tiers.clone();
        tiers.sort_by_key(|tier| tier.min_quantity);
        let mut tiers_applied = Vec::new();
        for tier in tiers {
            if total_quantity > u64::from(tier.min_quantity) {
                cost *= 1.0 - tier.rate;
                tiers_applied.push(tier);
            }
        }

        let mut flats: Vec<FlatDiscount> = self.flat_discounts.clone();
        flats.sort_by(|a, b| b.over.total_cmp(&a.over));
        let flat_discount = flats.into_iter().find(|flat| cost > flat.over);
        if let Some(flat) = flat_discount {
            cost -= flat.amount;
        }

        info!(
            "priced order: {total_quantity} meals, subtotal {running_total:.2}, final {cost:.2}"
        );

        PriceBreakdown {
            subtotal: running_total,
            total_quantity,
            tiers_applied,
            flat_discount,
            final_cost: cost,
        }
    }

    /// Final cost after discounts.
    #[must_use]
    pub fn apply_discounts(&self, order: &Order, running_total: f64) -> f64 {
        self.quote(order, running_total).final_cost
    }

    /// Average cost per meal after discounts, `None` for an empty order.
    #[must_use]
    pub fn cost_per_meal(&self, order: &Order, running_total: f64) -> Option<f64> {
        let quantity = order.total_quantity();
        if quantity == 0 {
            return None;
        }
        Some(self.apply_discounts(order, running_total) / u64_to_f64(quantity))
    }
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            base_cost: Self::default_base_cost(),
            tiers: Self::default_tiers(),
            flat_discounts: Self::default_flat_discounts(),
        }
    }
}

/// Final cost under the default rules.
#[must_use]
pub fn apply_discounts(order: &Order, running_total: f64) -> f64 {
    PricingRules::default().apply_discounts(order, running_total)
}

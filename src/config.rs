use anyhow::{bail, Context, Result};
use std::env;
use std::str::FromStr;

use crate::domain::pizza::PricingPolicy;

// ============================================================================
// Application Configuration
// ============================================================================
//
// Defaults match the shop's standard menu. Each value can be overridden from
// the environment:
//
//   PIZZA_CUSTOMER_NAME   profile owner shown in the console
//   PIZZA_BASE_PRICE      price of a plain pizza
//   PIZZA_TOPPING_PRICE   price per topping
//   PIZZA_DISCOUNT_RATE   seasonal discount, fraction in [0, 1)
//   PIZZA_CURRENCY        currency label on prices and invoices
//   PIZZA_LOYALTY_POINTS  points credited per completed order
//
// ============================================================================

pub const DEFAULT_CUSTOMER_NAME: &str = "Jayan Perera";
pub const DEFAULT_CURRENCY: &str = "LKR";
pub const DEFAULT_LOYALTY_POINTS_PER_ORDER: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub customer_name: String,
    pub currency: String,
    pub pricing: PricingPolicy,
    pub loyalty_points_per_order: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            customer_name: DEFAULT_CUSTOMER_NAME.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            pricing: PricingPolicy::default(),
            loyalty_points_per_order: DEFAULT_LOYALTY_POINTS_PER_ORDER,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup("PIZZA_CUSTOMER_NAME") {
            config.customer_name = name;
        }
        if let Some(currency) = lookup("PIZZA_CURRENCY") {
            config.currency = currency;
        }
        if let Some(value) = parse_var(&lookup, "PIZZA_BASE_PRICE")? {
            config.pricing.base_price = value;
        }
        if let Some(value) = parse_var(&lookup, "PIZZA_TOPPING_PRICE")? {
            config.pricing.topping_price = value;
        }
        if let Some(value) = parse_var(&lookup, "PIZZA_DISCOUNT_RATE")? {
            config.pricing.discount_rate = value;
        }
        if let Some(value) = parse_var(&lookup, "PIZZA_LOYALTY_POINTS")? {
            config.loyalty_points_per_order = value;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            bail!("customer name cannot be empty");
        }
        if self.currency.trim().is_empty() {
            bail!("currency cannot be empty");
        }
        let pricing = &self.pricing;
        if !(0.0..1.0).contains(&pricing.discount_rate) {
            bail!("discount rate must be in [0, 1), got {}", pricing.discount_rate);
        }
        for (name, price) in [
            ("base price", pricing.base_price),
            ("topping price", pricing.topping_price),
            ("extra cheese price", pricing.extra_cheese_price),
            ("special packaging price", pricing.special_packaging_price),
        ] {
            if !price.is_finite() || price < 0.0 {
                bail!("{name} must be a non-negative amount, got {price}");
            }
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value for {key}: {raw:?}"))
        })
        .transpose()
}

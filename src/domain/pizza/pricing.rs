use serde::{Deserialize, Serialize};

use super::addons::AddOn;
use super::builder::Pizza;

// ============================================================================
// Pricing
// ============================================================================
//
// total = (base + toppings * topping_price) * (1 - discount) + add-ons
//
// Add-ons are charged at full price after the seasonal discount.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub base_price: f64,
    pub topping_price: f64,
    /// Fraction in [0, 1).
    pub discount_rate: f64,
    pub extra_cheese_price: f64,
    pub special_packaging_price: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            base_price: 1400.0,
            topping_price: 50.0,
            discount_rate: 0.10,
            extra_cheese_price: 200.0,
            special_packaging_price: 100.0,
        }
    }
}

impl PricingPolicy {
    pub fn add_on_price(&self, add_on: AddOn) -> f64 {
        match add_on {
            AddOn::ExtraCheese => self.extra_cheese_price,
            AddOn::SpecialPackaging => self.special_packaging_price,
        }
    }

    /// Menu price of a pizza with `toppings` toppings.
    pub fn menu_price(&self, toppings: usize) -> f64 {
        self.base_price + toppings as f64 * self.topping_price
    }

    pub fn discounted(&self, amount: f64) -> f64 {
        amount * (1.0 - self.discount_rate)
    }

    pub fn quote(&self, pizza: &Pizza) -> PriceBreakdown {
        let toppings_cost = pizza.toppings.len() as f64 * self.topping_price;
        let discounted_subtotal = self.discounted(self.base_price + toppings_cost);
        let add_ons: Vec<(AddOn, f64)> = pizza
            .add_ons
            .iter()
            .map(|add_on| (*add_on, self.add_on_price(*add_on)))
            .collect();
        let total = discounted_subtotal + add_ons.iter().map(|(_, price)| price).sum::<f64>();

        PriceBreakdown {
            base_price: self.base_price,
            topping_count: pizza.toppings.len(),
            toppings_cost,
            discount_rate: self.discount_rate,
            discounted_subtotal,
            add_ons,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: f64,
    pub topping_count: usize,
    pub toppings_cost: f64,
    pub discount_rate: f64,
    pub discounted_subtotal: f64,
    pub add_ons: Vec<(AddOn, f64)>,
    pub total: f64,
}

impl PriceBreakdown {
    pub fn discount_percent(&self) -> u32 {
        (self.discount_rate * 100.0).round() as u32
    }

    /// Total in minor currency units.
    pub fn total_cents(&self) -> u64 {
        (self.total * 100.0).round().max(0.0) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pizza::{Crust, Sauce, Topping};

    fn pizza_with(toppings: &[Topping]) -> Pizza {
        Pizza::builder()
            .crust(Crust::Stuffed)
            .sauce(Sauce::Pesto)
            .toppings(toppings.iter().copied())
            .build()
            .unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_quote_without_add_ons() {
        let policy = PricingPolicy::default();
        let quote = policy.quote(&pizza_with(&[Topping::Pepperoni, Topping::Olives]));

        assert_eq!(quote.topping_count, 2);
        assert_close(quote.toppings_cost, 100.0);
        assert_close(quote.discounted_subtotal, 1350.0);
        assert_close(quote.total, 1350.0);
        assert_eq!(quote.discount_percent(), 10);
        assert_eq!(quote.total_cents(), 135_000);
    }

    #[test]
    fn test_add_ons_are_not_discounted() {
        let policy = PricingPolicy::default();
        let pizza = pizza_with(&[Topping::Onions])
            .with_add_on(AddOn::ExtraCheese)
            .with_add_on(AddOn::SpecialPackaging);

        let quote = policy.quote(&pizza);
        assert_close(quote.discounted_subtotal, 1305.0);
        assert_close(quote.total, 1605.0);
        assert_eq!(
            quote.add_ons,
            vec![(AddOn::ExtraCheese, 200.0), (AddOn::SpecialPackaging, 100.0)]
        );
    }

    #[test]
    fn test_menu_price() {
        let policy = PricingPolicy::default();
        assert_close(policy.menu_price(0), 1400.0);
        assert_close(policy.menu_price(5), 1650.0);
    }
}

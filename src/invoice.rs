use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::domain::order::FulfillmentMode;
use crate::domain::pizza::PriceBreakdown;

// ============================================================================
// Invoice
// ============================================================================

#[derive(Debug, Clone)]
pub struct Invoice {
    pub customer: String,
    pub order_id: Uuid,
    pub mode: FulfillmentMode,
    pub currency: String,
    pub breakdown: PriceBreakdown,
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(
        customer: impl Into<String>,
        order_id: Uuid,
        mode: FulfillmentMode,
        currency: impl Into<String>,
        breakdown: PriceBreakdown,
    ) -> Self {
        Self {
            customer: customer.into(),
            order_id,
            mode,
            currency: currency.into(),
            breakdown,
            issued_at: Utc::now(),
        }
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.breakdown;
        let cur = &self.currency;

        writeln!(f, "____Your Invoice____")?;
        writeln!(f, "Customer: {}", self.customer)?;
        writeln!(f, "Order: {} ({})", self.order_id, self.mode)?;
        writeln!(f, "Date: {}", self.issued_at.format("%Y-%m-%d %H:%M UTC"))?;
        writeln!(f, "Base Price: {cur} {:.2}", b.base_price)?;
        writeln!(f, "Toppings ({}): {cur} {:.2}", b.topping_count, b.toppings_cost)?;
        for (add_on, price) in &b.add_ons {
            writeln!(f, "{}: {cur} {:.2}", add_on.label(), price)?;
        }
        writeln!(f, "Seasonal Offer: {}% Discount", b.discount_percent())?;
        writeln!(f, "Total Amount: {cur} {:.2}", b.total)?;
        write!(f, "=========================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pizza::{AddOn, Crust, Pizza, PricingPolicy, Sauce, Topping};

    fn invoice_for(pizza: &Pizza) -> Invoice {
        Invoice::new(
            "Jayan Perera",
            Uuid::new_v4(),
            FulfillmentMode::Delivery,
            "LKR",
            PricingPolicy::default().quote(pizza),
        )
    }

    #[test]
    fn test_invoice_lines() {
        let pizza = Pizza::builder()
            .crust(Crust::Thin)
            .sauce(Sauce::Tomato)
            .toppings([Topping::Pepperoni, Topping::Olives])
            .build()
            .unwrap()
            .with_add_on(AddOn::ExtraCheese);

        let text = invoice_for(&pizza).to_string();

        assert!(text.starts_with("____Your Invoice____\n"));
        assert!(text.contains("Customer: Jayan Perera\n"));
        assert!(text.contains("Base Price: LKR 1400.00\n"));
        assert!(text.contains("Toppings (2): LKR 100.00\n"));
        assert!(text.contains("Extra Cheese: LKR 200.00\n"));
        assert!(!text.contains("Special Packaging"));
        assert!(text.contains("Seasonal Offer: 10% Discount\n"));
        assert!(text.contains("Total Amount: LKR 1550.00\n"));
    }

    #[test]
    fn test_invoice_without_add_ons() {
        let pizza = Pizza::builder()
            .crust(Crust::Thick)
            .sauce(Sauce::Pesto)
            .build()
            .unwrap();

        let text = invoice_for(&pizza).to_string();
        assert!(text.contains("Toppings (0): LKR 0.00\n"));
        assert!(text.contains("Total Amount: LKR 1260.00\n"));
        assert!(text.ends_with("========================="));
    }
}

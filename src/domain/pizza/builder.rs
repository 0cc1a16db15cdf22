use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::addons::AddOn;
use super::errors::PizzaError;
use super::value_objects::{Crust, Sauce, Topping};

// ============================================================================
// Pizza + Builder
// ============================================================================

pub const DEFAULT_PIZZA_NAME: &str = "Custom Pizza";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: Uuid,
    pub name: String,
    pub crust: Crust,
    pub sauce: Sauce,
    pub toppings: Vec<Topping>,
    /// Menu price before discount and add-ons.
    pub price: f64,
    /// Decorations applied after the pizza was built, in order.
    pub add_ons: Vec<AddOn>,
}

impl Pizza {
    pub fn builder() -> PizzaBuilder {
        PizzaBuilder::default()
    }

    /// Wrap the pizza with an add-on. Applying the same add-on twice is a no-op.
    pub fn with_add_on(mut self, add_on: AddOn) -> Self {
        if !self.add_ons.contains(&add_on) {
            self.add_ons.push(add_on);
        }
        self
    }

    pub fn has_add_on(&self, add_on: AddOn) -> bool {
        self.add_ons.contains(&add_on)
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} crust, {} sauce, toppings: [",
            self.name, self.crust, self.sauce
        )?;
        for (i, topping) in self.toppings.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{topping}")?;
        }
        write!(f, "], price: {:.2})", self.price)?;
        for add_on in &self.add_ons {
            write!(f, " + {}", add_on.label())?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PizzaBuilder {
    crust: Option<Crust>,
    sauce: Option<Sauce>,
    toppings: Vec<Topping>,
    name: Option<String>,
    price: f64,
}

impl PizzaBuilder {
    pub fn crust(mut self, crust: Crust) -> Self {
        self.crust = Some(crust);
        self
    }

    pub fn sauce(mut self, sauce: Sauce) -> Self {
        self.sauce = Some(sauce);
        self
    }

    pub fn add_topping(mut self, topping: Topping) -> Self {
        self.toppings.push(topping);
        self
    }

    pub fn toppings(mut self, toppings: impl IntoIterator<Item = Topping>) -> Self {
        self.toppings.extend(toppings);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn topping_count(&self) -> usize {
        self.toppings.len()
    }

    pub fn build(self) -> Result<Pizza, PizzaError> {
        Ok(Pizza {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(|| DEFAULT_PIZZA_NAME.to_string()),
            crust: self.crust.ok_or(PizzaError::MissingCrust)?,
            sauce: self.sauce.ok_or(PizzaError::MissingSauce)?,
            toppings: self.toppings,
            price: self.price,
            add_ons: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> Pizza {
        Pizza::builder()
            .crust(Crust::Thin)
            .sauce(Sauce::Tomato)
            .add_topping(Topping::ExtraCheese)
            .price(1450.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_pizza() {
        let pizza = margherita();

        assert_eq!(pizza.name, DEFAULT_PIZZA_NAME);
        assert_eq!(pizza.crust, Crust::Thin);
        assert_eq!(pizza.sauce, Sauce::Tomato);
        assert_eq!(pizza.toppings, vec![Topping::ExtraCheese]);
        assert!(pizza.add_ons.is_empty());
    }

    #[test]
    fn test_build_requires_crust_and_sauce() {
        let result = Pizza::builder().sauce(Sauce::Garlic).build();
        assert!(matches!(result, Err(PizzaError::MissingCrust)));

        let result = Pizza::builder().crust(Crust::Thick).build();
        assert!(matches!(result, Err(PizzaError::MissingSauce)));
    }

    #[test]
    fn test_toppings_accumulate() {
        let builder = Pizza::builder()
            .add_topping(Topping::Olives)
            .toppings([Topping::Onions, Topping::Pepperoni]);
        assert_eq!(builder.topping_count(), 3);
    }

    #[test]
    fn test_display_includes_add_ons_in_order() {
        let pizza = margherita()
            .with_add_on(AddOn::SpecialPackaging)
            .with_add_on(AddOn::ExtraCheese)
            .with_add_on(AddOn::SpecialPackaging);

        assert_eq!(pizza.add_ons.len(), 2);
        assert_eq!(
            pizza.to_string(),
            "Custom Pizza (Thin crust, Tomato sauce, toppings: [Extra Cheese], price: 1450.00) \
             + Special Packaging + Extra Cheese"
        );
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::PizzaError;

// ============================================================================
// Pizza Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crust {
    Thin,
    Thick,
    Stuffed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sauce {
    Tomato,
    Garlic,
    Pesto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topping {
    Pepperoni,
    Mushrooms,
    Onions,
    ExtraCheese,
    Olives,
}

/// Options offered on a numbered console menu, selected 1-based.
pub trait MenuOption: Sized + Copy + 'static {
    const KIND: &'static str;

    fn options() -> &'static [Self];

    fn label(self) -> &'static str;

    fn from_menu_choice(choice: usize) -> Result<Self, PizzaError> {
        choice
            .checked_sub(1)
            .and_then(|index| Self::options().get(index))
            .copied()
            .ok_or(PizzaError::InvalidSelection {
                kind: Self::KIND,
                choice,
                max: Self::options().len(),
            })
    }
}

impl MenuOption for Crust {
    const KIND: &'static str = "crust";

    fn options() -> &'static [Self] {
        &[Crust::Thin, Crust::Thick, Crust::Stuffed]
    }

    fn label(self) -> &'static str {
        match self {
            Crust::Thin => "Thin",
            Crust::Thick => "Thick",
            Crust::Stuffed => "Stuffed",
        }
    }
}

impl MenuOption for Sauce {
    const KIND: &'static str = "sauce";

    fn options() -> &'static [Self] {
        &[Sauce::Tomato, Sauce::Garlic, Sauce::Pesto]
    }

    fn label(self) -> &'static str {
        match self {
            Sauce::Tomato => "Tomato",
            Sauce::Garlic => "Garlic",
            Sauce::Pesto => "Pesto",
        }
    }
}

impl MenuOption for Topping {
    const KIND: &'static str = "topping";

    fn options() -> &'static [Self] {
        &[
            Topping::Pepperoni,
            Topping::Mushrooms,
            Topping::Onions,
            Topping::ExtraCheese,
            Topping::Olives,
        ]
    }

    fn label(self) -> &'static str {
        match self {
            Topping::Pepperoni => "Pepperoni",
            Topping::Mushrooms => "Mushrooms",
            Topping::Onions => "Onions",
            Topping::ExtraCheese => "Extra Cheese",
            Topping::Olives => "Olives",
        }
    }
}

impl Topping {
    /// Parse a comma separated list of 1-based topping numbers.
    /// Blank input selects no toppings.
    pub fn parse_selection(input: &str) -> Result<Vec<Topping>, PizzaError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                let choice = part
                    .parse::<usize>()
                    .map_err(|_| PizzaError::NotANumber(part.to_string()))?;
                Topping::from_menu_choice(choice)
            })
            .collect()
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Sauce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

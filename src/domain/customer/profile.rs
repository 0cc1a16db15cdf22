use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::CustomerError;
use crate::domain::pizza::Pizza;

// ============================================================================
// User Profile - favorites and loyalty points
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    name: String,
    favorite_pizzas: Vec<Pizza>,
    loyalty_points: u32,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Result<Self, CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::EmptyName);
        }

        Ok(Self {
            name,
            favorite_pizzas: Vec::new(),
            loyalty_points: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn favorite_pizzas(&self) -> &[Pizza] {
        &self.favorite_pizzas
    }

    pub fn loyalty_points(&self) -> u32 {
        self.loyalty_points
    }

    /// Save a pizza as a favorite. Saving the same pizza again is rejected.
    pub fn add_favorite_pizza(&mut self, pizza: Pizza) -> Result<(), CustomerError> {
        if self.favorite_pizzas.iter().any(|p| p.id == pizza.id) {
            return Err(CustomerError::AlreadyFavorite(pizza.id));
        }

        tracing::info!(
            customer = %self.name,
            pizza_id = %pizza.id,
            favorites = self.favorite_pizzas.len() + 1,
            "Pizza saved to favorites"
        );
        self.favorite_pizzas.push(pizza);
        Ok(())
    }

    /// Credit loyalty points for a completed order; returns the new balance.
    pub fn award_order_points(&mut self, points: u32) -> u32 {
        self.loyalty_points = self.loyalty_points.saturating_add(points);
        tracing::info!(
            customer = %self.name,
            awarded = points,
            balance = self.loyalty_points,
            "Loyalty points awarded"
        );
        self.loyalty_points
    }

    /// Pick a favorite by its 1-based position in the list.
    pub fn reorder_favorite_pizza(&self, position: usize) -> Result<&Pizza, CustomerError> {
        position
            .checked_sub(1)
            .and_then(|index| self.favorite_pizzas.get(index))
            .ok_or(CustomerError::NoSuchFavorite {
                position,
                count: self.favorite_pizzas.len(),
            })
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} loyalty points, {} favorite pizzas)",
            self.name,
            self.loyalty_points,
            self.favorite_pizzas.len()
        )
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

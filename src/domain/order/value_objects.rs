use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::OrderError;

// ============================================================================
// Order Value Objects
// ============================================================================

/// How the order reaches the customer. Fixed when the order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FulfillmentMode {
    Pickup,
    Delivery,
}

impl FulfillmentMode {
    /// Map the console's order-type menu choice (1 = Delivery, 2 = Take Away).
    pub fn from_menu_choice(choice: u32) -> Result<Self, OrderError> {
        match choice {
            1 => Ok(FulfillmentMode::Delivery),
            2 => Ok(FulfillmentMode::Pickup),
            other => Err(OrderError::UnknownFulfillmentMode(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FulfillmentMode::Pickup => "pickup",
            FulfillmentMode::Delivery => "delivery",
        }
    }
}

impl FromStr for FulfillmentMode {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pickup" | "takeaway" | "take away" => Ok(FulfillmentMode::Pickup),
            "delivery" => Ok(FulfillmentMode::Delivery),
            other => Err(OrderError::UnknownFulfillmentMode(other.to_string())),
        }
    }
}

impl fmt::Display for FulfillmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of an order in the fulfillment lifecycle.
///
/// The lifecycle forks at `Preparing` on the fulfillment mode and rejoins at
/// `Invoiced`:
///
/// ```text
///                    ┌─ OutForDelivery ─ Delivered ──────┐
/// Placed ─ Preparing ┤                                   ├─ Invoiced ─ Feedback
///                    └─ ReadyForPickup ─ PickupCompleted ┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Placed,
    Preparing,
    OutForDelivery,
    ReadyForPickup,
    Delivered,
    PickupCompleted,
    Invoiced,
    Feedback,
}

impl Stage {
    /// Every stage, in declaration order.
    pub const ALL: [Stage; 8] = [
        Stage::Placed,
        Stage::Preparing,
        Stage::OutForDelivery,
        Stage::ReadyForPickup,
        Stage::Delivered,
        Stage::PickupCompleted,
        Stage::Invoiced,
        Stage::Feedback,
    ];

    /// Forward transition. `None` only for the terminal stage.
    pub const fn next(self, mode: FulfillmentMode) -> Option<Stage> {
        use FulfillmentMode::*;
        use Stage::*;

        match (self, mode) {
            (Placed, _) => Some(Preparing),
            (Preparing, Pickup) => Some(ReadyForPickup),
            (Preparing, Delivery) => Some(OutForDelivery),
            (OutForDelivery, _) => Some(Delivered),
            (ReadyForPickup, _) => Some(PickupCompleted),
            (Delivered, _) | (PickupCompleted, _) => Some(Invoiced),
            (Invoiced, _) => Some(Feedback),
            (Feedback, _) => None,
        }
    }

    /// Backward transition. `None` only for the initial stage.
    pub const fn previous(self, mode: FulfillmentMode) -> Option<Stage> {
        use FulfillmentMode::*;
        use Stage::*;

        match (self, mode) {
            (Placed, _) => None,
            (Preparing, _) => Some(Placed),
            (OutForDelivery, _) | (ReadyForPickup, _) => Some(Preparing),
            (Delivered, _) => Some(OutForDelivery),
            (PickupCompleted, _) => Some(ReadyForPickup),
            (Invoiced, Pickup) => Some(PickupCompleted),
            (Invoiced, Delivery) => Some(Delivered),
            (Feedback, _) => Some(Invoiced),
        }
    }

    /// Human-readable status line; unique per stage.
    pub const fn status_text(self) -> &'static str {
        match self {
            Stage::Placed => "Order placed and awaiting preparation.",
            Stage::Preparing => "Order is being prepared.",
            Stage::OutForDelivery => "Order is out for delivery.",
            Stage::ReadyForPickup => "Order is ready for pickup.",
            Stage::Delivered => "Order delivered successfully.",
            Stage::PickupCompleted => "Pickup completed. Enjoy your meal!",
            Stage::Invoiced => "Invoice generated. Thank you for your order!",
            Stage::Feedback => "Please provide feedback for your order.",
        }
    }

    /// Stable label for logs and metric labels.
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Placed => "placed",
            Stage::Preparing => "preparing",
            Stage::OutForDelivery => "out_for_delivery",
            Stage::ReadyForPickup => "ready_for_pickup",
            Stage::Delivered => "delivered",
            Stage::PickupCompleted => "pickup_completed",
            Stage::Invoiced => "invoiced",
            Stage::Feedback => "feedback",
        }
    }

    pub const fn is_initial(self) -> bool {
        matches!(self, Stage::Placed)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Stage::Feedback)
    }

    /// Whether an order with `mode` can ever be in this stage.
    pub const fn is_reachable_for(self, mode: FulfillmentMode) -> bool {
        match self {
            Stage::OutForDelivery | Stage::Delivered => matches!(mode, FulfillmentMode::Delivery),
            Stage::ReadyForPickup | Stage::PickupCompleted => matches!(mode, FulfillmentMode::Pickup),
            _ => true,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status_text())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

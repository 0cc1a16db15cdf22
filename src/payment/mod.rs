use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Payment Strategies
// ============================================================================
//
// Payments are simulated: each strategy only records what was charged.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    /// 1 = Credit Card, anything else = PayPal.
    pub fn from_menu_choice(choice: u32) -> Self {
        if choice == 1 {
            PaymentMethod::CreditCard
        } else {
            PaymentMethod::PayPal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
        }
    }

    pub fn strategy(self) -> Box<dyn PaymentStrategy> {
        match self {
            PaymentMethod::CreditCard => Box::new(CreditCardPayment),
            PaymentMethod::PayPal => Box::new(PayPalPayment),
        }
    }
}

pub trait PaymentStrategy {
    fn method(&self) -> PaymentMethod;

    fn pay(&self, amount: f64) -> PaymentReceipt {
        let receipt = PaymentReceipt {
            id: Uuid::new_v4(),
            method: self.method(),
            amount,
            paid_at: Utc::now(),
        };
        tracing::info!(
            payment_id = %receipt.id,
            method = receipt.method.label(),
            amount,
            "Payment accepted"
        );
        receipt
    }
}

pub struct CreditCardPayment;

impl PaymentStrategy for CreditCardPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }
}

pub struct PayPalPayment;

impl PaymentStrategy for PayPalPayment {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub id: Uuid,
    pub method: PaymentMethod,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paid {:.2} using {}.", self.amount, self.method.label())
    }
}

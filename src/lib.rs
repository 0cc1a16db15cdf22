//! Console pizza ordering with an order fulfillment lifecycle state machine.
//!
//! The core lives in [`domain::order`]: an [`Order`](domain::order::Order)
//! walks `Placed -> Preparing -> (delivery | pickup branch) -> Invoiced -> Feedback`
//! through `advance`/`retreat`. Everything else is the console program around it.

pub mod config;
pub mod console;
pub mod domain;
pub mod invoice;
pub mod metrics;
pub mod notifications;
pub mod payment;

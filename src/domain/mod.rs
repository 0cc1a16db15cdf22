// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each area has its own subdirectory with value objects, errors and the
// entity that owns the business rules:
// - order     - fulfillment lifecycle state machine
// - pizza     - composition, add-ons and pricing
// - customer  - user profile, favorites and loyalty points
//
// Nothing in this layer performs I/O.
//
// ============================================================================

pub mod order;
pub mod pizza;
pub mod customer;

// ============================================================================
// Order Domain - Fulfillment Lifecycle
// ============================================================================
//
// - Value objects (FulfillmentMode, Stage and its transition table)
// - Events (StageChanged, BoundaryReached)
// - Errors (OrderError)
// - Aggregate (Order, driven through advance/retreat)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use errors::*;
pub use aggregate::*;

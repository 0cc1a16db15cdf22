// ============================================================================
// Pizza Domain - Composition and Pricing
// ============================================================================

pub mod value_objects;
pub mod builder;
pub mod addons;
pub mod pricing;
pub mod errors;

pub use value_objects::*;
pub use builder::*;
pub use addons::*;
pub use pricing::*;
pub use errors::*;

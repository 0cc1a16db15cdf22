// ============================================================================
// Customer Domain - User Profile
// ============================================================================

pub mod profile;
pub mod errors;

pub use profile::*;
pub use errors::*;

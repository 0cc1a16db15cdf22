// ============================================================================
// Console - interactive front end
// ============================================================================
//
// - prompt/   - line-oriented prompting over any BufRead + Write
// - session/  - menu loop and the order placement/processing flow
//
// ============================================================================

mod prompt;
mod session;

pub use prompt::{InputClosed, Prompter};
pub use session::Session;

// ============================================================================
// STATE MODULE - Estado puro (sin DOM), probado en nativo
// ============================================================================

pub mod search_state;
pub mod session_state;

pub use search_state::*;
pub use session_state::*;

// Utils compartidos

pub mod constants;
pub mod cookies;
pub mod dedup;
pub mod routing;

pub use constants::*;
pub use cookies::*;
pub use dedup::*;
pub use routing::*;

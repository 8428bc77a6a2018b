//! Configuration types
//!
//! Pin assignments and tuning constants are fixed at build time.

pub mod hardware;
pub mod timing;

pub use hardware::*;
pub use timing::*;

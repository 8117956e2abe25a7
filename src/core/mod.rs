/*!
 * Core Module
 * Fundamental types, limits, clock and error handling
 */

pub mod clock;
pub mod data_structures;
pub mod errors;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use data_structures::ProgramName;
pub use errors::*;
pub use types::*;

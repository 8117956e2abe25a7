/*!
 * Process Module
 * Process records and the priority-ordered ready queue
 */

pub mod ready_queue;
pub mod types;

// Re-export for convenience
pub use ready_queue::{Ascending, Descending, InvariantViolation, ReadyQueue};
pub use types::{ProcessRecord, ProcessSpec};

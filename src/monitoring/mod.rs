/*!
 * Monitoring
 * Structured logging for the command loop
 */

mod tracer;

pub use tracer::{init_tracing, CommandSpan};

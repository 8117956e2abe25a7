/*!
 * Dispatch Module
 * Command stream parsing, execution and output
 */

pub mod command;
pub mod dispatcher;
pub mod format;
pub mod tokens;

// Re-export for convenience
pub use command::{Command, CommandReader};
pub use dispatcher::{DispatchStats, Dispatcher, Flow};
pub use format::Renderer;
pub use tokens::Tokens;

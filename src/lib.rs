/*!
 * Ready Queue Library
 * Priority-ordered process ready queue with a line-oriented command loop
 */

pub mod config;
pub mod core;
pub mod dispatch;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::{AppError, AppResult, Clock, CommandError, FixedClock, QueueError, SystemClock};
pub use config::{Config, LogFormat, OutputFormat};
pub use dispatch::{Command, CommandReader, DispatchStats, Dispatcher};
pub use monitoring::init_tracing;
pub use process::{ProcessRecord, ProcessSpec, ReadyQueue};

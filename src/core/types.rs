/*!
 * Core Types
 * Common types used across the ready queue
 */

/// Process identifier, unique across the live set
pub type ProcessId = i32;

/// Scheduling priority (lower values are listed first)
pub type Priority = i32;

/// Job type code
pub type JobType = i32;

/// Execution time requested by a process
pub type ExecTime = i32;

/// Wall-clock timestamp in seconds since the Unix epoch
pub type Timestamp = i64;

/// Common result type for application-level operations
pub type AppResult<T> = Result<T, super::errors::AppError>;

/*!
 * System Limits and Constants
 *
 * Centralized location for limits and defaults shared by the list,
 * the command parser and the binary.
 */

// =============================================================================
// PROCESS RECORD LIMITS
// =============================================================================

/// Maximum program name length in bytes
/// Program names arrive as a single token and are stored inline
pub const MAX_PROGRAM_NAME_LEN: usize = 24;

// =============================================================================
// LOGGING
// =============================================================================

/// Default tracing filter when neither `--log-filter` nor `RUST_LOG` is set
/// Program output shares the terminal with logs, so only warnings surface
pub const DEFAULT_LOG_FILTER: &str = "warn";

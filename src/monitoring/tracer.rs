/*!
 * Structured Tracing
 * Subscriber set-up and per-command spans using the tracing crate
 */

use crate::config::{Config, LogFormat};
use crate::core::errors::AppError;
use crate::core::types::{AppResult, ProcessId};
use std::fmt::Display;
use std::time::Instant;
use tracing::{debug, field, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing on stderr
///
/// stdout carries program output, so every layer writes to stderr.
/// A subscriber that is already installed is left in place.
pub fn init_tracing(config: &Config) -> AppResult<()> {
    let env_filter = EnvFilter::try_new(&config.log_filter).map_err(|e| {
        AppError::Configuration(format!("invalid log filter '{}': {}", config.log_filter, e))
    })?;

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init(),
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init(),
    };

    if installed.is_ok() {
        debug!(format = ?config.log_format, filter = %config.log_filter, "tracing initialized");
    }
    Ok(())
}

/// Span covering one dispatched command
pub struct CommandSpan {
    span: Span,
    start: Instant,
}

impl CommandSpan {
    pub fn new(sequence: u64, command: &'static str) -> Self {
        let span = span!(
            Level::DEBUG,
            "command",
            seq = sequence,
            command = command,
            id = field::Empty,
            result = field::Empty,
            error = field::Empty,
            duration_us = field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
        }
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    pub fn record_id(&self, id: ProcessId) {
        self.span.record("id", id);
    }

    pub fn record_success(&self) {
        self.span.record("result", "success");
    }

    pub fn record_error(&self, error: &dyn Display) {
        self.span.record("error", field::display(error));
        self.span.record("result", "error");
    }
}

impl Drop for CommandSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_us", duration.as_micros() as u64);
        let _entered = self.span.enter();
        debug!(duration_us = duration.as_micros() as u64, "command completed");
    }
}

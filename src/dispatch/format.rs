/*!
 * Output Rendering
 * Text and JSON rendering of records, diagnostics and the final listing
 */

use crate::config::OutputFormat;
use crate::core::errors::{CommandError, QueueError};
use crate::core::types::AppResult;
use crate::process::{ProcessRecord, ReadyQueue};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct Listing<'a> {
    ascending: Vec<&'a ProcessRecord>,
    descending: Vec<&'a ProcessRecord>,
}

/// Writes dispatcher output in the configured format
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    format: OutputFormat,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Query result
    pub fn record<W: Write>(&self, out: &mut W, record: &ProcessRecord) -> AppResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(out, "{record}")?,
            OutputFormat::Json => json_line(out, record)?,
        }
        Ok(())
    }

    /// Diagnostic for a rejected insert, delete or query
    pub fn queue_error<W: Write>(&self, out: &mut W, error: &QueueError) -> AppResult<()> {
        match (self.format, error) {
            (OutputFormat::Text, QueueError::DuplicateId { .. }) => {
                writeln!(out)?;
                writeln!(out, "ERROR - {error}")?;
            }
            (OutputFormat::Text, QueueError::NotFound { .. }) => {
                writeln!(out)?;
                writeln!(out, "ERROR - Process does not exist.")?;
            }
            (OutputFormat::Json, _) => json_line(out, error)?,
        }
        Ok(())
    }

    /// Diagnostic for a malformed command
    pub fn command_error<W: Write>(&self, out: &mut W, error: &CommandError) -> AppResult<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out)?;
                writeln!(out, "ERROR - {error}")?;
            }
            OutputFormat::Json => json_line(out, error)?,
        }
        Ok(())
    }

    /// Final ascending and descending listing
    pub fn listing<W: Write>(&self, out: &mut W, queue: &ReadyQueue) -> AppResult<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(out)?;
                writeln!(out, "TERMINATE:")?;

                if queue.is_empty() {
                    writeln!(out)?;
                    writeln!(out, "No processes in ready queue.")?;
                } else {
                    writeln!(out)?;
                    writeln!(out, "Ascending Order:")?;
                    for record in queue.ascending() {
                        writeln!(out, "{record}")?;
                    }

                    writeln!(out)?;
                    writeln!(out, "Descending Order:")?;
                    for record in queue.descending() {
                        writeln!(out, "{record}")?;
                    }
                }

                writeln!(out)?;
                writeln!(out, "END")?;
            }
            OutputFormat::Json => {
                let listing = Listing {
                    ascending: queue.ascending().collect(),
                    descending: queue.descending().collect(),
                };
                json_line(out, &listing)?;
            }
        }
        Ok(())
    }
}

fn json_line<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> AppResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/*!
 * Command Dispatcher
 * Single-threaded command loop over the ready queue
 */

use super::command::{Command, CommandReader};
use super::format::Renderer;
use crate::config::OutputFormat;
use crate::core::clock::{Clock, SystemClock};
use crate::core::errors::{AppError, CommandError, QueueError};
use crate::core::types::AppResult;
use crate::monitoring::CommandSpan;
use crate::process::ReadyQueue;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Whether the command loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// Command loop counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    pub commands: u64,
    pub inserted: u64,
    pub deleted: u64,
    pub queried: u64,
    /// Inserts, deletes and queries rejected by the queue
    pub rejected: u64,
    /// Commands that failed to parse
    pub malformed: u64,
}

/// Executes commands against a ready queue it owns
///
/// Commands run to completion one at a time. Rejected operations and
/// malformed commands produce a diagnostic and the loop continues; only
/// I/O failures end it early.
pub struct Dispatcher<C = SystemClock> {
    queue: ReadyQueue,
    clock: C,
    renderer: Renderer,
    stats: DispatchStats,
}

impl Dispatcher<SystemClock> {
    /// Dispatcher stamping arrivals with the system clock
    pub fn new(format: OutputFormat) -> Self {
        Self::with_clock(SystemClock, format)
    }
}

impl<C: Clock> Dispatcher<C> {
    pub fn with_clock(clock: C, format: OutputFormat) -> Self {
        Self {
            queue: ReadyQueue::new(),
            clock,
            renderer: Renderer::new(format),
            stats: DispatchStats::default(),
        }
    }

    pub fn queue(&self) -> &ReadyQueue {
        &self.queue
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Process commands until `#` or end of input, then write the final listing
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> AppResult<()> {
        for next in CommandReader::new(input) {
            let flow = match next {
                Ok(command) => self.execute(command, out)?,
                Err(err) if err.is_recoverable() => {
                    self.report(err, out)?;
                    Flow::Continue
                }
                Err(err) => return Err(err),
            };

            if flow == Flow::Terminate {
                break;
            }
        }

        self.finish(out)
    }

    /// Execute one command, writing its result or diagnostic
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<Flow> {
        self.stats.commands += 1;
        let span = CommandSpan::new(self.stats.commands, command.name());
        let _guard = span.enter();
        if let Some(id) = command.id() {
            span.record_id(id);
        }

        match command {
            Command::Insert(spec) => {
                let record = spec.arrive(self.clock.now());
                match self.queue.insert(record) {
                    Ok(()) => {
                        self.stats.inserted += 1;
                        span.record_success();
                    }
                    Err(err) => {
                        self.stats.rejected += 1;
                        span.record_error(&err);
                        info!(error = %err, "insert rejected");
                        self.renderer.queue_error(out, &err)?;
                    }
                }
            }
            Command::Delete(id) => match self.queue.delete(id) {
                Ok(_) => {
                    self.stats.deleted += 1;
                    span.record_success();
                }
                Err(err) => {
                    self.stats.rejected += 1;
                    span.record_error(&err);
                    info!(error = %err, "delete rejected");
                    self.renderer.queue_error(out, &err)?;
                }
            },
            Command::Query(id) => {
                self.stats.queried += 1;
                match self.queue.find(id) {
                    Some(record) => {
                        span.record_success();
                        self.renderer.record(out, record)?;
                    }
                    None => {
                        self.stats.rejected += 1;
                        let err = QueueError::NotFound { id };
                        span.record_error(&err);
                        self.renderer.queue_error(out, &err)?;
                    }
                }
            }
            Command::Terminate => {
                span.record_success();
                return Ok(Flow::Terminate);
            }
        }

        Ok(Flow::Continue)
    }

    /// Write the final listing and flush the output
    pub fn finish<W: Write>(&self, out: &mut W) -> AppResult<()> {
        self.renderer.listing(out, &self.queue)?;
        out.flush()?;
        info!(stats = ?self.stats, remaining = self.queue.len(), "ready queue terminated");
        Ok(())
    }

    fn report<W: Write>(&mut self, err: AppError, out: &mut W) -> AppResult<()> {
        match err {
            AppError::Command(CommandError::UnknownOperation { token }) => {
                self.stats.malformed += 1;
                warn!(token = %token, "ignoring unknown operation");
            }
            AppError::Command(err) => {
                self.stats.malformed += 1;
                info!(error = %err, "malformed command");
                self.renderer.command_error(out, &err)?;
            }
            other => return Err(other),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::data_structures::ProgramName;
    use crate::process::ProcessSpec;
    use pretty_assertions::assert_eq;

    fn dispatcher() -> Dispatcher<FixedClock> {
        Dispatcher::with_clock(FixedClock(1_000), OutputFormat::Text)
    }

    fn insert(id: i32, priority: i32) -> Command {
        Command::Insert(ProcessSpec::new(
            id,
            ProgramName::new("app").unwrap(),
            0,
            priority,
            5,
        ))
    }

    #[test]
    fn test_execute_stamps_arrival_time() {
        let mut d = dispatcher();
        let mut out = Vec::new();
        assert_eq!(d.execute(insert(1, 2), &mut out).unwrap(), Flow::Continue);
        assert!(out.is_empty());
        assert_eq!(d.queue().find(1).map(|r| r.arrival_time), Some(1_000));
    }

    #[test]
    fn test_execute_query_writes_record() {
        let mut d = dispatcher();
        let mut out = Vec::new();
        d.execute(insert(3, 4), &mut out).unwrap();
        d.execute(Command::Query(3), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "3, app, 0, 4, 1000, 5\n");
    }

    #[test]
    fn test_execute_terminate() {
        let mut d = dispatcher();
        let mut out = Vec::new();
        assert_eq!(
            d.execute(Command::Terminate, &mut out).unwrap(),
            Flow::Terminate
        );
    }

    #[test]
    fn test_stats_counted() {
        let mut d = dispatcher();
        let mut out = Vec::new();
        d.execute(insert(1, 1), &mut out).unwrap();
        d.execute(insert(1, 1), &mut out).unwrap();
        d.execute(Command::Query(2), &mut out).unwrap();
        d.execute(Command::Delete(1), &mut out).unwrap();
        d.execute(Command::Delete(1), &mut out).unwrap();

        assert_eq!(
            d.stats(),
            DispatchStats {
                commands: 5,
                inserted: 1,
                deleted: 1,
                queried: 1,
                rejected: 3,
                malformed: 0,
            }
        );
    }

    #[test]
    fn test_report_propagates_io_errors() {
        let mut d = dispatcher();
        let mut out = Vec::new();
        let err = AppError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(matches!(d.report(err, &mut out), Err(AppError::Io(_))));
    }
}

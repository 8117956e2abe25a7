/*!
 * Commands
 * Parsing the token stream into typed commands
 */

use super::tokens::Tokens;
use crate::core::data_structures::ProgramName;
use crate::core::errors::CommandError;
use crate::core::limits::MAX_PROGRAM_NAME_LEN;
use crate::core::types::{AppResult, ProcessId};
use crate::process::types::ProcessSpec;
use std::io::BufRead;

/// A single command from the input stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `+ <id> <program> <jobType> <priority> <execTime>`
    Insert(ProcessSpec),
    /// `- <id>`
    Delete(ProcessId),
    /// `? <id>`
    Query(ProcessId),
    /// `#`
    Terminate,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::Delete(_) => "delete",
            Command::Query(_) => "query",
            Command::Terminate => "terminate",
        }
    }

    /// Process id the command refers to
    pub fn id(&self) -> Option<ProcessId> {
        match self {
            Command::Insert(spec) => Some(spec.id),
            Command::Delete(id) | Command::Query(id) => Some(*id),
            Command::Terminate => None,
        }
    }
}

/// Reads commands from a token stream
///
/// The operation is selected by the first character of its token. Each
/// command consumes its full argument count before any argument is
/// validated, so a malformed command never leaves stray arguments to be
/// read as the next operation.
#[derive(Debug)]
pub struct CommandReader<R> {
    tokens: Tokens<R>,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            tokens: Tokens::new(reader),
        }
    }

    /// Next command, or `None` at end of input
    ///
    /// Parse failures surface as [`AppError::Command`](crate::core::AppError::Command),
    /// read failures as [`AppError::Io`](crate::core::AppError::Io).
    pub fn next_command(&mut self) -> Option<AppResult<Command>> {
        match self.tokens.next_token() {
            Ok(Some(op)) => Some(self.read_command(op)),
            Ok(None) => None,
            Err(e) => Some(Err(e.into())),
        }
    }

    fn read_command(&mut self, op: String) -> AppResult<Command> {
        match op.chars().next() {
            Some('+') => {
                let id = self.argument('+', "id")?;
                let program = self.argument('+', "program")?;
                let job_type = self.argument('+', "job type")?;
                let priority = self.argument('+', "priority")?;
                let exec_time = self.argument('+', "execution time")?;

                Ok(Command::Insert(ProcessSpec::new(
                    parse_int("id", &id)?,
                    parse_program(&program)?,
                    parse_int("job type", &job_type)?,
                    parse_int("priority", &priority)?,
                    parse_int("execution time", &exec_time)?,
                )))
            }
            Some('-') => {
                let id = self.argument('-', "id")?;
                Ok(Command::Delete(parse_int("id", &id)?))
            }
            Some('?') => {
                let id = self.argument('?', "id")?;
                Ok(Command::Query(parse_int("id", &id)?))
            }
            Some('#') => Ok(Command::Terminate),
            _ => Err(CommandError::UnknownOperation { token: op }.into()),
        }
    }

    fn argument(&mut self, op: char, field: &str) -> AppResult<String> {
        self.tokens.next_token()?.ok_or_else(|| {
            CommandError::MissingArgument {
                op,
                field: field.to_string(),
            }
            .into()
        })
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = AppResult<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_command()
    }
}

fn parse_int(field: &str, token: &str) -> Result<i32, CommandError> {
    token.parse().map_err(|_| CommandError::InvalidInteger {
        field: field.to_string(),
        token: token.to_string(),
    })
}

fn parse_program(token: &str) -> Result<ProgramName, CommandError> {
    ProgramName::new(token).map_err(|e| CommandError::ProgramNameTooLong {
        len: e.len,
        max: MAX_PROGRAM_NAME_LEN,
    })
}

/*!
 * Process Types
 * Process records held by the ready queue
 */

use crate::core::data_structures::ProgramName;
use crate::core::types::{ExecTime, JobType, Priority, ProcessId, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-supplied process fields, before an arrival time is assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub id: ProcessId,
    pub program: ProgramName,
    pub job_type: JobType,
    pub priority: Priority,
    pub exec_time: ExecTime,
}

impl ProcessSpec {
    #[inline]
    #[must_use]
    pub fn new(
        id: ProcessId,
        program: ProgramName,
        job_type: JobType,
        priority: Priority,
        exec_time: ExecTime,
    ) -> Self {
        Self {
            id,
            program,
            job_type,
            priority,
            exec_time,
        }
    }

    /// Turn the submitted fields into a record arriving at `arrival_time`
    #[inline]
    #[must_use]
    pub fn arrive(self, arrival_time: Timestamp) -> ProcessRecord {
        ProcessRecord {
            id: self.id,
            program: self.program,
            job_type: self.job_type,
            priority: self.priority,
            arrival_time,
            exec_time: self.exec_time,
        }
    }
}

/// Process descriptor owned by the ready queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub program: ProgramName,
    pub job_type: JobType,
    pub priority: Priority,
    pub arrival_time: Timestamp,
    pub exec_time: ExecTime,
}

/// `id, program, jobType, priority, arrivalTime, execTime`
impl fmt::Display for ProcessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}",
            self.id, self.program, self.job_type, self.priority, self.arrival_time, self.exec_time
        )
    }
}

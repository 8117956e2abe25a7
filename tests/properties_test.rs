/*!
 * Ready Queue Property Tests
 * Random insert/delete sequences checked against a vector model
 */

use proptest::prelude::*;
use ready_queue::core::types::{Priority, ProcessId};
use ready_queue::core::ProgramName;
use ready_queue::{ProcessRecord, ProcessSpec, QueueError, ReadyQueue};
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Insert { id: ProcessId, priority: Priority },
    Delete { id: ProcessId },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..24i32, -4..4i32).prop_map(|(id, priority)| Op::Insert { id, priority }),
        1 => (0..24i32).prop_map(|id| Op::Delete { id }),
    ]
}

fn record(id: ProcessId, priority: Priority, arrival: i64) -> ProcessRecord {
    ProcessSpec::new(id, ProgramName::new("prop").unwrap(), id % 4, priority, id * 10)
        .arrive(arrival)
}

/// Reference model: a vector kept in the same order the queue must produce
fn model_insert(model: &mut Vec<ProcessRecord>, record: ProcessRecord) {
    let at = model
        .iter()
        .position(|r| r.priority > record.priority)
        .unwrap_or(model.len());
    model.insert(at, record);
}

proptest! {
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(op_strategy(), 0..80)) {
        let mut queue = ReadyQueue::new();
        let mut model: Vec<ProcessRecord> = Vec::new();

        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Insert { id, priority } => {
                    let rec = record(id, priority, step as i64);
                    let result = queue.insert(rec.clone());
                    let existing = model.iter().find(|r| r.id == id).cloned();
                    match existing {
                        Some(existing) => prop_assert_eq!(
                            result,
                            Err(QueueError::DuplicateId { existing: Box::new(existing) })
                        ),
                        None => {
                            prop_assert!(result.is_ok());
                            model_insert(&mut model, rec);
                        }
                    }
                }
                Op::Delete { id } => {
                    let result = queue.delete(id);
                    match model.iter().position(|r| r.id == id) {
                        Some(at) => prop_assert_eq!(result, Ok(model.remove(at))),
                        None => prop_assert_eq!(result, Err(QueueError::NotFound { id })),
                    }
                    prop_assert!(queue.find(id).is_none());
                }
            }

            prop_assert!(queue.check_invariants().is_ok());
            prop_assert_eq!(queue.len(), model.len());

            let ascending: Vec<&ProcessRecord> = queue.ascending().collect();
            let expected: Vec<&ProcessRecord> = model.iter().collect();
            prop_assert_eq!(&ascending, &expected);
        }
    }

    #[test]
    fn prop_sorted_and_fifo(priorities in prop::collection::vec(-3..3i32, 0..60)) {
        let mut queue = ReadyQueue::new();
        for (id, &priority) in priorities.iter().enumerate() {
            queue.insert(record(id as ProcessId, priority, 0)).unwrap();
        }

        let listed: Vec<&ProcessRecord> = queue.ascending().collect();
        for pair in listed.windows(2) {
            prop_assert!(pair[0].priority <= pair[1].priority);
            if pair[0].priority == pair[1].priority {
                // ids were assigned in insertion order
                prop_assert!(pair[0].id < pair[1].id);
            }
        }
    }

    #[test]
    fn prop_descending_is_reversed_ascending(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut queue = ReadyQueue::new();
        for (step, op) in ops.into_iter().enumerate() {
            let _ = match op {
                Op::Insert { id, priority } => queue.insert(record(id, priority, step as i64)),
                Op::Delete { id } => queue.delete(id).map(|_| ()),
            };
        }

        let mut ascending: Vec<ProcessId> = queue.ascending().map(|r| r.id).collect();
        let descending: Vec<ProcessId> = queue.descending().map(|r| r.id).collect();
        ascending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn prop_ids_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut queue = ReadyQueue::new();
        for (step, op) in ops.into_iter().enumerate() {
            let _ = match op {
                Op::Insert { id, priority } => queue.insert(record(id, priority, step as i64)),
                Op::Delete { id } => queue.delete(id).map(|_| ()),
            };

            let mut seen = HashSet::new();
            prop_assert!(queue.ascending().all(|r| seen.insert(r.id)));
        }
    }

    #[test]
    fn prop_insert_then_find_round_trips(
        id in any::<i32>(),
        program in "[a-z]{1,24}",
        job_type in any::<i32>(),
        priority in any::<i32>(),
        exec_time in any::<i32>(),
        arrival in any::<i64>(),
    ) {
        let spec = ProcessSpec::new(id, ProgramName::new(&program).unwrap(), job_type, priority, exec_time);
        let mut queue = ReadyQueue::new();
        queue.insert(spec.clone().arrive(arrival)).unwrap();

        let found = queue.find(id).unwrap();
        prop_assert_eq!(found.id, spec.id);
        prop_assert_eq!(&found.program, &spec.program);
        prop_assert_eq!(found.job_type, spec.job_type);
        prop_assert_eq!(found.priority, spec.priority);
        prop_assert_eq!(found.exec_time, spec.exec_time);
        prop_assert_eq!(found.arrival_time, arrival);
    }
}

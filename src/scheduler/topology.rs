//! Topological ordering of a project network.
//!
//! # Algorithm
//!
//! Kahn's algorithm: seed a queue with zero-in-degree activities, then
//! repeatedly pop one and decrement its successors' in-degrees, enqueueing
//! any that reach zero. Cycle detection falls out as a by-product — any
//! activity with unresolved in-degree after the queue drains is part of or
//! downstream of a cycle.
//!
//! Ties among independent activities are broken by insertion order, which
//! keeps the ordering deterministic. Tie order never affects the computed
//! schedule, only the visit sequence.
//!
//! # Reference
//! Kahn (1962), "Topological sorting of large networks"

use std::collections::{HashMap, VecDeque};

use crate::models::ProjectNetwork;

/// Errors from a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The network is not acyclic; forward/backward passes are undefined.
    ///
    /// `unresolved` lists every activity that could not be ordered
    /// (members of a cycle and everything downstream of one), sorted by ID.
    Cycle { unresolved: Vec<String> },
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::Cycle { unresolved } => {
                write!(
                    f,
                    "Dependency cycle detected; unresolved activities: {}",
                    unresolved.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// Computes a topological order of the network's activity IDs.
///
/// Every predecessor appears before its successors. Any valid order is
/// acceptable to the CPM passes; this one is deterministic for a given
/// insertion order.
///
/// # Errors
/// [`ScheduleError::Cycle`] if the network contains a dependency cycle.
pub fn topological_order(network: &ProjectNetwork) -> Result<Vec<&str>, ScheduleError> {
    let mut in_degree: HashMap<&str, usize> = network
        .activities()
        .map(|act| (act.id.as_str(), act.predecessors.len()))
        .collect();

    let mut queue: VecDeque<&str> = network
        .activities()
        .filter(|act| act.is_source())
        .map(|act| act.id.as_str())
        .collect();

    let mut order: Vec<&str> = Vec::with_capacity(network.len());

    while let Some(id) = queue.pop_front() {
        order.push(id);

        for succ in network.successors(id) {
            if let Some(degree) = in_degree.get_mut(succ.as_str()) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(succ.as_str());
                }
            }
        }
    }

    if order.len() != network.len() {
        let mut unresolved: Vec<String> = in_degree
            .iter()
            .filter(|(_, &degree)| degree > 0)
            .map(|(&id, _)| id.to_string())
            .collect();
        unresolved.sort_unstable();
        return Err(ScheduleError::Cycle { unresolved });
    }

    Ok(order)
}

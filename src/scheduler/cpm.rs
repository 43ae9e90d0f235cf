//! Critical Path Method scheduler.
//!
//! # Algorithm
//!
//! 1. Topological order (Kahn's algorithm; rejects cyclic networks).
//! 2. Forward pass in that order: `ES = max(EF of predecessors)` (0 for
//!    sources), `EF = ES + duration`. The `max` is the key semantic —
//!    predecessors run with whatever parallelism precedence allows, and
//!    the activity waits for all of them.
//! 3. Backward pass in reverse order: `LF = min(LS of successors)`
//!    (`LF = EF` for sinks), `LS = LF - duration`.
//! 4. `slack = LS - ES`; the critical path is the zero-slack set.
//!
//! Each sink is seeded with its own earliest finish as its deadline, so
//! disconnected subnetworks each carry their own critical chain rather
//! than being measured against the global latest sink.
//!
//! # Complexity
//! O(activities + precedence edges) per run.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use std::collections::HashMap;

use crate::models::{CpmSchedule, ProjectNetwork, ScheduleAnnotation};
use crate::scheduler::topology::{topological_order, ScheduleError};

/// Critical Path Method scheduler.
///
/// A pure function of the network: no configuration, no side effects,
/// no retained state between runs. The same network may be scheduled
/// concurrently from multiple threads; each run allocates its own output.
///
/// # Example
///
/// ```
/// use u_cpm::models::{Activity, ProjectNetwork};
/// use u_cpm::scheduler::CpmScheduler;
///
/// let network = ProjectNetwork::new(vec![
///     Activity::new("A", 7.0),
///     Activity::new("B", 3.0).with_predecessor("A"),
///     Activity::new("C", 6.0),
///     Activity::new("D", 3.0).with_predecessor("C"),
///     Activity::new("E", 2.0).with_predecessors(["B", "D"]),
/// ]).unwrap();
///
/// let schedule = CpmScheduler::new().schedule(&network).unwrap();
///
/// assert_eq!(schedule.project_duration(), 12.0);
/// assert_eq!(
///     schedule.critical_path().into_iter().collect::<Vec<_>>(),
///     vec!["A", "B", "E"],
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CpmScheduler;

impl CpmScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Computes the CPM schedule for a network.
    ///
    /// The network is read-only input; annotations land in a fresh
    /// [`CpmSchedule`]. An empty network yields an empty schedule.
    ///
    /// # Errors
    /// [`ScheduleError::Cycle`] if the network is not acyclic. There is no
    /// partial result for a cyclic network; fix the input and reschedule.
    pub fn schedule(&self, network: &ProjectNetwork) -> Result<CpmSchedule, ScheduleError> {
        let order = topological_order(network)?;

        // Forward pass: earliest times.
        let mut earliest_finish: HashMap<&str, f64> = HashMap::with_capacity(order.len());
        let mut earliest_start: HashMap<&str, f64> = HashMap::with_capacity(order.len());
        for &id in &order {
            let es = network
                .predecessors(id)
                .iter()
                .map(|p| earliest_finish[p.as_str()])
                .fold(0.0, f64::max);
            earliest_start.insert(id, es);
            earliest_finish.insert(id, es + network.get(id).map_or(0.0, |a| a.duration));
        }

        // Backward pass: latest times, seeded per sink with LF = EF.
        let mut latest_start: HashMap<&str, f64> = HashMap::with_capacity(order.len());
        let mut latest_finish: HashMap<&str, f64> = HashMap::with_capacity(order.len());
        for &id in order.iter().rev() {
            let successors = network.successors(id);
            let lf = if successors.is_empty() {
                earliest_finish[id]
            } else {
                successors
                    .iter()
                    .map(|s| latest_start[s.as_str()])
                    .fold(f64::INFINITY, f64::min)
            };
            latest_finish.insert(id, lf);
            latest_start.insert(id, lf - network.get(id).map_or(0.0, |a| a.duration));
        }

        let annotations = order
            .iter()
            .map(|&id| {
                let es = earliest_start[id];
                let ls = latest_start[id];
                (
                    id.to_string(),
                    ScheduleAnnotation {
                        earliest_start: es,
                        earliest_finish: earliest_finish[id],
                        latest_start: ls,
                        latest_finish: latest_finish[id],
                        slack: ls - es,
                    },
                )
            })
            .collect();

        Ok(CpmSchedule::new(annotations))
    }
}

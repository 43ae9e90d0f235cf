//! Project network model.
//!
//! A [`ProjectNetwork`] is a directed acyclic graph of activities whose
//! edges encode "must finish before can start" precedence. Activities
//! declare their predecessors; the network derives the forward adjacency
//! (successor lists) at construction so both directions are cheap to query.
//!
//! Construction validates the input (see [`crate::validation`]) and fails
//! with the full error list on duplicate IDs, dangling predecessor
//! references, or invalid durations. Acyclicity is NOT checked here; a
//! cyclic network is only rejected when scheduled.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::Activity;
use crate::validation::{validate_activities, ValidationError};

/// A project network: the immutable DAG input to the scheduler.
///
/// Owns its activities, keyed by ID, in insertion order. Scheduling
/// treats the network as read-only; a changed duration or edge requires
/// building a new network and rescheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNetwork {
    /// Activities in insertion order.
    activities: Vec<Activity>,
    /// Activity ID → index into `activities`.
    index: HashMap<String, usize>,
    /// Activity ID → IDs of activities that list it as a predecessor.
    successors: HashMap<String, Vec<String>>,
}

impl ProjectNetwork {
    /// Builds a network from activity definitions.
    ///
    /// Validates the definitions first; on failure returns every detected
    /// issue so the caller can fix the input in one pass.
    pub fn new(activities: Vec<Activity>) -> Result<Self, Vec<ValidationError>> {
        validate_activities(&activities)?;

        let index: HashMap<String, usize> = activities
            .iter()
            .enumerate()
            .map(|(i, act)| (act.id.clone(), i))
            .collect();

        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        for act in &activities {
            for pred in &act.predecessors {
                successors
                    .entry(pred.clone())
                    .or_default()
                    .push(act.id.clone());
            }
        }

        Ok(Self {
            activities,
            index,
            successors,
        })
    }

    /// Number of activities in the network.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the network has no activities.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Whether an activity with this ID exists.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up an activity by ID.
    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.index.get(id).map(|&i| &self.activities[i])
    }

    /// Iterates activities in insertion order.
    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    /// Direct predecessors of an activity (empty for unknown IDs).
    pub fn predecessors(&self, id: &str) -> &[String] {
        self.get(id).map(|a| a.predecessors.as_slice()).unwrap_or(&[])
    }

    /// Direct successors of an activity (empty for sinks and unknown IDs).
    pub fn successors(&self, id: &str) -> &[String] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

//! Activity model.
//!
//! An activity is the schedulable unit of work in a project network. It has
//! a fixed duration and a set of direct predecessors — activities that must
//! finish before this one may start.
//!
//! # Reference
//! Kelley & Walker (1959), "Critical-Path Planning and Scheduling"

use serde::{Deserialize, Serialize};

/// An activity in a project network.
///
/// Created once at network construction time and immutable thereafter.
/// Precedence is expressed on the receiving side: each activity lists the
/// ids of the activities it waits on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: String,
    /// Time required to complete this activity (time units, non-negative).
    pub duration: f64,
    /// IDs of activities that must complete before this one starts.
    pub predecessors: Vec<String>,
}

impl Activity {
    /// Creates a new activity with no predecessors.
    pub fn new(id: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            duration,
            predecessors: Vec::new(),
        }
    }

    /// Adds a predecessor activity ID.
    pub fn with_predecessor(mut self, predecessor_id: impl Into<String>) -> Self {
        self.predecessors.push(predecessor_id.into());
        self
    }

    /// Adds several predecessor activity IDs.
    pub fn with_predecessors<I, S>(mut self, predecessor_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.predecessors
            .extend(predecessor_ids.into_iter().map(Into::into));
        self
    }

    /// Whether this activity has no predecessors (a source of the network).
    pub fn is_source(&self) -> bool {
        self.predecessors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("E", 2.0)
            .with_predecessor("B")
            .with_predecessor("D");

        assert_eq!(act.id, "E");
        assert_eq!(act.duration, 2.0);
        assert_eq!(act.predecessors, vec!["B", "D"]);
        assert!(!act.is_source());
    }

    #[test]
    fn test_activity_with_predecessors() {
        let act = Activity::new("E", 2.0).with_predecessors(["B", "D"]);
        assert_eq!(act.predecessors, vec!["B", "D"]);
    }

    #[test]
    fn test_source_activity() {
        let act = Activity::new("A", 7.0);
        assert!(act.is_source());
        assert!(act.predecessors.is_empty());
    }

    #[test]
    fn test_activity_serde_round_trip() {
        let act = Activity::new("B", 3.0).with_predecessor("A");
        let json = serde_json::to_string(&act).unwrap();
        let back: Activity = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, act.id);
        assert_eq!(back.duration, act.duration);
        assert_eq!(back.predecessors, act.predecessors);
    }
}

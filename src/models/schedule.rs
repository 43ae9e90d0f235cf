//! Schedule (solution) model.
//!
//! A [`CpmSchedule`] is the output of one scheduling run: a per-activity
//! timing annotation plus derived views (critical path, project duration,
//! report rows). It is freshly allocated per run and never fed back into
//! the input network.
//!
//! # Invariants
//!
//! For every annotated activity: `EF = ES + duration`, `LS = LF - duration`,
//! and `slack = LS - ES >= 0`. Critical-path membership is always derived
//! from slack, never stored, so it cannot drift from the timing values.
//!
//! # Reference
//! Moder, Phillips & Davis (1983), "Project Management with CPM, PERT and
//! Precedence Diagramming", Ch. 4

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Slack values within this distance of zero count as critical.
///
/// Forward/backward passes only add and subtract input values, so integer
/// inputs produce exact slacks; the tolerance covers fractional durations.
pub const SLACK_TOLERANCE: f64 = 1e-9;

/// Computed timing for a single activity.
///
/// All values are in the same time units as the activity durations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAnnotation {
    /// Earliest start (ES): forward pass, bounded by the slowest predecessor.
    pub earliest_start: f64,
    /// Earliest finish (EF): `ES + duration`.
    pub earliest_finish: f64,
    /// Latest start (LS): `LF - duration`.
    pub latest_start: f64,
    /// Latest finish (LF): backward pass, bounded by the earliest successor.
    pub latest_finish: f64,
    /// Slack: `LS - ES`; delay tolerable without delaying the project.
    pub slack: f64,
}

impl ScheduleAnnotation {
    /// Whether this activity lies on the critical path (zero slack).
    pub fn is_critical(&self) -> bool {
        self.slack.abs() <= SLACK_TOLERANCE
    }

    /// Renders the `"id ES/EF LS/LF"` node label used by network diagrams.
    pub fn label(&self, id: &str) -> String {
        format!(
            "{}\n{}/{}\n{}/{}",
            id, self.earliest_start, self.earliest_finish, self.latest_start, self.latest_finish
        )
    }
}

/// One row of the tabular schedule report.
///
/// Pure data; rendering (alignment, headers, highlighting) is the
/// consumer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Activity identifier.
    pub id: String,
    /// Earliest start.
    pub earliest_start: f64,
    /// Latest start.
    pub latest_start: f64,
    /// Earliest finish.
    pub earliest_finish: f64,
    /// Latest finish.
    pub latest_finish: f64,
    /// Slack (`LS - ES`).
    pub slack: f64,
    /// Whether the activity is on the critical path.
    pub critical: bool,
}

/// A complete CPM schedule: per-activity annotations keyed by activity ID.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpmSchedule {
    annotations: HashMap<String, ScheduleAnnotation>,
}

impl CpmSchedule {
    /// Wraps a finished annotation map.
    pub(crate) fn new(annotations: HashMap<String, ScheduleAnnotation>) -> Self {
        Self { annotations }
    }

    /// Number of annotated activities.
    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    /// Whether the schedule covers no activities (empty network input).
    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// The annotation for one activity, if it was in the scheduled network.
    pub fn annotation(&self, id: &str) -> Option<&ScheduleAnnotation> {
        self.annotations.get(id)
    }

    /// All annotations, keyed by activity ID.
    pub fn annotations(&self) -> &HashMap<String, ScheduleAnnotation> {
        &self.annotations
    }

    /// Whether the given activity is on the critical path.
    ///
    /// Unknown IDs are not critical.
    pub fn is_critical(&self, id: &str) -> bool {
        self.annotation(id).is_some_and(ScheduleAnnotation::is_critical)
    }

    /// The critical path: every zero-slack activity, in ID order.
    ///
    /// Recomputed from slack on each call. Note this is a set, not a single
    /// chain: parallel zero-slack branches all belong to it.
    pub fn critical_path(&self) -> BTreeSet<&str> {
        self.annotations
            .iter()
            .filter(|(_, ann)| ann.is_critical())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Minimum project completion time: `max(EF)` over all activities.
    ///
    /// Zero for an empty schedule.
    pub fn project_duration(&self) -> f64 {
        self.annotations
            .values()
            .map(|ann| ann.earliest_finish)
            .fold(0.0, f64::max)
    }

    /// Report rows for every activity, sorted by activity ID.
    pub fn rows(&self) -> Vec<ScheduleRow> {
        let mut ids: Vec<&str> = self.annotations.keys().map(String::as_str).collect();
        ids.sort_unstable();

        ids.into_iter()
            .map(|id| {
                let ann = &self.annotations[id];
                ScheduleRow {
                    id: id.to_string(),
                    earliest_start: ann.earliest_start,
                    latest_start: ann.latest_start,
                    earliest_finish: ann.earliest_finish,
                    latest_finish: ann.latest_finish,
                    slack: ann.slack,
                    critical: ann.is_critical(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotation(es: f64, duration: f64, ls: f64) -> ScheduleAnnotation {
        ScheduleAnnotation {
            earliest_start: es,
            earliest_finish: es + duration,
            latest_start: ls,
            latest_finish: ls + duration,
            slack: ls - es,
        }
    }

    fn sample_schedule() -> CpmSchedule {
        let mut annotations = HashMap::new();
        annotations.insert("A".to_string(), annotation(0.0, 7.0, 0.0));
        annotations.insert("C".to_string(), annotation(0.0, 6.0, 1.0));
        CpmSchedule::new(annotations)
    }

    #[test]
    fn test_is_critical_derived_from_slack() {
        let schedule = sample_schedule();
        assert!(schedule.is_critical("A"));
        assert!(!schedule.is_critical("C"));
        assert!(!schedule.is_critical("UNKNOWN"));
    }

    #[test]
    fn test_critical_path_set() {
        let schedule = sample_schedule();
        let path = schedule.critical_path();
        assert_eq!(path.into_iter().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_project_duration_is_max_ef() {
        let schedule = sample_schedule();
        assert_eq!(schedule.project_duration(), 7.0);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = CpmSchedule::default();
        assert!(schedule.is_empty());
        assert_eq!(schedule.project_duration(), 0.0);
        assert!(schedule.critical_path().is_empty());
        assert!(schedule.rows().is_empty());
    }

    #[test]
    fn test_rows_sorted_by_id() {
        let rows = sample_schedule().rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "A");
        assert!(rows[0].critical);
        assert_eq!(rows[1].id, "C");
        assert_eq!(rows[1].slack, 1.0);
        assert!(!rows[1].critical);
    }

    #[test]
    fn test_label_format() {
        let ann = annotation(7.0, 3.0, 7.0);
        assert_eq!(ann.label("B"), "B\n7/10\n7/10");
    }

    #[test]
    fn test_schedule_serde_round_trip() {
        let schedule = sample_schedule();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: CpmSchedule = serde_json::from_str(&json).unwrap();

        assert_eq!(back, schedule);
        assert_eq!(back.annotation("A"), schedule.annotation("A"));
    }
}

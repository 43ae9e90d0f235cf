//! CPM domain models.
//!
//! Provides the core data types for representing a project network and
//! its computed schedule.
//!
//! # Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Activity`] | Unit of work: id, duration, predecessors |
//! | [`ProjectNetwork`] | Validated DAG of activities (the input) |
//! | [`ScheduleAnnotation`] | ES/EF/LS/LF/slack for one activity |
//! | [`CpmSchedule`] | Annotation map + derived views (the output) |
//! | [`ScheduleRow`] | One row of the tabular report |

mod activity;
mod network;
mod schedule;

pub use activity::Activity;
pub use network::ProjectNetwork;
pub use schedule::{CpmSchedule, ScheduleAnnotation, ScheduleRow, SLACK_TOLERANCE};

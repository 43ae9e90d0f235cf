//! Critical Path Method scheduling for the U-Engine ecosystem.
//!
//! Computes the CPM schedule of a project represented as a DAG of
//! activities: earliest/latest start and finish times, slack, and the
//! critical path that bounds the minimum project completion time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Activity`, `ProjectNetwork`,
//!   `CpmSchedule`, `ScheduleAnnotation`, `ScheduleRow`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   predecessor references, invalid durations)
//! - **`scheduler`**: Topological ordering and the two-pass CPM algorithm
//!
//! # Usage
//!
//! ```
//! use u_cpm::models::{Activity, ProjectNetwork};
//! use u_cpm::scheduler::CpmScheduler;
//!
//! let network = ProjectNetwork::new(vec![
//!     Activity::new("design", 7.0),
//!     Activity::new("build", 3.0).with_predecessor("design"),
//!     Activity::new("test", 2.0).with_predecessor("build"),
//! ]).unwrap();
//!
//! let schedule = CpmScheduler::new().schedule(&network).unwrap();
//! assert_eq!(schedule.project_duration(), 12.0);
//! assert!(schedule.is_critical("build"));
//! ```
//!
//! Input construction (tables, files) and output rendering (diagrams,
//! report tables) are the caller's concern: the crate consumes activity
//! definitions and exposes the annotation map, critical-path set, and
//! plain report rows.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Moder, Phillips & Davis (1983), "Project Management with CPM, PERT
//!   and Precedence Diagramming"

pub mod models;
pub mod scheduler;
pub mod validation;

//! CPM scheduling algorithms.
//!
//! Provides the two-pass Critical Path Method scheduler and the
//! topological ordering it is built on.
//!
//! # Algorithm
//!
//! [`CpmScheduler`] runs a forward pass (earliest times) over a
//! topological order of the network, then a backward pass (latest times)
//! over the reverse order. Slack falls out as `LS - ES`; zero-slack
//! activities form the critical path.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Kahn (1962), "Topological sorting of large networks"

mod cpm;
mod topology;

pub use cpm::CpmScheduler;
pub use topology::{topological_order, ScheduleError};

//! Critical path method scheduling over finish-to-start dependency graphs.
//!
//! A [`Project`] owns an arena of tasks linked by dependency indices. The
//! [`forward_pass`] computes the earliest window for every task and the
//! project horizon; the [`backward_pass`] propagates deadlines back through
//! the graph to compute latest windows; [`critical_path`] extracts the
//! zero-slack tasks. [`schedule`] runs the passes in sequence.

pub mod backward_pass;
mod config;
pub mod critical_path;
pub mod demos;
mod error;
pub mod forward_pass;
pub mod input;
pub mod logging;
mod models;
mod ordering;
mod project;
pub mod report;

pub use backward_pass::backward_pass;
pub use config::ScheduleConfig;
pub use critical_path::critical_path;
pub use error::ScheduleError;
pub use forward_pass::forward_pass;
pub use models::{Task, TaskDef, TaskId, TimeWindow};
pub use ordering::topological_order;
pub use project::Project;

/// Compute the full schedule: forward pass, then backward pass against the
/// horizon (or the config's explicit deadline).
///
/// The forward pass completes before the backward pass begins; on error the
/// project is left without the windows of the failed pass.
pub fn schedule(project: &mut Project, config: &ScheduleConfig) -> Result<(), ScheduleError> {
    forward_pass::forward_pass(project, config)?;
    let horizon_end = project.horizon().map(|window| window.end).unwrap_or(0);
    let deadline = config.deadline.unwrap_or(horizon_end);
    backward_pass::backward_pass(project, deadline, config)
}

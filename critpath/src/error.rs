//! Error types for graph construction and scheduling.

use thiserror::Error;

/// Failures detected while building or scheduling a project.
///
/// Every failure is reported to the caller; nothing is recovered or clamped
/// into a partial schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A task id was added twice.
    #[error("duplicate task id {0:?}")]
    DuplicateTaskId(String),

    /// A task declared a dependency on an id the project does not contain.
    #[error("task {task:?} depends on unknown task {dependency:?}")]
    UnknownDependency { task: String, dependency: String },

    /// The dependency graph cannot be linearized.
    #[error("circular dependency detected in task graph")]
    CircularDependency,

    /// A task duration was negative or otherwise unusable.
    #[error("task {task:?} has invalid duration {duration}")]
    InvalidDuration { task: String, duration: i64 },

    /// A task cannot meet its deadline; `shortfall` is how many time units
    /// are missing.
    #[error("infeasible schedule: task {task:?} misses its deadline by {shortfall}")]
    InfeasibleSchedule { task: String, shortfall: i64 },
}

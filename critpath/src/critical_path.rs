//! Critical path extraction from a fully scheduled project.

use crate::error::ScheduleError;
use crate::models::TaskId;
use crate::project::Project;

/// Collect every zero-slack task, in graph order.
///
/// Any delay to a zero-slack task delays the whole project. The returned set
/// may hold several disjoint zero-slack chains; reconstructing one ordered
/// chain is the consumer's business, by following dependency edges within
/// the set. Negative slack means the latest windows cannot accommodate the
/// earliest ones (an over-constrained or inconsistent graph) and is a fatal
/// error, not a value to clamp. Tasks whose windows have not been computed
/// are skipped.
pub fn critical_path(project: &Project) -> Result<Vec<TaskId>, ScheduleError> {
    let mut path = Vec::new();
    for (id, task) in project.tasks() {
        let Some(slack) = task.slack() else {
            continue;
        };
        if slack < 0 {
            return Err(ScheduleError::InfeasibleSchedule {
                task: task.id().to_string(),
                shortfall: -slack,
            });
        }
        if slack == 0 {
            path.push(id);
        }
    }
    Ok(path)
}

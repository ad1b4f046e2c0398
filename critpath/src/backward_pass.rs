//! Backward pass: latest start/finish times via deadline propagation.

use crate::config::ScheduleConfig;
use crate::error::ScheduleError;
use crate::models::TimeWindow;
use crate::ordering::topological_order;
use crate::project::Project;
use crate::{log_changes, log_checks};

/// Compute the latest window for every task against a fixed deadline.
///
/// A single sweep in reverse topological order: terminal tasks (no
/// dependents) are seeded at the deadline, and every other task's latest
/// finish is the minimum latest start over its dependents; where paths
/// converge, the tightest constraint wins. Each dependent is already
/// resolved when its dependencies are visited, so one O(V+E) sweep replaces
/// per-path relaxation.
///
/// The deadline is normally the horizon end from the forward pass; a tighter
/// value squeezes slack out of the schedule and may make it infeasible. If a
/// task's latest finish leaves no room for its duration, the subtraction
/// would produce a negative start time and the pass fails with
/// `InfeasibleSchedule` instead; no windows are committed on failure.
pub fn backward_pass(
    project: &mut Project,
    deadline: i64,
    config: &ScheduleConfig,
) -> Result<(), ScheduleError> {
    let order = topological_order(project)?;

    let mut latest: Vec<Option<TimeWindow>> = vec![None; project.len()];

    for &id in order.iter().rev() {
        let mut latest_end = i64::MAX;
        for &dependent in project.dependents_of(id) {
            if let Some(window) = latest[dependent as usize] {
                log_checks!(
                    config.verbosity,
                    "{}: candidate deadline {} from {}",
                    project.task(id).id(),
                    window.start,
                    project.task(dependent).id()
                );
                if window.start < latest_end {
                    latest_end = window.start;
                }
            }
        }
        if latest_end == i64::MAX {
            // Terminal task: nothing depends on it, the project deadline applies.
            latest_end = deadline;
        }

        let task = project.task(id);
        let duration = task.duration();
        if latest_end < duration {
            return Err(ScheduleError::InfeasibleSchedule {
                task: task.id().to_string(),
                shortfall: duration - latest_end,
            });
        }

        latest[id as usize] = Some(TimeWindow::new(latest_end - duration, latest_end));
        log_changes!(
            config.verbosity,
            "{}: latest [{}, {}]",
            task.id(),
            latest_end - duration,
            latest_end
        );
    }

    for &id in &order {
        if let Some(window) = latest[id as usize] {
            project.task_mut(id).set_latest(window);
        }
    }
    Ok(())
}

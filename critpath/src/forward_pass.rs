//! Forward pass: earliest start/finish times.

use crate::config::ScheduleConfig;
use crate::error::ScheduleError;
use crate::log_changes;
use crate::models::TimeWindow;
use crate::ordering::topological_order;
use crate::project::Project;

/// Compute the earliest window for every task and the project horizon.
///
/// Tasks are visited in topological order, so each task's dependencies are
/// already scheduled when it is reached: its earliest start is the maximum
/// earliest finish over its dependencies (time zero if it has none). Single
/// pass, O(V+E); the result is the minimal feasible assignment consistent
/// with the dependency edges.
pub fn forward_pass(project: &mut Project, config: &ScheduleConfig) -> Result<(), ScheduleError> {
    let order = topological_order(project)?;

    let mut horizon_end = 0i64;
    for &id in &order {
        let task = project.task(id);
        let duration = task.duration();

        let mut start = 0i64;
        for &dep in task.dependencies() {
            if let Some(window) = project.task(dep).earliest() {
                if window.end > start {
                    start = window.end;
                }
            }
        }

        let end = start + duration;
        project.task_mut(id).set_earliest(TimeWindow::new(start, end));
        if end > horizon_end {
            horizon_end = end;
        }
        log_changes!(
            config.verbosity,
            "{}: earliest [{}, {}]",
            project.task(id).id(),
            start,
            end
        );
    }

    project.set_horizon(TimeWindow::new(0, horizon_end));
    log_changes!(config.verbosity, "horizon: {}", horizon_end);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDef;

    fn scheduled(defs: Vec<TaskDef>) -> Project {
        let mut project = Project::from_defs(defs).unwrap();
        forward_pass(&mut project, &ScheduleConfig::default()).unwrap();
        project
    }

    #[test]
    fn test_linear_chain() {
        let project = scheduled(vec![
            TaskDef::new("a", 6),
            TaskDef::new("b", 4).after(["a"]),
            TaskDef::new("c", 5).after(["b"]),
        ]);

        assert_eq!(project.get("a").unwrap().earliest(), Some(TimeWindow::new(0, 6)));
        assert_eq!(project.get("b").unwrap().earliest(), Some(TimeWindow::new(6, 10)));
        assert_eq!(project.get("c").unwrap().earliest(), Some(TimeWindow::new(10, 15)));
        assert_eq!(project.horizon(), Some(TimeWindow::new(0, 15)));
    }

    #[test]
    fn test_diamond() {
        let project = scheduled(vec![
            TaskDef::new("a", 10),
            TaskDef::new("b", 4).after(["a"]),
            TaskDef::new("c", 7).after(["a"]),
            TaskDef::new("d", 5).after(["c"]),
            TaskDef::new("e", 5).after(["b", "d"]),
            TaskDef::new("f", 3).after(["c"]),
        ]);

        assert_eq!(project.get("a").unwrap().earliest(), Some(TimeWindow::new(0, 10)));
        assert_eq!(project.get("b").unwrap().earliest(), Some(TimeWindow::new(10, 14)));
        assert_eq!(project.get("c").unwrap().earliest(), Some(TimeWindow::new(10, 17)));
        assert_eq!(project.get("d").unwrap().earliest(), Some(TimeWindow::new(17, 22)));
        assert_eq!(project.get("e").unwrap().earliest(), Some(TimeWindow::new(22, 27)));
        assert_eq!(project.get("f").unwrap().earliest(), Some(TimeWindow::new(17, 20)));
        assert_eq!(project.horizon(), Some(TimeWindow::new(0, 27)));
    }

    #[test]
    fn test_window_matches_duration() {
        let project = scheduled(vec![
            TaskDef::new("a", 3),
            TaskDef::new("b", 0).after(["a"]),
            TaskDef::new("c", 9).after(["b"]),
        ]);

        for (_, task) in project.tasks() {
            let window = task.earliest().unwrap();
            assert_eq!(window.span(), task.duration());
        }
    }

    #[test]
    fn test_start_is_max_dependency_finish() {
        let project = scheduled(vec![
            TaskDef::new("short", 2),
            TaskDef::new("long", 9),
            TaskDef::new("join", 1).after(["short", "long"]),
        ]);

        let join = project.get("join").unwrap();
        assert_eq!(join.earliest().unwrap().start, 9);
    }

    #[test]
    fn test_empty_project_horizon() {
        let mut project = Project::new();
        forward_pass(&mut project, &ScheduleConfig::default()).unwrap();
        assert_eq!(project.horizon(), Some(TimeWindow::new(0, 0)));
    }

    #[test]
    fn test_cycle_fails_before_any_windows_are_set() {
        let mut project = Project::from_defs(vec![
            TaskDef::new("a", 1).after(["b"]),
            TaskDef::new("b", 1).after(["a"]),
        ])
        .unwrap();

        let err = forward_pass(&mut project, &ScheduleConfig::default()).unwrap_err();
        assert_eq!(err, ScheduleError::CircularDependency);
        assert!(project.tasks().all(|(_, task)| task.earliest().is_none()));
        assert!(project.horizon().is_none());
    }
}

//! Topological ordering of the dependency graph.

use std::collections::VecDeque;

use crate::error::ScheduleError;
use crate::models::TaskId;
use crate::project::Project;

/// Order tasks so that every dependency appears before its dependents,
/// using Kahn's algorithm over the arena.
///
/// The result is deterministic for a given insertion order. Fails with
/// `CircularDependency` if the graph cannot be linearized; the passes call
/// this themselves rather than trusting caller-supplied order.
pub fn topological_order(project: &Project) -> Result<Vec<TaskId>, ScheduleError> {
    let n = project.len();

    let mut in_degree: Vec<usize> = vec![0; n];
    for (id, task) in project.tasks() {
        in_degree[id as usize] = task.dependencies().len();
    }

    let mut queue: VecDeque<TaskId> = project
        .tasks()
        .map(|(id, _)| id)
        .filter(|&id| in_degree[id as usize] == 0)
        .collect();

    let mut order: Vec<TaskId> = Vec::with_capacity(n);

    while let Some(id) = queue.pop_front() {
        order.push(id);

        for &dependent in project.dependents_of(id) {
            let degree = &mut in_degree[dependent as usize];
            *degree -= 1;
            if *degree == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if order.len() != n {
        return Err(ScheduleError::CircularDependency);
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskDef;

    #[test]
    fn test_dependencies_precede_dependents() {
        let project = Project::from_defs(vec![
            TaskDef::new("c", 1).after(["b"]),
            TaskDef::new("b", 1).after(["a"]),
            TaskDef::new("a", 1),
        ])
        .unwrap();

        let order = topological_order(&project).unwrap();
        let position = |name: &str| {
            let id = project.lookup(name).unwrap();
            order.iter().position(|&t| t == id).unwrap()
        };

        assert!(position("a") < position("b"));
        assert!(position("b") < position("c"));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_order_is_deterministic() {
        let defs = || {
            vec![
                TaskDef::new("a", 1),
                TaskDef::new("b", 1).after(["a"]),
                TaskDef::new("c", 1).after(["a"]),
                TaskDef::new("d", 1).after(["b", "c"]),
            ]
        };
        let first = topological_order(&Project::from_defs(defs()).unwrap()).unwrap();
        let second = topological_order(&Project::from_defs(defs()).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_two_task_cycle_is_rejected() {
        let project = Project::from_defs(vec![
            TaskDef::new("a", 1).after(["b"]),
            TaskDef::new("b", 1).after(["a"]),
        ])
        .unwrap();

        assert_eq!(
            topological_order(&project),
            Err(ScheduleError::CircularDependency)
        );
    }

    #[test]
    fn test_self_cycle_is_rejected() {
        let project = Project::from_defs(vec![TaskDef::new("a", 1).after(["a"])]).unwrap();
        assert_eq!(
            topological_order(&project),
            Err(ScheduleError::CircularDependency)
        );
    }

    #[test]
    fn test_empty_project() {
        let project = Project::new();
        assert_eq!(topological_order(&project).unwrap(), Vec::<TaskId>::new());
    }
}

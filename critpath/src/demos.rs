//! Built-in demonstration plans.
//!
//! Both plans are fixed data and schedule to the same result on every run.

use crate::models::TaskDef;

/// Plan "a": a twelve-task network with four endpoints.
pub fn demo_a() -> Vec<TaskDef> {
    vec![
        TaskDef::new("A", 6),
        TaskDef::new("B", 2),
        TaskDef::new("C", 3),
        TaskDef::new("D", 10).after(["A"]),
        TaskDef::new("E", 3).after(["A"]),
        TaskDef::new("F", 2).after(["B"]),
        TaskDef::new("G", 4).after(["C"]),
        TaskDef::new("H", 5).after(["E"]),
        TaskDef::new("I", 8).after(["F", "G"]),
        TaskDef::new("J", 6).after(["G"]),
        TaskDef::new("K", 4).after(["I"]),
        TaskDef::new("L", 2).after(["J"]),
    ]
}

/// Plan "b": a six-task diamond with two converging branches.
pub fn demo_b() -> Vec<TaskDef> {
    vec![
        TaskDef::new("A", 10),
        TaskDef::new("B", 4).after(["A"]),
        TaskDef::new("C", 7).after(["A"]),
        TaskDef::new("D", 5).after(["C"]),
        TaskDef::new("E", 5).after(["B", "D"]),
        TaskDef::new("F", 3).after(["C"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScheduleConfig;
    use crate::critical_path::critical_path;
    use crate::project::Project;
    use crate::schedule;

    fn run(defs: Vec<TaskDef>) -> (Project, Vec<String>) {
        let mut project = Project::from_defs(defs).unwrap();
        schedule(&mut project, &ScheduleConfig::default()).unwrap();
        let critical = critical_path(&project)
            .unwrap()
            .into_iter()
            .map(|id| project.task(id).id().to_string())
            .collect();
        (project, critical)
    }

    #[test]
    fn test_demo_a_schedule() {
        let (project, critical) = run(demo_a());

        assert_eq!(project.horizon().unwrap().end, 19);
        assert_eq!(critical, vec!["C", "G", "I", "K"]);

        // The zero-slack chain accounts for the whole horizon.
        assert_eq!(3 + 4 + 8 + 4, 19);

        let slack = |name: &str| project.get(name).unwrap().slack().unwrap();
        assert_eq!(slack("A"), 3);
        assert_eq!(slack("B"), 3);
        assert_eq!(slack("D"), 3);
        assert_eq!(slack("E"), 5);
        assert_eq!(slack("F"), 3);
        assert_eq!(slack("H"), 5);
        assert_eq!(slack("J"), 4);
        assert_eq!(slack("L"), 4);
    }

    #[test]
    fn test_demo_b_schedule() {
        let (project, critical) = run(demo_b());

        assert_eq!(project.horizon().unwrap().end, 27);
        assert_eq!(critical, vec!["A", "C", "D", "E"]);
        assert_eq!(project.get("B").unwrap().slack(), Some(8));
        assert_eq!(project.get("F").unwrap().slack(), Some(7));
    }

    #[test]
    fn test_demo_runs_are_reproducible() {
        let (first, first_critical) = run(demo_a());
        let (second, second_critical) = run(demo_a());

        assert_eq!(first_critical, second_critical);
        for ((_, a), (_, b)) in first.tasks().zip(second.tasks()) {
            assert_eq!(a.earliest(), b.earliest());
            assert_eq!(a.latest(), b.latest());
        }
    }
}

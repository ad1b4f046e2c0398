//! Plain-text rendering of a computed schedule.

use std::fmt::Write;

use crate::models::{TaskId, TimeWindow};
use crate::project::Project;

fn window(w: Option<TimeWindow>) -> String {
    match w {
        Some(w) => format!("[{}, {}]", w.start, w.end),
        None => "-".to_string(),
    }
}

/// Render one row per task (duration, earliest window, latest window,
/// slack, critical marker), then the horizon and the critical task set.
pub fn render(project: &Project, critical: &[TaskId]) -> String {
    let id_width = project
        .tasks()
        .map(|(_, task)| task.id().len())
        .max()
        .unwrap_or(0)
        .max("task".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<id_width$}  {:>4}  {:>10}  {:>10}  {:>5}",
        "task", "dur", "earliest", "latest", "slack"
    );

    for (id, task) in project.tasks() {
        let slack = match task.slack() {
            Some(slack) => slack.to_string(),
            None => "-".to_string(),
        };
        let marker = if critical.contains(&id) { "  *" } else { "" };
        let _ = writeln!(
            out,
            "{:<id_width$}  {:>4}  {:>10}  {:>10}  {:>5}{}",
            task.id(),
            task.duration(),
            window(task.earliest()),
            window(task.latest()),
            slack,
            marker
        );
    }

    if let Some(horizon) = project.horizon() {
        let _ = writeln!(out, "\nhorizon: {}", horizon.end);
    }
    let names: Vec<&str> = critical.iter().map(|&id| project.task(id).id()).collect();
    let _ = writeln!(out, "critical tasks: {}", names.join(" "));

    out
}

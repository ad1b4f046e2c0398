//! The dependency graph: an arena of tasks with id-based lookups.
//!
//! Tasks are owned by the [`Project`] and addressed by [`TaskId`] indices.
//! Dependency edges are resolved against the arena at insertion time, and
//! reverse edges (dependents) are maintained alongside so the backward pass
//! can walk the graph in either direction without rebuilding maps.

use rustc_hash::FxHashMap;

use crate::error::ScheduleError;
use crate::models::{Task, TaskDef, TaskId, TimeWindow};

/// An ordered collection of tasks forming a finish-to-start dependency graph.
#[derive(Debug, Default)]
pub struct Project {
    tasks: Vec<Task>,
    index: FxHashMap<String, TaskId>,
    dependents: Vec<Vec<TaskId>>,
    horizon: Option<TimeWindow>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task to the project.
    ///
    /// Every dependency must already be present in the project; referencing
    /// an absent id (including the task's own) is an error. Dependency lists
    /// are treated as sets: repeated ids collapse to one edge.
    pub fn add_task(&mut self, def: TaskDef) -> Result<TaskId, ScheduleError> {
        if def.duration < 0 {
            return Err(ScheduleError::InvalidDuration {
                task: def.id,
                duration: def.duration,
            });
        }
        if self.index.contains_key(&def.id) {
            return Err(ScheduleError::DuplicateTaskId(def.id));
        }

        let mut deps: Vec<TaskId> = Vec::with_capacity(def.depends_on.len());
        for name in &def.depends_on {
            let dep = *self
                .index
                .get(name)
                .ok_or_else(|| ScheduleError::UnknownDependency {
                    task: def.id.clone(),
                    dependency: name.clone(),
                })?;
            if !deps.contains(&dep) {
                deps.push(dep);
            }
        }

        let id = self.tasks.len() as TaskId;
        for &dep in &deps {
            self.dependents[dep as usize].push(id);
        }
        self.dependents.push(Vec::new());
        self.index.insert(def.id.clone(), id);
        self.tasks.push(Task::new(def.id, def.duration, deps));
        Ok(id)
    }

    /// Build a project from a batch of definitions.
    ///
    /// Unlike [`add_task`](Self::add_task), definitions may reference tasks
    /// declared later in the batch: all ids are registered first, then
    /// dependency lists are resolved. A batch whose references form a cycle
    /// constructs successfully and is rejected by the topological sort when
    /// scheduling starts.
    pub fn from_defs<I>(defs: I) -> Result<Self, ScheduleError>
    where
        I: IntoIterator<Item = TaskDef>,
    {
        let mut project = Self::new();
        let mut pending: Vec<Vec<String>> = Vec::new();

        for def in defs {
            if def.duration < 0 {
                return Err(ScheduleError::InvalidDuration {
                    task: def.id,
                    duration: def.duration,
                });
            }
            if project.index.contains_key(&def.id) {
                return Err(ScheduleError::DuplicateTaskId(def.id));
            }
            let id = project.tasks.len() as TaskId;
            project.index.insert(def.id.clone(), id);
            project.dependents.push(Vec::new());
            project.tasks.push(Task::new(def.id, def.duration, Vec::new()));
            pending.push(def.depends_on);
        }

        for (idx, names) in pending.into_iter().enumerate() {
            let id = idx as TaskId;
            for name in names {
                let dep =
                    *project
                        .index
                        .get(&name)
                        .ok_or_else(|| ScheduleError::UnknownDependency {
                            task: project.tasks[idx].id().to_string(),
                            dependency: name,
                        })?;
                if !project.tasks[idx].dependencies().contains(&dep) {
                    project.tasks[idx].push_dependency(dep);
                    project.dependents[dep as usize].push(id);
                }
            }
        }

        Ok(project)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Borrow a task by arena index. The id must come from this project.
    pub fn task(&self, id: TaskId) -> &Task {
        &self.tasks[id as usize]
    }

    pub(crate) fn task_mut(&mut self, id: TaskId) -> &mut Task {
        &mut self.tasks[id as usize]
    }

    /// Look up a task's arena index by its string id.
    pub fn lookup(&self, id: &str) -> Option<TaskId> {
        self.index.get(id).copied()
    }

    /// Borrow a task by its string id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.lookup(id).map(|tid| self.task(tid))
    }

    /// Iterate tasks in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = (TaskId, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| (idx as TaskId, task))
    }

    /// Tasks whose dependency sets contain `id`.
    pub fn dependents_of(&self, id: TaskId) -> &[TaskId] {
        &self.dependents[id as usize]
    }

    /// Tasks with no dependents: the endpoints of the schedule.
    pub fn terminal_tasks(&self) -> Vec<TaskId> {
        self.tasks()
            .map(|(id, _)| id)
            .filter(|&id| self.dependents_of(id).is_empty())
            .collect()
    }

    /// The overall project window, from time zero to the maximum earliest
    /// finish. `None` until the forward pass has run.
    pub fn horizon(&self) -> Option<TimeWindow> {
        self.horizon
    }

    pub(crate) fn set_horizon(&mut self, window: TimeWindow) {
        self.horizon = Some(window);
    }
}

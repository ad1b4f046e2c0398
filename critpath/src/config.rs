//! Configuration for a scheduling run.

/// Options controlling the forward and backward passes.
#[derive(Clone, Debug, Default)]
pub struct ScheduleConfig {
    /// Verbosity level: 0=silent, 1=changes, 2=checks, 3=debug.
    pub verbosity: u8,

    /// Explicit deadline for the backward pass. `None` uses the horizon
    /// computed by the forward pass; a tighter value can make the schedule
    /// infeasible, which is reported rather than clamped.
    pub deadline: Option<i64>,
}

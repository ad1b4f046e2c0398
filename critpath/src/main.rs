use clap::{ArgAction, Parser, ValueEnum};
use critpath::{critical_path, demos, input, report, schedule, Project, ScheduleConfig, TaskDef};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum DemoPlan {
    /// Twelve-task network with four endpoints.
    A,
    /// Six-task diamond with two converging branches.
    B,
}

/// Application computing critical path schedules.
#[derive(Debug, Parser)]
enum Application {
    /// Schedule one of the built-in demo plans.
    Demo {
        /// The plan to schedule.
        plan: DemoPlan,
        /// Deadline for the backward pass, overriding the computed horizon.
        #[clap(short, long)]
        deadline: Option<i64>,
        /// Increase verbosity (repeat for more detail).
        #[clap(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
    /// Read task definitions from standard input and schedule them.
    ///
    /// One task per line: `<id> <duration> [dep ...]`.
    Plan {
        /// Deadline for the backward pass, overriding the computed horizon.
        #[clap(short, long)]
        deadline: Option<i64>,
        /// Increase verbosity (repeat for more detail).
        #[clap(short, long, action = ArgAction::Count)]
        verbose: u8,
    },
}

fn run(defs: Vec<TaskDef>, deadline: Option<i64>, verbosity: u8) -> anyhow::Result<()> {
    let mut project = Project::from_defs(defs)?;
    let config = ScheduleConfig { verbosity, deadline };
    schedule(&mut project, &config)?;
    let critical = critical_path(&project)?;
    print!("{}", report::render(&project, &critical));
    Ok(())
}

fn main() -> anyhow::Result<()> {
    match Application::parse() {
        Application::Demo {
            plan,
            deadline,
            verbose,
        } => {
            let defs = match plan {
                DemoPlan::A => demos::demo_a(),
                DemoPlan::B => demos::demo_b(),
            };
            run(defs, deadline, verbose)
        }
        Application::Plan { deadline, verbose } => {
            let defs = input::read_defs(std::io::stdin().lock())?;
            run(defs, deadline, verbose)
        }
    }
}

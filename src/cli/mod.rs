use anyhow::Result;

pub use args::{Action, Arguments};
pub use exit_status::ExitStatus;

pub mod args;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<()> {
    run::run(args)
}

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod args;
mod exit_status;
mod run;

pub use args::{Arguments, Command, CommonArgs, RepairArgs, SyncArgs, UnusedArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_tracing(args.verbose());
    run::run(args)
}

/// Verbose switches the per-file/per-line trace on; the default level only
/// shows milestones.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // A subscriber may already be installed when called from tests.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

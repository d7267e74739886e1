use anyhow::Result;
use clap::Parser;
use gradebook::cli::{Cli, Commands};
use gradebook::commands::{self, ReportConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Shell {
            no_seed,
            plain,
            config,
        } => commands::run_shell(no_seed, plain, config),
        Commands::Report {
            direction,
            format,
            output,
            records,
            no_seed,
            config,
        } => commands::run_report(ReportConfig {
            direction: direction.into(),
            format: format.into(),
            output,
            records,
            no_seed,
            config,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

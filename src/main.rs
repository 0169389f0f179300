use clap::Parser;
use mvpgen::cli::{run_cli, Cli};
use mvpgen::logging::{init_logging_with_config, LogConfig};

fn main() -> anyhow::Result<()> {
    init_logging_with_config(&LogConfig::from_env())?;
    run_cli(Cli::parse())
}

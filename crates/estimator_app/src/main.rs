mod cli;
mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    platform::logging::initialize(cli.log_destination(), cli.log_level());
    let settings = platform::settings::load_settings(&cli.settings);
    platform::run_app(settings)
}

mod adapters;
mod cli;
mod config;
mod core;

use std::path::Path;

use clap::Parser;

use cli::Cli;
use config::app_config::AppConfig;
use config::settings::Settings;
use crate::core::errors::Result;

fn main() {
    let args = Cli::parse_from(cli::args::normalize(std::env::args_os()));
    cli::output::init(args.quiet, args.verbose);

    if let Err(e) = run(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    let file = match args.config.as_deref() {
        Some(path) => AppConfig::load(Path::new(path))?,
        None => AppConfig::default(),
    };
    let settings = Settings::merge(args.overrides(), file);

    cli::commands::generate::execute(&settings)
}

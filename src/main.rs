use std::{
    fs::File,
    io::{stdin, stdout, BufReader},
    process,
};

use clap::Parser;
use log::{error, info, LevelFilter};
use pocketnotes::{App, Cli, Config, Result};

pub fn initialize_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_module("pocketnotes", LevelFilter::Debug);
    }
    builder.format_timestamp_secs().format_module_path(true).init();

    info!("Logger initialized");
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.apply_to(Config::load(cli.config.as_deref())?);
    info!(
        "Starting with title policy {:?} and date style {:?}",
        config.title_policy, config.date_style
    );

    let mut app = App::new(config, stdout());
    match &cli.script {
        Some(path) => app.run(BufReader::new(File::open(path)?)),
        None => app.run(stdin().lock()),
    }
}

fn main() {
    let cli = Cli::parse();
    initialize_logger(cli.verbose);

    if let Err(e) = run(cli) {
        error!("Application error: {}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    info!("Application shutting down");
}

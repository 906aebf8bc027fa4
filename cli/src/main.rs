extern crate clap;
extern crate colored;
extern crate log;

#[allow(unused_imports)]
use log::{debug, error, info, warn};

use std::io::{self, Write};

mod banner;
mod config;
mod driver;

use crate::config::Settings;

use clap::Parser;

/// Prints a colorful tour of tiny generators: fibonacci, weather, a story,
/// a robot, sales statistics and an ASCII pattern.
///
/// Set SHOWCASE_SEED to an unsigned integer for reproducible output.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize the logger
    env_logger::init();

    // no flags of its own, but --help and --version come for free
    let _cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let mut rng = settings.random_source();
    let today = chrono::Local::now().date_naive();
    debug!("[-] today is {}", today);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    driver::run(&mut out, &mut rng, today)?;
    out.flush()?;

    Ok(())
}

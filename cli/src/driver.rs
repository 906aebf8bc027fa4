use std::error::Error;
use std::io::Write;

use chrono::NaiveDate;
use colored::*;

use log::{debug, info};

use showcase_core::generators::pattern::{pattern, render_pattern};
use showcase_core::generators::robot::Robot;
use showcase_core::generators::sales::SalesReport;
use showcase_core::generators::story::Story;
use showcase_core::generators::weather::{forecast, render_forecast};
use showcase_core::sequence::{render_sequence, Fibonacci};
use showcase_core::{to_json, RandomSource};

use crate::banner::{print_banner, rainbow, section};

pub const FIBONACCI_TERMS: i64 = 15;
pub const FORECAST_DAYS: i64 = 5;
pub const ROUTINE_STEPS: i64 = 4;
pub const PATTERN_WIDTH: i64 = 40;
pub const PATTERN_HEIGHT: i64 = 10;

pub const GREETING: &str = "Welcome to the showcase!";
pub const GOODBYE: &str = "Thanks for watching, see you next time!";

/// The whole show, top to bottom. Stops at the first failure.
pub fn run(
    out: &mut impl Write,
    rng: &mut dyn RandomSource,
    today: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    print_banner(out)?;
    writeln!(out)?;
    writeln!(out, "{}", rainbow(GREETING))?;
    writeln!(out)?;

    debug!("[-] fibonacci, {} terms", FIBONACCI_TERMS);
    let sequence = Fibonacci::new(FIBONACCI_TERMS)?;
    writeln!(out, "{}", section("Fibonacci sequence"))?;
    writeln!(out, "    {}", render_sequence(&sequence).yellow())?;
    writeln!(out)?;

    let days = forecast(rng, today, FORECAST_DAYS)?;
    debug!("[?] forecast: {}", to_json(&days));
    writeln!(out, "{}", section("Weather forecast"))?;
    for line in render_forecast(&days).lines() {
        writeln!(out, "    {}", line)?;
    }
    writeln!(out)?;

    let story = Story::generate(rng);
    debug!("[?] story: {}", to_json(&story));
    writeln!(out, "{}", section("Story time"))?;
    writeln!(out, "    {}", story.to_string().italic())?;
    writeln!(out)?;

    let mut robot = Robot::generate(rng);
    debug!("[?] robot: {}", to_json(&robot));
    writeln!(out, "{}", section("Robot"))?;
    writeln!(out, "    {} {}", "meet".green(), robot.to_string().green().bold())?;
    for (index, line) in robot.routine(rng, ROUTINE_STEPS)?.iter().enumerate() {
        // alternate colors, easier to follow the routine
        let color = if index % 2 == 0 { "cyan" } else { "magenta" };
        writeln!(out, "      {}", line.color(color))?;
    }
    writeln!(out)?;

    let report = SalesReport::generate(rng);
    debug!("[?] sales: {}", to_json(&report));
    writeln!(out, "{}", section("Sales statistics"))?;
    for line in report.to_string().lines() {
        writeln!(out, "    {}", line)?;
    }
    writeln!(out)?;

    let rows = pattern(PATTERN_WIDTH, PATTERN_HEIGHT)?;
    writeln!(out, "{}", section("Pattern"))?;
    writeln!(out, "{}", render_pattern(&rows).blue())?;
    writeln!(out)?;

    writeln!(out, "{}", rainbow(GOODBYE))?;
    info!("[+] showcase finished");

    Ok(())
}

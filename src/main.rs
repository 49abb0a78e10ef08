use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use colored::*;
use tracing::warn;

use enumscope::config::ScanConfig;
use enumscope::enumerate::enumerate_services;
use enumscope::error::EnumError;
use enumscope::output::{results_path, write_results};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "[-]".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), EnumError> {
    let input_path = prompt_for_input_path()?;
    let config = ScanConfig::load(&input_path)?;

    println!(
        "{} Starting service enumeration for {}...",
        "[+]".green().bold(),
        config.ip.bold()
    );
    let started = Utc::now();
    let results = enumerate_services(&config.ip, &config.services);
    let elapsed = (Utc::now() - started).num_milliseconds();

    println!(
        "{} Enumerated {} service(s) in {}ms",
        "[+]".green().bold(),
        results.len(),
        elapsed
    );

    // Results are already computed at this point; a failed save is
    // reported but does not fail the run.
    let out_path = results_path(&config.ip);
    match write_results(&results, &out_path) {
        Ok(()) => println!(
            "{} Enumeration complete. Results saved to {}",
            "[+]".green().bold(),
            out_path.display()
        ),
        Err(err) => {
            warn!("persistence failed: {:#}", err);
            eprintln!("{} Failed to save results: {:#}", "[-]".red().bold(), err);
        }
    }

    Ok(())
}

/// The sole input surface: one line on stdin naming the input document.
fn prompt_for_input_path() -> Result<PathBuf, EnumError> {
    print!("Enter the path to the YAML file with detected open ports: ");
    io::stdout().flush().context("could not flush the prompt")?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("could not read the input path from stdin")?;

    Ok(PathBuf::from(line.trim()))
}

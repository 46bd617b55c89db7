use anyhow::Result;
use clap::Parser;
use colored::*;
use phantomwp::cli::Cli;
use phantomwp::config::ScanConfig;
use phantomwp::output::OutputSink;
use phantomwp::scanner::Scanner;
use std::time::{Duration, Instant};

fn main() -> Result<()> {
    print_banner();
    let cli = Cli::parse();

    if cli.url.is_none() && cli.file.is_none() {
        println!("Please provide either -l or -f. Use --help for more information.");
        return Ok(());
    }

    let sink = match &cli.output {
        Some(path) => match OutputSink::file(path) {
            Ok(sink) => sink,
            Err(e) => {
                eprintln!("{} {:#}", "Error:".bright_red(), e);
                return Ok(());
            }
        },
        None => OutputSink::console(),
    };

    let config = ScanConfig {
        timeout: Duration::from_secs(cli.timeout),
        threads: cli.threads,
    };
    let scanner = Scanner::new(&config)?;

    let start = Instant::now();

    if let Some(url) = &cli.url {
        scanner.scan_single(url, &sink)?;
    } else if let Some(file) = &cli.file {
        if let Err(e) = scanner.scan_batch(file, &sink) {
            eprintln!("{} {:#}", "Error:".bright_red(), e);
            return Ok(());
        }
    }

    println!(
        "\n{}",
        format!("Task completed in {:.2?}", start.elapsed()).bright_green()
    );

    Ok(())
}

fn print_banner() {
    let logo = r#"
        __                 __                          
   ____  / /_  ____ _____  / /_____  ____ ___ _      ______
  / __ \/ __ \/ __ `/ __ \/ __/ __ \/ __ `__ \ | /| / / __ \
 / /_/ / / / / /_/ / / / / /_/ /_/ / / / / / / |/ |/ / /_/ /
/ .___/_/ /_/\__,_/_/ /_/\__/\____/_/ /_/ /_/|__/|__/ .___/ 
/_/                                                /_/      
"#;
    println!("{}", logo.bright_green());
}

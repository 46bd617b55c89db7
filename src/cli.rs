use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "phantomwp")]
#[command(version = crate::constants::VERSION)]
#[command(about = "Lightweight WordPress detection over one host or many")]
#[command(long_about = "phantomwp - Lightweight WordPress detection over one host or many.

Checks whether a target web server runs WordPress by inspecting response
headers (x-powered-by, link) and probing well-known WordPress paths
(/wp-content/, /wp-includes/, /wp-admin/).

Examples:
  # Check a single site
  phantomwp -l example.com

  # Check every target in a file, ten at a time
  phantomwp -f targets.txt

  # Write results to a file (plain text, no colors)
  phantomwp -f targets.txt -o results.txt

  # Slow hosts: raise the per-request timeout
  phantomwp -l example.com -t 30")]
pub struct Cli {
    /// URL of the website to check
    #[arg(short = 'l', long = "url")]
    pub url: Option<String>,

    /// File containing URLs to check, one per line
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Output file for results (disables colored output)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Timeout for HTTP requests in seconds
    #[arg(short = 't', long = "timeout", default_value_t = crate::constants::DEFAULT_HTTP_TIMEOUT)]
    pub timeout: u64,

    /// Number of concurrent worker threads for batch scans
    #[arg(long, default_value_t = crate::constants::DEFAULT_WORKER_THREADS)]
    pub threads: usize,
}

use crate::config::ScanConfig;
use crate::detector::Detector;
use crate::models::ProbeResult;
use crate::output::OutputSink;
use anyhow::{Context, Result};
use colored::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

/// Drives the detector across one or many targets.
pub struct Scanner {
    detector: Detector,
    threads: usize,
}

impl Scanner {
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Scanner {
            detector: Detector::new(config)?,
            threads: config.threads.max(1),
        })
    }

    /// Probes one target and writes the rendered verdict to the sink.
    pub fn scan_single(&self, target: &str, sink: &OutputSink) -> Result<()> {
        let result = self.detector.probe(target);
        let line = render_result(target, &result, sink.supports_decoration());
        sink.write_line(&line)
    }

    /// Scans every non-empty line of `source` across the worker pool.
    ///
    /// Targets are handed to workers over a bounded channel sized to the
    /// pool, so reading never outruns the workers. Returns once the file
    /// is drained and every worker has exited; result order follows
    /// completion, not input order.
    pub fn scan_batch(&self, source: &Path, sink: &OutputSink) -> Result<()> {
        let file = File::open(source)
            .with_context(|| format!("Failed to open input file {}", source.display()))?;
        let reader = BufReader::new(file);

        let (tx, rx) = mpsc::sync_channel::<String>(self.threads);
        let rx = Arc::new(Mutex::new(rx));

        thread::scope(|scope| {
            for _ in 0..self.threads {
                let rx = Arc::clone(&rx);
                scope.spawn(move || loop {
                    let target = match rx.lock().unwrap().recv() {
                        Ok(target) => target,
                        Err(_) => break,
                    };
                    if let Err(e) = self.scan_single(&target, sink) {
                        eprintln!("{} {}", "Error writing result:".bright_red(), e);
                    }
                });
            }

            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        // Already-dispatched targets still complete
                        eprintln!("{} {}", "Error reading input file:".bright_red(), e);
                        break;
                    }
                };
                let target = line.trim();
                if target.is_empty() {
                    continue;
                }
                if tx.send(target.to_string()).is_err() {
                    break;
                }
            }
            drop(tx);
        });

        Ok(())
    }
}

fn render_result(target: &str, result: &ProbeResult, decorated: bool) -> String {
    match result {
        ProbeResult::Detected => {
            if decorated {
                format!("{}: {}", "Detected WordPress".bright_green(), target)
            } else {
                format!("Detected WordPress: {}", target)
            }
        }
        ProbeResult::NotDetected => {
            if decorated {
                format!("{}: {}", "Not WordPress".bright_yellow(), target)
            } else {
                format!("Not WordPress: {}", target)
            }
        }
        ProbeResult::Error(reason) => {
            if decorated {
                format!("{}: {} ({})", "Error fetching URL".bright_red(), target, reason)
            } else {
                format!("Error fetching URL: {} ({})", target, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rendering_matches_report_format() {
        assert_eq!(
            render_result("example.com", &ProbeResult::Detected, false),
            "Detected WordPress: example.com"
        );
        assert_eq!(
            render_result("example.com", &ProbeResult::NotDetected, false),
            "Not WordPress: example.com"
        );
        assert_eq!(
            render_result(
                "example.com",
                &ProbeResult::Error("connection refused".to_string()),
                false
            ),
            "Error fetching URL: example.com (connection refused)"
        );
    }

    #[test]
    fn plain_rendering_carries_no_ansi_escapes() {
        for result in [
            ProbeResult::Detected,
            ProbeResult::NotDetected,
            ProbeResult::Error("timed out".to_string()),
        ] {
            assert!(!render_result("example.com", &result, false).contains('\u{1b}'));
        }
    }

    #[test]
    fn decorated_rendering_carries_ansi_escapes() {
        colored::control::set_override(true);
        let line = render_result("example.com", &ProbeResult::Detected, true);
        colored::control::unset_override();
        assert!(line.contains('\u{1b}'));
    }
}

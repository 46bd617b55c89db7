use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Destination for rendered probe results.
///
/// Workers write concurrently, so every write goes through the mutex and
/// lands as a whole line. Decoration is a capability of the sink: the
/// console supports ANSI colors, a file never does.
pub struct OutputSink {
    writer: Mutex<Box<dyn Write + Send>>,
    decorated: bool,
}

impl OutputSink {
    /// Sink backed by stdout, with decorative formatting enabled.
    pub fn console() -> Self {
        OutputSink {
            writer: Mutex::new(Box::new(io::stdout())),
            decorated: true,
        }
    }

    /// Sink backed by a newly created file, plain text only.
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {}", path.display()))?;
        Ok(OutputSink {
            writer: Mutex::new(Box::new(file)),
            decorated: false,
        })
    }

    /// Sink over an arbitrary writer.
    pub fn from_writer(writer: Box<dyn Write + Send>, decorated: bool) -> Self {
        OutputSink {
            writer: Mutex::new(writer),
            decorated,
        }
    }

    pub fn supports_decoration(&self) -> bool {
        self.decorated
    }

    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut writer = self.writer.lock().unwrap();
        writeln!(writer, "{}", line).context("Failed to write result")?;
        writer.flush().context("Failed to flush result")?;
        Ok(())
    }
}

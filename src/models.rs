/// Outcome of probing a single target.
///
/// Exactly one is produced per target submitted to the scanner and
/// consumed exactly once by the output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The server answered with a WordPress signal (header or path).
    Detected,
    /// The server answered but no WordPress signal matched.
    NotDetected,
    /// The primary request failed at the transport level.
    Error(String),
}

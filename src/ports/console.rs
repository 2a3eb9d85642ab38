use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Line-oriented interactive console
pub trait Console {
    /// Print one line of output
    fn say(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Show `prompt` and block for one line of input.
    ///
    /// Returns `Ok(None)` once input is exhausted. The line terminator is
    /// stripped; other whitespace is left for the caller.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError>;
}

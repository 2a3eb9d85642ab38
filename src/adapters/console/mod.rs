//! Terminal Console Adapter
//!
//! Line-based `Console` over any buffered reader and writer. The binary
//! binds it to stdin/stdout; tests bind it to in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::ports::{Console, ConsoleError};

pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl LineConsole<StdinLock<'static>, Stdout> {
    /// Console bound to the process's standard streams
    pub fn stdio() -> Self {
        LineConsole::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        LineConsole { input, output }
    }

    /// Hand back the underlying writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", line).map_err(ConsoleError::Write)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.output
            .write_all(prompt.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(ConsoleError::Write)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(ConsoleError::Read)?;
        if read == 0 {
            return Ok(None);
        }

        // Strip "\n" or "\r\n"
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

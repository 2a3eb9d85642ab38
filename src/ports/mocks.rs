use std::collections::VecDeque;
use std::path::PathBuf;

use super::console::{Console, ConsoleError};
use super::report_sink::{ReportSink, SinkError};
use crate::domain::Report;

/// Console that replays queued answers and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    transcript: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to queue answers in order
    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers.extend(answers.into_iter().map(Into::into));
        self
    }

    /// Lines passed to `say`
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Prompts passed to `ask`, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// How many times `line` was said
    pub fn count(&self, line: &str) -> usize {
        self.transcript.iter().filter(|l| l.as_str() == line).count()
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>, ConsoleError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Sink that keeps saved report text in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    saved: Vec<String>,
    fail: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method making every save fail with a permission error
    pub fn failing() -> Self {
        MemorySink {
            saved: Vec::new(),
            fail: true,
        }
    }

    pub fn saved(&self) -> &[String] {
        &self.saved
    }
}

impl ReportSink for MemorySink {
    fn save(&mut self, report: &Report) -> Result<PathBuf, SinkError> {
        let path = PathBuf::from("memory://report");
        if self.fail {
            return Err(SinkError::Write {
                path,
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.saved.push(report.to_text());
        Ok(path)
    }
}

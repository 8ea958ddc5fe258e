use crate::cli::command::Outcome;
use crate::domain::error::CliError;
use std::error::Error;
use std::io::{self, Stderr, Stdout, Write};

/// Renders command results for the user
pub trait OutputWriter {
    /// Successful outcome, to standard output
    fn write_outcome(&mut self, outcome: &Outcome) -> Result<(), OutputError>;
    /// Help and command listings, to standard output
    fn write_help(&mut self, text: &str) -> Result<(), OutputError>;
    /// Failure, to the error channel. `debug` adds the error's source chain.
    fn write_error(&mut self, error: &CliError, debug: bool) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for CliError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer over separate output and error sinks
pub struct ConsoleWriter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleWriter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleWriter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> OutputWriter for ConsoleWriter<O, E> {
    fn write_outcome(&mut self, outcome: &Outcome) -> Result<(), OutputError> {
        match outcome {
            Outcome::Done => {}
            Outcome::Print(text) => {
                writeln!(self.out, "{}", text)?;
                self.out.flush()?;
            }
        }
        Ok(())
    }

    fn write_help(&mut self, text: &str) -> Result<(), OutputError> {
        write!(self.out, "{}", text)?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_error(&mut self, error: &CliError, debug: bool) -> Result<(), OutputError> {
        writeln!(self.err, "{}", error)?;

        if debug {
            let mut source = error.source();
            while let Some(cause) = source {
                writeln!(self.err, "  caused by: {}", cause)?;
                source = cause.source();
            }
        }

        self.err.flush()?;
        Ok(())
    }
}

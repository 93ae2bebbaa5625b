//! # Progress Module
//!
//! Console progress reporting as an injected sink, so the writer and reader
//! can be exercised in tests without an attached terminal.

use std::io::{self, IsTerminal, Write};

/// Destination for progress and result lines.
///
/// Write failures propagate: if the sink cannot be written (e.g. nothing
/// usable is attached to stdout), the operation aborts.
pub trait ProgressSink {
    /// Overwrite the current status line with `line`.
    fn update(&mut self, line: &str) -> io::Result<()>;

    /// Terminate any pending status line and print `line` on its own line.
    fn finish(&mut self, line: &str) -> io::Result<()>;
}

/// Progress sink over any writer.
///
/// In interactive mode each `update` rewrites a single line with a carriage
/// return; otherwise updates fall back to plain newline-terminated lines so
/// redirected output stays readable.
pub struct ConsoleProgress<W: Write> {
    out: W,
    interactive: bool,
    // a \r-style status line is pending and needs a newline before any final line
    dirty: bool,
}

impl ConsoleProgress<io::Stdout> {
    /// Sink over stdout, interactive when stdout is a terminal.
    pub fn stdout() -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self::new(out, interactive)
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W, interactive: bool) -> Self {
        Self {
            out,
            interactive,
            dirty: false,
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn update(&mut self, line: &str) -> io::Result<()> {
        if self.interactive {
            write!(self.out, "\r{line}")?;
            self.out.flush()?;
            self.dirty = true;
        } else {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }

    fn finish(&mut self, line: &str) -> io::Result<()> {
        if self.dirty {
            writeln!(self.out)?;
            self.dirty = false;
        }
        writeln!(self.out, "{line}")?;
        self.out.flush()
    }
}

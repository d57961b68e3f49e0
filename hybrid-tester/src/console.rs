use std::fmt::Display;
use std::io::{self, Write};

/// Line-oriented narration sink.
///
/// Write failures are dropped: narration must never abort a run.
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn line(&mut self, text: impl Display) {
        let _ = writeln!(self.out, "{text}");
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
    }
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl Console<Vec<u8>> {
    /// In-memory console, mostly for tests.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

/// Render a boolean as `True`/`False`.
pub fn flag(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

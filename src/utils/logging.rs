use std::env;
use std::io::{self, Write};

/// Environment variable whose presence turns on debug output
pub const DEBUG_ENV: &str = "PALM_DEBUG";

/// Whether debug output is currently enabled.
///
/// Only presence matters: an empty or non-UTF-8 value still enables output.
/// The environment is read on every call.
pub fn is_enabled() -> bool {
    env::var_os(DEBUG_ENV).is_some()
}

/// Writes debug messages to a sink when `PALM_DEBUG` is set
pub struct DebugPrinter<W: Write> {
    sink: W,
}

impl DebugPrinter<io::Stdout> {
    /// Printer that targets the process standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> DebugPrinter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Write `message` and a newline if debug mode is enabled.
    ///
    /// Never fails: write errors are dropped.
    pub fn emit(&mut self, message: &str) {
        if !is_enabled() {
            return;
        }
        let _ = self.write_line(message);
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write_line(&mut self, message: &str) -> io::Result<()> {
        // One write_all per line so a shared sink never sees half a message.
        // Stdout locks for the whole call, and unlike println! hands back errors.
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        self.sink.write_all(line.as_bytes())?;
        self.sink.flush()
    }
}

/// Print a debug message if debug mode is enabled
pub fn debug(message: &str) {
    DebugPrinter::stdout().emit(message);
}

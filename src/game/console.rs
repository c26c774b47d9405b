//! Line-oriented input and output shared by the controller and its players.

use std::io::{self, BufRead, Write};

use crate::board::Move;

/// Where players read their input and where the game reports to.
pub trait Console {
    /// Next line of input without its line terminator, or `None` at end of
    /// input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Print an informational message.
    fn report(&mut self, message: &str) -> io::Result<()>;

    /// Print an error message. Errors never end the game.
    fn report_error(&mut self, message: &str) -> io::Result<()>;

    /// Announce a move chosen by the engine.
    fn report_move(&mut self, mv: Move) -> io::Result<()>;
}

/// A `Console` over any buffered reader and writer (stdin/stdout in the
/// binary, in-memory buffers in tests).
pub struct TextConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TextConsole { input, output }
    }

    /// Take back the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn report(&mut self, message: &str) -> io::Result<()> {
        self.write_line(message)
    }

    fn report_error(&mut self, message: &str) -> io::Result<()> {
        self.write_line(message)
    }

    fn report_move(&mut self, mv: Move) -> io::Result<()> {
        self.write_line(&format!("* {mv}"))
    }
}

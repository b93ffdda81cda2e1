//! Output trait for rendering reports to different formats.

use std::{
    fmt,
    io::{self, Write},
};

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render.
pub trait Output {
    /// Render a title/header.
    fn title(&mut self, text: &str);

    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., new file).
    fn added_item(&mut self, text: &str);

    /// Render a separator/divider with a label.
    fn divider(&mut self, label: &str);

    /// Render a block of preformatted text.
    fn preformatted(&mut self, text: &str);

    /// Render text exactly as given, without a trailing newline.
    fn raw(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// Output is best-effort: once a write fails (typically a closed pipe, as in
/// `biolens list | head`), further output is dropped and the command keeps
/// running.
pub struct TerminalOutput<W: Write = io::StdoutLock<'static>> {
    writer: W,
    closed: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::with_writer(io::stdout().lock())
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            closed: false,
        }
    }

    /// Whether a write has failed and output is being discarded.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.closed {
            return;
        }
        if self
            .writer
            .write_fmt(args)
            .and_then(|()| self.writer.flush())
            .is_err()
        {
            self.closed = true;
        }
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn title(&mut self, text: &str) {
        self.emit(format_args!(
            "{}\n{}\n",
            text,
            "=".repeat(text.chars().count())
        ));
    }

    fn section(&mut self, name: &str) {
        self.emit(format_args!("{}:\n", name));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.emit(format_args!("{}: {}\n", key, value));
    }

    fn list_item(&mut self, text: &str) {
        self.emit(format_args!("  - {}\n", text));
    }

    fn added_item(&mut self, text: &str) {
        self.emit(format_args!("  + {}\n", text));
    }

    fn divider(&mut self, label: &str) {
        self.emit(format_args!("── {} ──\n", label));
    }

    fn preformatted(&mut self, text: &str) {
        self.emit(format_args!("{}\n", text));
    }

    fn raw(&mut self, text: &str) {
        self.emit(format_args!("{}", text));
    }

    fn newline(&mut self) {
        self.emit(format_args!("\n"));
    }
}

/// Render into memory with the terminal layout, for tests.
#[cfg(test)]
pub fn render_to_string(render: impl FnOnce(&mut dyn Output)) -> String {
    let mut buf = Vec::new();
    render(&mut TerminalOutput::with_writer(&mut buf));
    String::from_utf8(buf).expect("output is utf-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer standing in for a pipe whose reader has gone away.
    struct ClosedPipe {
        attempts: usize,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.attempts += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_terminal_layout() {
        let text = render_to_string(|out| {
            out.title("BioLens");
            out.section("Domain");
            out.added_item("Created: a.cs");
            out.list_item("b.cs");
            out.newline();
            out.key_value("Generated", "2 files");
            out.divider("Summary");
            out.raw("x");
            out.preformatted("y");
        });

        assert_eq!(
            text,
            "BioLens\n=======\nDomain:\n  + Created: a.cs\n  - b.cs\n\nGenerated: 2 files\n── Summary ──\nxy\n"
        );
    }

    #[test]
    fn test_closed_pipe_stops_output_without_panicking() {
        let mut pipe = ClosedPipe { attempts: 0 };
        let mut out = TerminalOutput::with_writer(&mut pipe);

        out.title("BioLens Code Generator");
        assert!(out.is_closed());

        out.section("Generating Domain layer");
        out.added_item("Created: src/BioLens.Domain/Enums/Enums.cs");
        out.raw("content");

        drop(out);
        assert_eq!(pipe.attempts, 1);
    }
}

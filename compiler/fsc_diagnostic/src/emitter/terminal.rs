//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When the format string is attached with [`TerminalEmitter::set_source`],
//! the primary label is rendered as a caret underline beneath it.

use std::io::{self, Write};

use fsc_ir::Span;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` option.
    pub fn from_arg(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// # Arguments
    ///
    /// * `writer` - The output writer
    /// * `mode` - Color mode selection
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the format string that diagnostic spans point into,
    /// replacing any earlier one.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Render the format string with carets under `span`.
    fn write_snippet(&mut self, span: Span) {
        let Some(source) = self.source.as_deref() else {
            return;
        };
        let (line, column, width) = render_snippet(source, span);
        let carets = "^".repeat(width.max(1));
        let _ = writeln!(self.writer, "   |");
        let _ = writeln!(self.writer, "   | {line}");
        let _ = write!(self.writer, "   | {}", " ".repeat(column));
        self.write_colored(&carets, colors::ERROR);
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

/// Escape control characters in `source` and locate `span` in the result.
///
/// Returns the printable line plus the display column and width of the span.
fn render_snippet(source: &str, span: Span) -> (String, usize, usize) {
    let mut line = String::with_capacity(source.len());
    let mut column = 0;
    let mut width = 0;
    for (offset, c) in source.char_indices() {
        let shown: String = if c.is_control() {
            c.escape_default().collect()
        } else {
            c.to_string()
        };
        let len = shown.chars().count();
        let offset = u32::try_from(offset).unwrap_or(u32::MAX);
        if offset < span.start {
            column += len;
        } else if span.contains(offset) {
            width += len;
        }
        line.push_str(&shown);
    }
    if span.start as usize >= source.len() {
        column = line.chars().count();
    }
    (line, column, width)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        // Labels
        for label in &diagnostic.labels {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
        }

        if let Some(span) = diagnostic.primary_span() {
            self.write_snippet(span);
        }

        // Notes
        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        // Suggestions, text first then structured rewrites
        let help = diagnostic
            .suggestions
            .iter()
            .cloned()
            .chain(diagnostic.structured_suggestions.iter().map(|s| {
                match s.substitutions.first() {
                    Some(sub) if !sub.snippet.is_empty() => {
                        format!("{}: `{}`", s.message, sub.snippet)
                    }
                    _ => s.message.clone(),
                }
            }))
            .collect::<Vec<_>>();
        for suggestion in help {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, failed: usize) {
        if failed == 0 {
            return;
        }

        self.write_colored("error", colors::ERROR);
        if failed == 1 {
            let _ = writeln!(self.writer, ": 1 call site failed");
        } else {
            let _ = writeln!(self.writer, ": {failed} call sites failed");
        }
    }
}

//! Command handlers for the `fsc` CLI.
//!
//! Each submodule implements one command. Output plumbing shared between
//! them (the [`Reporter`] and argument decoding) lives here.

use std::io::{self, IsTerminal};

use fsc_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use fsc_diagnostic::Diagnostic;
use fsc_ir::{Primitive, TypeDescriptor};

use crate::CliConfig;

mod batch;
mod check;
mod explain;

pub use batch::run_batch_file;
pub use check::check_call_site;
pub use explain::explain_error;

/// Where diagnostics go: rendered text on stderr, or a JSON array on stdout.
pub(crate) enum Reporter {
    Terminal(TerminalEmitter<io::Stderr>),
    Json(JsonEmitter<io::Stdout>),
}

impl Reporter {
    pub(crate) fn new(config: &CliConfig) -> Self {
        if config.json {
            let mut emitter = JsonEmitter::new(io::stdout());
            emitter.begin();
            Reporter::Json(emitter)
        } else {
            let is_tty = io::stderr().is_terminal();
            Reporter::Terminal(TerminalEmitter::stderr(config.color, is_tty))
        }
    }

    pub(crate) fn is_json(&self) -> bool {
        matches!(self, Reporter::Json(_))
    }

    /// Set the format string that following diagnostics point into.
    pub(crate) fn set_source(&mut self, format: &str) {
        match self {
            Reporter::Terminal(emitter) => emitter.set_source(format),
            Reporter::Json(emitter) => emitter.set_source(format),
        }
    }

    pub(crate) fn report(&mut self, diagnostic: &Diagnostic) {
        match self {
            Reporter::Terminal(emitter) => emitter.emit(diagnostic),
            Reporter::Json(emitter) => emitter.emit(diagnostic),
        }
    }

    /// Close the output, printing a failure summary in terminal mode.
    pub(crate) fn finish(self, failed: usize) {
        match self {
            Reporter::Terminal(mut emitter) => {
                emitter.emit_summary(failed);
                emitter.flush();
            }
            Reporter::Json(mut emitter) => {
                emitter.end();
                emitter.flush();
            }
        }
    }
}

/// Decode a descriptor given on the command line.
///
/// Accepts source-level names as a convenience: `int`, `java.lang.String`
/// and `long[]` become `I`, `Ljava/lang/String;` and `[J`. Anything else
/// is taken as a raw signature.
pub fn descriptor_from_arg(arg: &str) -> TypeDescriptor {
    if let Some(element) = arg.strip_suffix("[]") {
        return TypeDescriptor::array_of(&descriptor_from_arg(element));
    }
    if let Some(primitive) = Primitive::ALL.iter().find(|p| p.name() == arg) {
        return TypeDescriptor::primitive(*primitive);
    }
    if arg.contains('.') && !arg.contains([';', '/', '[']) {
        return TypeDescriptor::object(arg);
    }
    TypeDescriptor::new(arg)
}

//! JSON Emitter
//!
//! Machine-readable diagnostic output in JSON format.

use std::io::Write;

use crate::{Applicability, Diagnostic};

use super::{escape_json, trailing_comma, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
    source: Option<String>,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
            source: None,
        }
    }

    /// Record the format string that following diagnostics refer to.
    ///
    /// It is written as a `"format"` field so consumers can resolve spans.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = writeln!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        let _ = writeln!(self.writer, "\n]");
    }
}

fn applicability_str(applicability: Applicability) -> &'static str {
    match applicability {
        Applicability::MachineApplicable => "machine-applicable",
        Applicability::MaybeIncorrect => "maybe-incorrect",
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = writeln!(self.writer, ",");
        }
        self.first = false;

        let _ = writeln!(self.writer, "  {{");
        let _ = writeln!(
            self.writer,
            "    \"code\": \"{}\",",
            diagnostic.code.as_str()
        );
        if let Some(source) = &self.source {
            let _ = writeln!(self.writer, "    \"format\": \"{}\",", escape_json(source));
        }
        let _ = writeln!(
            self.writer,
            "    \"message\": \"{}\",",
            escape_json(&diagnostic.message)
        );

        // Labels
        let _ = writeln!(self.writer, "    \"labels\": [");
        for (i, label) in diagnostic.labels.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.labels.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(self.writer, "        \"start\": {},", label.span.start);
            let _ = writeln!(self.writer, "        \"end\": {},", label.span.end);
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\"",
                escape_json(&label.message)
            );
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ],");

        // Notes
        let _ = writeln!(self.writer, "    \"notes\": [");
        for (i, note) in diagnostic.notes.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.notes.len());
            let _ = writeln!(self.writer, "      \"{}\"{}", escape_json(note), comma);
        }
        let _ = writeln!(self.writer, "    ],");

        // Suggestions (text-only)
        let _ = writeln!(self.writer, "    \"suggestions\": [");
        for (i, suggestion) in diagnostic.suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.suggestions.len());
            let _ = writeln!(
                self.writer,
                "      \"{}\"{}",
                escape_json(suggestion),
                comma
            );
        }
        let _ = writeln!(self.writer, "    ],");

        // Structured suggestions (with spans and applicability)
        let _ = writeln!(self.writer, "    \"structured_suggestions\": [");
        for (i, suggestion) in diagnostic.structured_suggestions.iter().enumerate() {
            let comma = trailing_comma(i, diagnostic.structured_suggestions.len());
            let _ = writeln!(self.writer, "      {{");
            let _ = writeln!(
                self.writer,
                "        \"message\": \"{}\",",
                escape_json(&suggestion.message)
            );
            let _ = writeln!(
                self.writer,
                "        \"applicability\": \"{}\",",
                applicability_str(suggestion.applicability)
            );
            let _ = writeln!(self.writer, "        \"substitutions\": [");
            for (j, sub) in suggestion.substitutions.iter().enumerate() {
                let comma = trailing_comma(j, suggestion.substitutions.len());
                let _ = writeln!(
                    self.writer,
                    "          {{ \"start\": {}, \"end\": {}, \"snippet\": \"{}\" }}{comma}",
                    sub.span.start,
                    sub.span.end,
                    escape_json(&sub.snippet)
                );
            }
            let _ = writeln!(self.writer, "        ]");
            let _ = writeln!(self.writer, "      }}{comma}");
        }
        let _ = writeln!(self.writer, "    ]");

        let _ = write!(self.writer, "  }}");
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _failed: usize) {
        // JSON output doesn't need a summary - the data speaks for itself
    }
}

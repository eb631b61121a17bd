//! The `batch` command: check a file of call sites.

use std::io::Read;

use crate::batch::{parse_batch, run_batch};
use crate::CliConfig;

use super::Reporter;

fn read_input(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut text = String::new();
        return std::io::stdin()
            .read_to_string(&mut text)
            .map(|_| text)
            .map_err(|e| format!("error reading standard input: {e}"));
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

/// Check every call site in `path` (`-` for stdin).
///
/// Returns `true` if all of them pass.
pub fn run_batch_file(path: &str, config: &CliConfig) -> bool {
    let text = match read_input(path) {
        Ok(text) => text,
        Err(msg) => {
            eprintln!("error: {msg}");
            return false;
        }
    };
    let entries = match parse_batch(&text) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("error: {path}: {e}");
            return false;
        }
    };

    let results = run_batch(&entries, config.parallel);

    let mut reporter = Reporter::new(config);
    let mut failed = 0;
    for (entry, result) in entries.iter().zip(&results) {
        match result {
            Ok(()) => {
                if config.verbose && !reporter.is_json() {
                    println!("line {}: OK", entry.line);
                }
            }
            Err(err) => {
                failed += 1;
                reporter.set_source(&entry.format);
                let diagnostic = err
                    .to_diagnostic()
                    .with_note(format!("in {path}, line {}", entry.line));
                reporter.report(&diagnostic);
            }
        }
    }
    let is_json = reporter.is_json();
    reporter.finish(failed);

    if !is_json {
        println!(
            "checked {} call sites: {} passed, {failed} failed",
            entries.len(),
            entries.len() - failed
        );
    }
    failed == 0
}

//! Batch input: many call sites, one per line.
//!
//! ```text
//! # comment
//! Total: %d items%n<TAB>I
//! %s owes %.2f<TAB>Ljava/lang/String; D
//! ```
//!
//! The format string comes first and may use `\t`, `\n`, `\r` and `\\`
//! escapes. Descriptors follow a tab, separated by spaces, and are read
//! the same way as on the `fsc check` command line. A line without a tab is
//! a format string with no arguments.

use fsc_check::{check, FormatCheckError};
use fsc_ir::TypeDescriptor;
use rayon::prelude::*;

use crate::commands::descriptor_from_arg;

/// One call site read from a batch file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    pub format: String,
    pub arguments: Vec<TypeDescriptor>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BatchParseError {
    #[error("line {line}: unknown escape `\\{found}` in format string")]
    InvalidEscape { line: usize, found: char },
    #[error("line {line}: format string ends with a lone `\\`")]
    TrailingBackslash { line: usize },
}

fn unescape(raw: &str, line: usize) -> Result<String, BatchParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some(found) => return Err(BatchParseError::InvalidEscape { line, found }),
            None => return Err(BatchParseError::TrailingBackslash { line }),
        }
    }
    Ok(out)
}

/// Parse batch input, skipping blank lines and `#` comments.
pub fn parse_batch(text: &str) -> Result<Vec<BatchEntry>, BatchParseError> {
    let mut entries = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() || raw.trim_start().starts_with('#') {
            continue;
        }
        let (format, descriptors) = raw.split_once('\t').unwrap_or((raw, ""));
        entries.push(BatchEntry {
            line,
            format: unescape(format, line)?,
            arguments: descriptors
                .split_whitespace()
                .map(descriptor_from_arg)
                .collect(),
        });
    }
    tracing::debug!(entries = entries.len(), "parsed batch input");
    Ok(entries)
}

fn check_entry(entry: &BatchEntry) -> Result<(), FormatCheckError> {
    check(&entry.format, &entry.arguments)
}

/// Check every entry, returning results in input order.
///
/// With `parallel`, entries are spread over a scoped thread pool that is torn
/// down before returning. If the pool cannot be built the entries are
/// checked on the calling thread instead.
pub fn run_batch(entries: &[BatchEntry], parallel: bool) -> Vec<Result<(), FormatCheckError>> {
    if !parallel {
        return entries.iter().map(check_entry).collect();
    }

    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| entries.par_iter().map(check_entry).collect::<Vec<_>>())
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), running sequentially");
            entries.iter().map(check_entry).collect()
        })
}

#[cfg(test)]
mod tests;

//! Diagnostic system for format string checking.
//!
//! Every failure a check can produce is turned into a [`Diagnostic`]:
//! - Error codes for searchability (`fsc explain E2001`)
//! - A message saying what went wrong
//! - A primary span pointing at the offending specifier
//! - Notes and suggestions saying how to fix it
//!
//! Diagnostics are plain data. Rendering is left to the [`emitter`] module
//! so that tools embedding the checker can choose their own output.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Applicability, Diagnostic, Label, Substitution, Suggestion};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;

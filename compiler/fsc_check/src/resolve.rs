//! Argument index resolution.
//!
//! Each specifier names its argument explicitly (`2$`), relatively (`<`) or
//! implicitly (no index). [`ScanState`] carries what is needed to turn those
//! into concrete 1-based positions while walking one format string.
//!
//! Relative references chain off whichever specifier most recently
//! established a position, explicit or implicit. The implicit counter is
//! independent of explicit indices: `%2$s %s` refers to 2 then 1.

use fsc_ir::{FormatSpecifier, IndexRef};

use crate::{FormatCheckError, MissingReason};

/// A specifier paired with the argument position it reads.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedReference<'a> {
    pub specifier: &'a FormatSpecifier,
    /// 1-based argument position.
    pub position: u32,
}

/// Resolver state for one scan of one format string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanState {
    last_explicit: Option<u32>,
    last_used: Option<u32>,
    implicit_count: u32,
    max_referenced: u32,
}

impl ScanState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the position `spec` reads.
    ///
    /// Returns `Ok(None)` for `%%` and `%n`, which read nothing and leave the
    /// state untouched.
    pub fn resolve<'a>(
        &mut self,
        spec: &'a FormatSpecifier,
    ) -> Result<Option<ResolvedReference<'a>>, FormatCheckError> {
        if !spec.consumes_argument() {
            return Ok(None);
        }

        let position = match spec.index {
            IndexRef::Explicit(n) => {
                self.last_explicit = Some(n);
                n
            }
            IndexRef::Relative => match self.last_used {
                Some(n) => n,
                None => {
                    return Err(FormatCheckError::MissingArgument {
                        span: spec.span,
                        reason: MissingReason::NoPrevious,
                    })
                }
            },
            IndexRef::Implicit => {
                self.implicit_count = self.implicit_count.saturating_add(1);
                self.implicit_count
            }
        };

        self.last_used = Some(position);
        self.max_referenced = self.max_referenced.max(position);

        tracing::trace!(specifier = %spec, position, "resolved argument position");
        Ok(Some(ResolvedReference {
            specifier: spec,
            position,
        }))
    }

    /// The last `n$` index seen.
    pub fn last_explicit(&self) -> Option<u32> {
        self.last_explicit
    }

    /// The position of the most recent argument-reading specifier.
    pub fn last_used(&self) -> Option<u32> {
        self.last_used
    }

    /// Number of implicit specifiers seen.
    pub fn implicit_count(&self) -> u32 {
        self.implicit_count
    }

    /// Highest position any specifier resolved to, or 0.
    pub fn max_referenced(&self) -> u32 {
        self.max_referenced
    }
}

//! FSC IR - shared data model for the format string checker.
//!
//! This crate contains the types every phase agrees on:
//! - Spans for locations inside a format string
//! - Type descriptors supplied by the caller for each argument
//! - Flags, conversions and parsed conversion specifiers
//!
//! Everything here is immutable once built and carries `Clone, Eq, Hash, Debug`
//! so results can be cached or compared across threads.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod conversion;
mod descriptor;
mod flags;
mod span;
mod specifier;

pub use conversion::{Conversion, DateTimeConversion};
pub use descriptor::{DescriptorKind, Primitive, TypeDescriptor};
pub use flags::Flags;
pub use span::Span;
pub use specifier::{FormatSpecifier, IndexRef, Segment};

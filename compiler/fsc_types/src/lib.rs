//! Type rules for format conversions.
//!
//! Answers one question: may an argument declared with a given
//! [`TypeDescriptor`](fsc_ir::TypeDescriptor) be formatted by a given
//! conversion?
//!
//! - [`family_of`] maps each conversion to the [`Family`] of types it accepts.
//! - The [`GroupTable`] maps known descriptors to the [`Groups`] they belong
//!   to. It is built once and shared read-only by every check.
//! - [`check_descriptor`] decides membership and explains a rejection.
//! - [`suggest_conversion`] proposes a conversion that would accept a
//!   rejected descriptor.
//!
//! Membership is decided purely from the descriptor signature. There is no
//! class hierarchy: the subtypes that matter (`java.sql.Timestamp` for
//! `java.util.Date`, every boxed integer width) are enumerated in the table.

mod family;
mod groups;
mod matcher;

pub use family::{family_of, Family};
pub use groups::{global_group_table, GroupTable, Groups};
pub use matcher::{check_descriptor, matches, suggest_conversion, MismatchReason};

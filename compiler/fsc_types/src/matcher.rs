//! Descriptor matcher.

use std::fmt;

use fsc_ir::{Conversion, DateTimeConversion, DescriptorKind, TypeDescriptor};

use crate::{global_group_table, Family, Groups};

/// Why a descriptor was rejected by a family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MismatchReason {
    /// Arrays are rejected by every family, `%s` included.
    ArrayArgument,
    /// A well-formed descriptor outside the family's groups.
    IncompatibleType,
    /// The signature could not be classified.
    InvalidDescriptor,
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MismatchReason::ArrayArgument => "array argument",
            MismatchReason::IncompatibleType => "incompatible type",
            MismatchReason::InvalidDescriptor => "invalid descriptor",
        })
    }
}

/// Decide whether `descriptor` belongs to `family`.
pub fn check_descriptor(
    descriptor: &TypeDescriptor,
    family: Family,
) -> Result<(), MismatchReason> {
    let result = match descriptor.kind() {
        DescriptorKind::Invalid => Err(MismatchReason::InvalidDescriptor),
        DescriptorKind::Array { .. } => Err(MismatchReason::ArrayArgument),
        DescriptorKind::Primitive(_) | DescriptorKind::Object(_) => match family.accepted_groups()
        {
            None => Ok(()),
            Some(accepted) => {
                if global_group_table().groups_of(descriptor).intersects(accepted) {
                    Ok(())
                } else {
                    Err(MismatchReason::IncompatibleType)
                }
            }
        },
    };
    if let Err(reason) = result {
        tracing::trace!(descriptor = descriptor.as_str(), %family, %reason, "descriptor rejected");
    }
    result
}

/// Check if `descriptor` belongs to `family`.
pub fn matches(descriptor: &TypeDescriptor, family: Family) -> bool {
    check_descriptor(descriptor, family).is_ok()
}

/// A conversion that would accept `descriptor`.
///
/// Prefers the most specific family. Returns `None` for arrays and invalid
/// descriptors, which no conversion accepts.
pub fn suggest_conversion(descriptor: &TypeDescriptor) -> Option<Conversion> {
    match descriptor.kind() {
        DescriptorKind::Array { .. } | DescriptorKind::Invalid => return None,
        DescriptorKind::Primitive(_) | DescriptorKind::Object(_) => {}
    }
    let groups = global_group_table().groups_of(descriptor);
    let conversion = if groups.intersects(Groups::BOXED_INTEGER | Groups::BIG_INTEGER) {
        Conversion::Decimal
    } else if groups.intersects(Groups::BOXED_FLOAT | Groups::BIG_DECIMAL) {
        Conversion::Fixed
    } else if groups.contains(Groups::CHARACTER) {
        Conversion::Character
    } else if groups.contains(Groups::BOOLEAN) {
        Conversion::Boolean
    } else if groups.intersects(Groups::CALENDAR | Groups::DATE) {
        Conversion::DateTime(DateTimeConversion::DateTime)
    } else {
        Conversion::String
    };
    Some(conversion)
}

//! Descriptor group table.
//!
//! Every descriptor the type rules know about is listed in [`GROUP_RULES`]
//! together with the groups it belongs to. The rules are compiled once into
//! a hash map keyed by internal class name; primitives are looked up under
//! their wrapper class, so `I` and `Ljava/lang/Integer;` always agree.

use std::sync::OnceLock;

use bitflags::bitflags;
use fsc_ir::{DescriptorKind, TypeDescriptor};
use rustc_hash::FxHashMap;

bitflags! {
    /// Interchangeable groups of argument types.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Groups: u16 {
        /// `Byte`, `Short`, `Integer`, `Long`.
        const BOXED_INTEGER = 1 << 0;
        /// `java.math.BigInteger`.
        const BIG_INTEGER = 1 << 1;
        /// Integers that `%c` accepts as a code point.
        const CHAR_CODE = 1 << 2;
        /// `Long` values that `%t` reads as epoch milliseconds.
        const EPOCH_MILLIS = 1 << 3;
        /// `Float`, `Double`.
        const BOXED_FLOAT = 1 << 4;
        /// `java.math.BigDecimal`.
        const BIG_DECIMAL = 1 << 5;
        /// `Character`.
        const CHARACTER = 1 << 6;
        /// `Boolean`.
        const BOOLEAN = 1 << 7;
        /// `java.util.Calendar` and subclasses.
        const CALENDAR = 1 << 8;
        /// `java.util.Date` and its `java.sql` subclasses.
        const DATE = 1 << 9;
    }
}

/// Classes sharing a set of groups.
struct GroupRule {
    classes: &'static [&'static str],
    groups: Groups,
}

static GROUP_RULES: &[GroupRule] = &[
    GroupRule {
        classes: &["java/lang/Byte", "java/lang/Short", "java/lang/Integer"],
        groups: Groups::BOXED_INTEGER.union(Groups::CHAR_CODE),
    },
    GroupRule {
        classes: &["java/lang/Long"],
        groups: Groups::BOXED_INTEGER.union(Groups::EPOCH_MILLIS),
    },
    GroupRule {
        classes: &["java/math/BigInteger"],
        groups: Groups::BIG_INTEGER,
    },
    GroupRule {
        classes: &["java/lang/Float", "java/lang/Double"],
        groups: Groups::BOXED_FLOAT,
    },
    GroupRule {
        classes: &["java/math/BigDecimal"],
        groups: Groups::BIG_DECIMAL,
    },
    GroupRule {
        classes: &["java/lang/Character"],
        groups: Groups::CHARACTER,
    },
    GroupRule {
        classes: &["java/lang/Boolean"],
        groups: Groups::BOOLEAN,
    },
    GroupRule {
        classes: &["java/util/Calendar", "java/util/GregorianCalendar"],
        groups: Groups::CALENDAR,
    },
    GroupRule {
        classes: &[
            "java/util/Date",
            "java/sql/Date",
            "java/sql/Time",
            "java/sql/Timestamp",
        ],
        groups: Groups::DATE,
    },
];

/// Pre-computed lookup from internal class name to groups.
pub struct GroupTable {
    by_class: FxHashMap<&'static str, Groups>,
}

impl GroupTable {
    /// Build the table from the static rules.
    pub fn new() -> Self {
        let mut by_class = FxHashMap::default();
        for rule in GROUP_RULES {
            for class in rule.classes {
                *by_class.entry(*class).or_insert(Groups::empty()) |= rule.groups;
            }
        }
        tracing::debug!(classes = by_class.len(), "built descriptor group table");
        GroupTable { by_class }
    }

    /// Groups of a descriptor. Arrays, invalid descriptors and classes not
    /// in the table belong to no group.
    pub fn groups_of(&self, descriptor: &TypeDescriptor) -> Groups {
        let class = match descriptor.kind() {
            DescriptorKind::Primitive(primitive) => primitive.boxed_class(),
            DescriptorKind::Object(class) => class,
            DescriptorKind::Array { .. } | DescriptorKind::Invalid => return Groups::empty(),
        };
        self.by_class.get(class).copied().unwrap_or_default()
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_GROUP_TABLE: OnceLock<GroupTable> = OnceLock::new();

/// Get the global group table (lazily initialized, read-only afterwards).
pub fn global_group_table() -> &'static GroupTable {
    GLOBAL_GROUP_TABLE.get_or_init(GroupTable::new)
}

#[cfg(test)]
mod tests;

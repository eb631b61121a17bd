use fsc_ir::Primitive;
use pretty_assertions::assert_eq;

use super::*;

fn groups(signature: &str) -> Groups {
    global_group_table().groups_of(&TypeDescriptor::new(signature))
}

#[test]
fn primitives_share_groups_with_wrappers() {
    for primitive in Primitive::ALL {
        let boxed = format!("L{};", primitive.boxed_class());
        assert_eq!(
            groups(&primitive.code().to_string()),
            groups(&boxed),
            "{}",
            primitive.name()
        );
        assert_ne!(groups(&boxed), Groups::empty(), "{boxed}");
    }
}

#[test]
fn integer_widths_are_interchangeable() {
    let expected = Groups::BOXED_INTEGER | Groups::CHAR_CODE;
    assert_eq!(groups("B"), expected);
    assert_eq!(groups("S"), expected);
    assert_eq!(groups("Ljava/lang/Integer;"), expected);
}

#[test]
fn long_is_epoch_millis_but_not_a_code_point() {
    let long = groups("J");
    assert!(long.contains(Groups::BOXED_INTEGER | Groups::EPOCH_MILLIS));
    assert!(!long.contains(Groups::CHAR_CODE));
}

#[test]
fn sql_dates_are_dates() {
    for class in [
        "Ljava/util/Date;",
        "Ljava/sql/Date;",
        "Ljava/sql/Time;",
        "Ljava/sql/Timestamp;",
    ] {
        assert_eq!(groups(class), Groups::DATE, "{class}");
    }
    assert_eq!(groups("Ljava/util/GregorianCalendar;"), Groups::CALENDAR);
}

#[test]
fn unknown_and_malformed_descriptors_have_no_groups() {
    for signature in ["Ljava/lang/String;", "[I", "[Ljava/lang/Integer;", "V", "", "Lfoo"] {
        assert_eq!(groups(signature), Groups::empty(), "{signature:?}");
    }
}

#[test]
fn table_covers_every_rule_class() {
    let table = GroupTable::default();
    for rule in GROUP_RULES {
        for class in rule.classes {
            let descriptor = TypeDescriptor::object(class);
            assert!(table.groups_of(&descriptor).contains(rule.groups), "{class}");
            assert_eq!(
                table.groups_of(&descriptor),
                global_group_table().groups_of(&descriptor)
            );
        }
    }
}

#[test]
fn global_table_is_shared() {
    assert!(std::ptr::eq(global_group_table(), global_group_table()));
}

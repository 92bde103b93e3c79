//! Property-based tests for Lens laws.
//!
//! This module verifies that Lens implementations satisfy the required laws:
//!
//! - **GetPut Law**: `lens.set(source.clone(), lens.get(&source)) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
//! - **PutPut Law**: `lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)`
//!
//! The laws are checked for hand-written lenses, `lens!` lenses, and lenses
//! produced by composition.

use kaleido::lens;
use kaleido::optics::{Lens, first_lens, iso_swap, second_lens};
use proptest::prelude::*;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    address: Address,
}

fn person_street() -> Lens<Person, String> {
    lens!(Person, address).compose(lens!(Address, street))
}

fn arbitrary_person() -> impl Strategy<Value = Person> {
    ("[a-z]{0,8}", "[a-z ]{0,12}", "[a-z]{0,8}").prop_map(|(name, street, city)| Person {
        name,
        address: Address { street, city },
    })
}

// =============================================================================
// Lens Laws for Point
// =============================================================================

proptest! {
    /// GetPut Law for Point.x: Getting and setting back yields the original
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let value = x_lens.get(&point);
        prop_assert_eq!(x_lens.set(point.clone(), value), point);
    }

    /// PutGet Law for Point.x: Setting then getting yields the set value
    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let updated = x_lens.set(Point { x, y }, new_value);
        prop_assert_eq!(x_lens.get(&updated), new_value);
    }

    /// PutPut Law for Point.y: Two consecutive sets is equivalent to the last set
    #[test]
    fn prop_point_y_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let y_lens = lens!(Point, y);
        let point = Point { x, y };
        let left = y_lens.set(y_lens.set(point.clone(), value1), value2);
        prop_assert_eq!(left, y_lens.set(point, value2));
    }
}

// =============================================================================
// Lens Laws for composed lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_get_put_law(person in arbitrary_person()) {
        let street = person_street();
        let value = street.get(&person);
        prop_assert_eq!(street.set(person.clone(), value), person);
    }

    #[test]
    fn prop_composed_put_get_law(person in arbitrary_person(), street_name in "[a-z]{0,10}") {
        let street = person_street();
        let updated = street.set(person, street_name.clone());
        prop_assert_eq!(street.get(&updated), street_name);
    }

    #[test]
    fn prop_composed_put_put_law(
        person in arbitrary_person(),
        first in "[a-z]{0,10}",
        second in "[a-z]{0,10}"
    ) {
        let street = person_street();
        let left = street.set(street.set(person.clone(), first), second.clone());
        prop_assert_eq!(left, street.set(person, second));
    }

    #[test]
    fn prop_composed_set_leaves_other_fields(person in arbitrary_person(), street_name in "[a-z]{0,10}") {
        let updated = person_street().set(person.clone(), street_name);
        prop_assert_eq!(updated.name, person.name);
        prop_assert_eq!(updated.address.city, person.address.city);
    }

    /// A lens through an iso obeys the same laws.
    #[test]
    fn prop_iso_then_lens_laws(pair in any::<(i16, u8)>(), value in any::<u8>()) {
        let swapped_first = iso_swap::<i16, u8>()
            .then(first_lens::<u8, i16>())
            .into_lens()
            .expect("iso then lens is a lens");
        prop_assert_eq!(swapped_first.set(pair, swapped_first.get(&pair)), pair);
        prop_assert_eq!(swapped_first.get(&swapped_first.set(pair, value)), value);
    }

    #[test]
    fn prop_pair_lenses_are_independent(pair in any::<(i32, i32)>(), value in any::<i32>()) {
        let updated = first_lens::<i32, i32>().set(pair, value);
        prop_assert_eq!(second_lens::<i32, i32>().get(&updated), pair.1);
    }
}

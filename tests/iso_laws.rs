//! Property-based tests for Iso laws.
//!
//! - **`GetReverseGet` Law**: `iso.reverse_get(iso.get(&source)) == source`
//! - **`ReverseGetGet` Law**: `iso.get(&iso.reverse_get(value.clone())) == value`

use kaleido::iso;
use kaleido::optics::{Iso, iso_identity, iso_swap};
use proptest::prelude::*;

fn string_chars() -> Iso<String, Vec<char>> {
    iso!(
        |text: &String| text.chars().collect::<Vec<_>>(),
        |chars: Vec<char>| chars.into_iter().collect::<String>()
    )
}

proptest! {
    #[test]
    fn prop_string_chars_get_reverse_get(text in ".{0,16}") {
        let chars = string_chars();
        prop_assert_eq!(chars.reverse_get(chars.get(&text)), text);
    }

    #[test]
    fn prop_string_chars_reverse_get_get(chars in proptest::collection::vec(any::<char>(), 0..16)) {
        let iso = string_chars();
        prop_assert_eq!(iso.get(&iso.reverse_get(chars.clone())), chars);
    }

    #[test]
    fn prop_swap_is_its_own_reverse(pair in any::<(i32, bool)>()) {
        let swap = iso_swap::<i32, bool>();
        let reversed = swap.clone().reverse();
        prop_assert_eq!(reversed.get(&swap.get(&pair)), pair);
    }

    #[test]
    fn prop_identity_laws(value in any::<u64>()) {
        let identity = iso_identity::<u64>();
        prop_assert_eq!(identity.get(&value), value);
        prop_assert_eq!(identity.reverse_get(value), value);
    }

    #[test]
    fn prop_composed_iso_laws(pair in any::<(u8, i8)>()) {
        let round_trip = iso_swap::<u8, i8>().compose(iso_swap::<i8, u8>());
        prop_assert_eq!(round_trip.get(&pair), pair);
        prop_assert_eq!(round_trip.reverse_get(round_trip.get(&pair)), pair);
    }

    #[test]
    fn prop_iso_as_lens_obeys_put_get(text in "[a-z]{0,8}", chars in proptest::collection::vec(any::<char>(), 0..8)) {
        let lens = string_chars().to_lens();
        prop_assert_eq!(lens.get(&lens.set(text, chars.clone())), chars);
    }
}

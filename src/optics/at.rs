//! Keyed indexed optics over `HashMap`.
//!
//! - [`map_key_lens`]: assumes the key is present; a missing key is a
//!   programmer error and panics with [`OpticError::NotFound`]
//! - [`map_key_prism`]: reports a missing key as `None`
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use kaleido::optics::map_key_prism;
//!
//! let scores = HashMap::from([("alice", 3), ("bob", 5)]);
//! let alice = map_key_prism::<&str, i32>("alice");
//!
//! assert_eq!(alice.get_option(&scores), Some(3));
//! assert_eq!(alice.get_option_at(&"carol", &scores), None);
//!
//! let updated = alice.modify(scores, |score| score + 1);
//! assert_eq!(updated.get("alice"), Some(&4));
//! assert_eq!(updated.get("bob"), Some(&5));
//! ```

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{OpticError, defect};

use super::indexed::{IndexedLens, IndexedPrism};
use super::prism::Prism;

/// Creates an indexed lens on the value stored under `key`.
///
/// # Panics
///
/// Reading or writing panics with [`OpticError::NotFound`] when the map does
/// not contain the key.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use kaleido::optics::map_key_lens;
///
/// let ages = HashMap::from([("ann".to_string(), 30)]);
/// let ann = map_key_lens::<String, u32>("ann".to_string());
///
/// assert_eq!(ann.get(&ages), 30);
/// assert_eq!(ann.modify(ages, |age| age + 1).get("ann"), Some(&31));
/// ```
#[must_use]
pub fn map_key_lens<K, V>(key: K) -> IndexedLens<K, HashMap<K, V>, V>
where
    K: Eq + Hash + Clone + Debug + Send + Sync + 'static,
    V: Clone + 'static,
{
    IndexedLens::new(
        key,
        |key: &K, map: &HashMap<K, V>| match map.get(key) {
            Some(value) => value.clone(),
            None => defect(OpticError::not_found(key)),
        },
        |key: &K, mut map: HashMap<K, V>, value: V| {
            match map.get_mut(key) {
                Some(slot) => *slot = value,
                None => defect(OpticError::not_found(key)),
            }
            map
        },
    )
}

/// Creates an indexed prism on the value stored under `key`.
///
/// A missing key has no focus, and writes leave such a map unchanged. Matched
/// writes replace only that key's value. `review` builds a map holding just
/// the one entry.
#[must_use]
pub fn map_key_prism<K, V>(key: K) -> IndexedPrism<K, HashMap<K, V>, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + 'static,
{
    IndexedPrism::from_family(key, |key: &K| {
        let (match_key, build_key, replace_key) = (key.clone(), key.clone(), key.clone());
        Prism::with_replace(
            move |map: &HashMap<K, V>| map.get(&match_key).cloned(),
            move |value: V| HashMap::from([(build_key.clone(), value)]),
            move |mut map: HashMap<K, V>, value: V| {
                if let Some(slot) = map.get_mut(&replace_key) {
                    *slot = value;
                }
                map
            },
        )
    })
}

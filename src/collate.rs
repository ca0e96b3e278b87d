//! Name collation for sidebar ordering
//!
//! Holder names sort the way a human-facing list does. Names are compared in
//! canonical decomposition (NFD) so `é` and `e` + U+0301 are the same name.
//! Levels, in order:
//!
//! 1. base letters, case-folded, accents stripped (`Émile` sorts with `e`)
//! 2. accents: unaccented ahead of accented
//! 3. case: lowercase ahead of uppercase at the first differing position
//! 4. canonical code-point order
//!
//! Only canonically equivalent names compare `Equal`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Precomputed sort key for one name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    base: String,
    accents: String,
    case: Vec<bool>,
    canonical: String,
}

impl CollationKey {
    pub fn new(name: &str) -> Self {
        let canonical: String = name.nfd().collect();
        let accents: String = canonical.chars().flat_map(char::to_lowercase).collect();
        let base: String = accents.chars().filter(|c| !is_combining_mark(*c)).collect();
        let case = canonical.chars().map(char::is_uppercase).collect();

        Self {
            base,
            accents,
            case,
            canonical,
        }
    }
}

/// Compare two display names in collation order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

/// Sort a slice of items by the name `key` extracts, in collation order.
///
/// Stable: canonically equivalent names keep their input order.
pub fn sort_by_name<T>(items: &mut [T], key: impl Fn(&T) -> &str) {
    items.sort_by_cached_key(|item| CollationKey::new(key(item)));
}

//! Hashing of content-free marker types through their canonical text.
//!
//! Marker values such as a pass carry no state, so the only thing that can
//! distinguish them inside a hash-based container is their type. Hashing
//! their printed name gives each marker a stable, distinct hash without a
//! hand-written impl per type.

use std::fmt::Display;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::display::to_string;

/// Hash a zero-sized printable marker by its canonical string.
///
/// Types with content are rejected at compile time; they should derive
/// [`Hash`] over their fields instead.
///
/// ```
/// use bridge_analyzer::hash::hash_value;
/// use bridge_analyzer::types::card::Pass;
///
/// assert_eq!(hash_value(Pass), hash_value(Pass));
/// ```
///
/// ```compile_fail
/// use bridge_analyzer::hash::hash_value;
/// use bridge_analyzer::types::card::{Level, Strain, Bid};
///
/// let bid = Bid::new(Strain::Heart, Level::MIN);
/// hash_value(bid);
/// ```
pub fn hash_value<T: Display + Copy>(value: T) -> u64 {
    const {
        assert!(
            std::mem::size_of::<T>() == 0,
            "hash_value only accepts content-free marker types"
        )
    };

    let mut hasher = DefaultHasher::new();
    to_string(&value).hash(&mut hasher);
    hasher.finish()
}

/// Implement [`Hash`] for marker types by hashing their canonical string.
#[macro_export]
macro_rules! impl_display_hash {
    ($($marker:ty),+ $(,)?) => {
        $(
            impl ::std::hash::Hash for $marker {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64($crate::hash::hash_value(*self));
                }
            }
        )+
    };
}

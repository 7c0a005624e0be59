//! The [`Maskable`] trait and the shape-specific masking entry points.

use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{error::MaskResult, policy::MaskConfig};

// =============================================================================
// Maskable - Types whose string content can be masked
// =============================================================================

/// A value whose string content can be masked.
///
/// Masking never mutates `self`: it builds a new value from a shared
/// reference, so the original stays usable by code paths that do not mask.
///
/// Strings are masked with [`MaskConfig::apply_to`]. Containers mask each
/// element; maps mask values and leave keys untouched. `None` always stays
/// `None`.
///
/// ## Sets can shrink
///
/// Masking is not injective. Distinct set elements can mask to the same
/// output (`"abc"` and `"xbc"` both become `"**c"` when keeping the last
/// character), and the resulting set then holds fewer elements than the input.
///
/// Only strings and containers of strings can be masked:
///
/// ```compile_fail
/// use maskable::{MaskConfig, Maskable};
///
/// let _ = 42_u32.masked(&MaskConfig::full());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be masked",
    label = "masking applies to strings and containers of strings",
    note = "use a `String`, `Option<String>`, or a collection or map of them"
)]
pub trait Maskable: Sized {
    /// Returns a masked copy of `self`.
    #[must_use]
    fn masked(&self, config: &MaskConfig) -> Self;
}

// =============================================================================
// Shape-specific entry points
// =============================================================================

/// Masks a single optional string with signed keep-counts.
///
/// `None` is returned unchanged without validating the counts. Negative counts
/// fail with [`MaskError::InvalidConfiguration`](crate::MaskError::InvalidConfiguration).
///
/// ```
/// use maskable::{MaskError, mask};
///
/// assert_eq!(mask(Some("hello"), 0, 2, '*'), Ok(Some("***lo".to_string())));
/// assert_eq!(mask(None, 0, 2, '*'), Ok(None));
/// assert!(matches!(
///     mask(Some("abc"), -1, 0, '*'),
///     Err(MaskError::InvalidConfiguration { .. })
/// ));
/// ```
pub fn mask(
    value: Option<&str>,
    keep_initial: i64,
    keep_last: i64,
    mask_char: char,
) -> MaskResult<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let config = MaskConfig::try_new(keep_initial, keep_last, mask_char)?;
    Ok(Some(config.apply_to(value)))
}

/// Masks an ordered sequence element by element, preserving length and order.
pub fn mask_list(
    values: Option<&[Option<String>]>,
    config: &MaskConfig,
) -> Option<Vec<Option<String>>> {
    values.map(|values| values.iter().map(|value| value.masked(config)).collect())
}

/// Masks every element of a set.
///
/// The result may hold fewer elements than the input; see [`Maskable`].
pub fn mask_set<S>(
    values: Option<&HashSet<Option<String>, S>>,
    config: &MaskConfig,
) -> Option<HashSet<Option<String>, S>>
where
    S: BuildHasher + Clone,
{
    values.map(|values| values.masked(config))
}

/// Masks a fixed-size array element by element.
pub fn mask_array<const N: usize>(
    values: Option<&[Option<String>; N]>,
    config: &MaskConfig,
) -> Option<[Option<String>; N]> {
    values.map(|values| values.masked(config))
}

/// Masks the values of a map, leaving keys untouched.
pub fn mask_map_values<K, S>(
    map: Option<&HashMap<K, Option<String>, S>>,
    config: &MaskConfig,
) -> Option<HashMap<K, Option<String>, S>>
where
    K: Hash + Eq + Clone,
    S: BuildHasher + Clone,
{
    map.map(|map| map.masked(config))
}

/// Masks a single optional string, keeping only the last `keep_last` characters.
///
/// Equivalent to [`mask`] with `keep_initial = 0`.
pub fn mask_last(
    value: Option<&str>,
    keep_last: i64,
    mask_char: char,
) -> MaskResult<Option<String>> {
    mask(value, 0, keep_last, mask_char)
}

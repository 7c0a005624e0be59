//! The string masking transform and its configuration.
//!
//! [`MaskConfig`] is a pure string transformation. It does not traverse
//! containers or decide whether masking applies; see
//! [`Maskable`](crate::Maskable) and [`MaskingPolicy`](crate::MaskingPolicy)
//! for those.

use crate::error::{MaskError, MaskResult};

/// Default character used to mask hidden characters.
pub const MASK_CHAR: char = '*';

/// Default number of leading characters left visible.
pub const DEFAULT_KEEP_INITIAL_CHARACTERS: usize = 0;

/// Default number of trailing characters left visible.
pub const DEFAULT_KEEP_LAST_CHARACTERS: usize = 0;

/// Configuration that keeps a prefix and a suffix visible and masks the middle.
///
/// The transform operates on Unicode scalar values, so the masked output
/// always has the same number of `char`s as the input. If the kept spans
/// cover the whole value (`len <= keep_initial + keep_last`) the value is
/// returned unchanged: a short value is never partially masked.
///
/// Values are immutable; the builder methods return updated copies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaskConfig {
    /// Number of leading characters to keep visible.
    keep_initial: usize,
    /// Number of trailing characters to keep visible.
    keep_last: usize,
    /// Symbol used to mask the middle.
    mask_char: char,
}

impl MaskConfig {
    /// Constructs a configuration from already-validated counts.
    #[must_use]
    pub const fn new(keep_initial: usize, keep_last: usize, mask_char: char) -> Self {
        Self {
            keep_initial,
            keep_last,
            mask_char,
        }
    }

    /// Constructs a configuration from signed counts, rejecting negatives.
    ///
    /// `keep_initial` is validated before `keep_last`. Counts above `usize::MAX`
    /// saturate.
    pub fn try_new(keep_initial: i64, keep_last: i64, mask_char: char) -> MaskResult<Self> {
        if keep_initial < 0 {
            return Err(MaskError::invalid("keep_initial_characters", keep_initial));
        }
        if keep_last < 0 {
            return Err(MaskError::invalid("keep_last_characters", keep_last));
        }
        Ok(Self::clamped(keep_initial, keep_last, mask_char))
    }

    /// Constructs a configuration from signed counts, clamping negatives to zero.
    ///
    /// This is the policy at the binding boundary, where configured values are
    /// resolved once per field rather than passed on every call.
    #[must_use]
    pub fn clamped(keep_initial: i64, keep_last: i64, mask_char: char) -> Self {
        Self::new(clamp(keep_initial), clamp(keep_last), mask_char)
    }

    /// Masks everything; equivalent to [`MaskConfig::default`].
    #[must_use]
    pub const fn full() -> Self {
        Self::new(
            DEFAULT_KEEP_INITIAL_CHARACTERS,
            DEFAULT_KEEP_LAST_CHARACTERS,
            MASK_CHAR,
        )
    }

    /// Keeps only the first `keep_initial` characters visible.
    #[must_use]
    pub const fn keep_first(keep_initial: usize) -> Self {
        Self::new(keep_initial, 0, MASK_CHAR)
    }

    /// Keeps only the last `keep_last` characters visible.
    #[must_use]
    pub const fn keep_last(keep_last: usize) -> Self {
        Self::new(0, keep_last, MASK_CHAR)
    }

    /// Keeps both leading and trailing characters visible.
    #[must_use]
    pub const fn keep_both(keep_initial: usize, keep_last: usize) -> Self {
        Self::new(keep_initial, keep_last, MASK_CHAR)
    }

    /// Uses a specific masking character.
    #[must_use]
    pub const fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Number of leading characters left visible.
    pub const fn keep_initial_characters(&self) -> usize {
        self.keep_initial
    }

    /// Number of trailing characters left visible.
    pub const fn keep_last_characters(&self) -> usize {
        self.keep_last
    }

    /// Character substituted for hidden characters.
    pub const fn mask_character(&self) -> char {
        self.mask_char
    }

    /// Returns `true` if a value of `len` characters would be left unchanged.
    pub const fn keeps_whole(&self, len: usize) -> bool {
        len <= self.keep_initial.saturating_add(self.keep_last)
    }

    /// Applies the mask to a string value.
    ///
    /// This method is total: it never fails and never panics.
    ///
    /// ```
    /// use maskable::MaskConfig;
    ///
    /// assert_eq!(MaskConfig::keep_last(2).apply_to("hello"), "***lo");
    /// assert_eq!(MaskConfig::keep_both(2, 1).apply_to("abcde"), "ab**e");
    /// assert_eq!(MaskConfig::keep_both(1, 1).apply_to("a"), "a");
    /// ```
    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        let total = value.chars().count();
        if self.keeps_whole(total) {
            return value.to_owned();
        }

        let hidden = total - self.keep_initial - self.keep_last;
        let mut chars = value.chars();
        let mut masked = String::with_capacity(value.len());
        masked.extend(chars.by_ref().take(self.keep_initial));
        masked.extend(std::iter::repeat_n(self.mask_char, hidden));
        masked.extend(chars.skip(hidden));
        masked
    }
}

impl std::default::Default for MaskConfig {
    fn default() -> Self {
        Self::full()
    }
}

fn clamp(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}

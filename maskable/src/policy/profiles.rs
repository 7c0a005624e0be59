//! Mask profiles: marker types bound to a fixed [`MaskConfig`].
//!
//! A profile plays the role of a per-field annotation. It is resolved at
//! compile time, so a field typed `MaskedValue<String, CreditCard>` always
//! carries the same configuration.
//!
//! # Custom Profiles
//!
//! ```rust
//! use maskable::{MaskConfig, MaskProfile};
//!
//! #[derive(Clone, Copy)]
//! struct AccountNumber;
//!
//! impl MaskProfile for AccountNumber {
//!     fn config() -> MaskConfig {
//!         MaskConfig::keep_both(2, 2).with_mask_char('x')
//!     }
//! }
//!
//! assert_eq!(AccountNumber::config().apply_to("DE89370400"), "DExxxxxx00");
//! ```
//!
//! For one-off counts, [`Keep`] encodes the configuration in const generics.

use super::text::{MASK_CHAR, MaskConfig};

/// Associates a marker type with a concrete mask configuration.
pub trait MaskProfile {
    /// Returns the configuration for this marker type.
    fn config() -> MaskConfig;
}

/// Masks every character with `'*'`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullMask;

impl MaskProfile for FullMask {
    fn config() -> MaskConfig {
        MaskConfig::full()
    }
}

/// Keeps `INITIAL` leading and `LAST` trailing characters, masking with `MASK`.
///
/// `Keep<0, 6, '#'>` is the const-generic spelling of
/// `MaskConfig::keep_last(6).with_mask_char('#')`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Keep<const INITIAL: usize, const LAST: usize, const MASK: char = { MASK_CHAR }>;

impl<const INITIAL: usize, const LAST: usize, const MASK: char> MaskProfile
    for Keep<INITIAL, LAST, MASK>
{
    fn config() -> MaskConfig {
        MaskConfig::new(INITIAL, LAST, MASK)
    }
}

/// Credit card numbers or PANs: keeps the last 4 characters.
///
/// `"4111111111111111"` → `"************1111"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CreditCard;

impl MaskProfile for CreditCard {
    fn config() -> MaskConfig {
        MaskConfig::keep_last(4)
    }
}

/// Phone numbers: keeps the last 4 characters.
///
/// `"+1-555-123-4567"` → `"***********4567"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhoneNumber;

impl MaskProfile for PhoneNumber {
    fn config() -> MaskConfig {
        MaskConfig::keep_last(4)
    }
}

//! Mask configuration, profiles and views.
//!
//! This module provides:
//!
//! - **Text** (`text`): [`MaskConfig`], the string transform that keeps a
//!   prefix and suffix visible and masks the middle.
//!
//! - **Settings** (`settings`): [`MaskSettings`], the deserializable
//!   configuration surface, clamped into a `MaskConfig`.
//!
//! - **Profiles** (`profiles`): marker types like [`CreditCard`] bound to a
//!   fixed configuration through [`MaskProfile`].
//!
//! - **Views** (`view`): [`MaskingPolicy`] and the [`View`] trait that decide
//!   whether a serialization call masks at all.
//!
//! # Example
//!
//! ```rust
//! use maskable::{CreditCard, MaskConfig, MaskProfile};
//!
//! // Built-in profiles have fixed configurations
//! let config = CreditCard::config();
//! assert_eq!(config.apply_to("4111111111111111"), "************1111");
//!
//! // Or build configurations directly
//! let custom = MaskConfig::keep_last(4).with_mask_char('#');
//! assert_eq!(custom.apply_to("sensitive-data"), "##########data");
//! ```

pub mod profiles;
pub mod settings;
pub mod text;
pub mod view;

// Re-export everything at the module level for convenience
pub use profiles::{CreditCard, FullMask, Keep, MaskProfile, PhoneNumber};
pub use settings::MaskSettings;
pub use text::{
    DEFAULT_KEEP_INITIAL_CHARACTERS, DEFAULT_KEEP_LAST_CHARACTERS, MASK_CHAR, MaskConfig,
};
pub use view::{MaskingPolicy, View};

//! Masking engine and view-gated serialization.
//!
//! This module provides the machinery for applying masks:
//!
//! - **`traits`**: The [`Maskable`] trait and shape-specific entry points
//!   (`mask`, `mask_list`, `mask_set`, `mask_array`, `mask_map_values`)
//! - **`containers`**: `Maskable` implementations for std types
//! - **`context`**: The per-thread active view (`with_view`, `active_policy`)
//! - **`adapter`**: The view-gated adapter (`MaskingAdapter`, `MaskedView`)
//! - **`wrappers`**: The `MaskedValue` field wrapper
//!
//! Configuration, profiles and views live in `crate::policy`.

mod adapter;
mod containers;
mod context;
mod traits;
mod wrappers;

pub use adapter::{MaskedView, MaskingAdapter};
pub use context::{active_policy, with_view};
pub use traits::{
    Maskable, mask, mask_array, mask_last, mask_list, mask_map_values, mask_set,
};
pub use wrappers::MaskedValue;

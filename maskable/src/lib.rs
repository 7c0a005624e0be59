//! View-gated masking of sensitive strings at serialization time.
//!
//! This crate separates:
//! - **Mask configuration**: how many leading/trailing characters stay visible
//!   and which character replaces the rest ([`MaskConfig`]).
//! - **Views**: whether a given serialization pass masks at all
//!   ([`MaskingPolicy`], [`View`]).
//!
//! Masking keeps the first `keep_initial` and last `keep_last` characters of a
//! string and replaces everything in between with the mask character. Strings
//! too short to mask without overlapping the kept spans are left unchanged.
//! Lists, sets, arrays and map values are masked element by element.
//!
//! What this crate does:
//! - implements the masking algorithm and the [`Maskable`] container walk
//! - decides per serialization call whether masking applies
//! - provides `serde` glue so fields serialize masked only under a masking view
//!
//! What it does not do:
//! - encrypt or irreversibly redact (masking is a lossy display transform)
//! - detect sensitive content
//! - encode output (that is the serializer's job)
//!
//! ```rust
//! use maskable::{MaskConfig, MaskingPolicy, MaskingAdapter};
//!
//! let adapter = MaskingAdapter::new(MaskConfig::keep_last(4));
//! let card = String::from("4111111111111111");
//!
//! assert_eq!(adapter.transform(&card, MaskingPolicy::Enabled).as_str(), "************1111");
//! assert_eq!(adapter.transform(&card, MaskingPolicy::Disabled).as_str(), "4111111111111111");
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod error;
#[cfg(feature = "json")]
pub mod json;
mod masking;
pub mod policy;
pub mod serde;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use error::{MaskError, MaskResult};
// Re-exports from masking module
pub use masking::{
    Maskable, MaskedValue, MaskedView, MaskingAdapter, active_policy, mask, mask_array,
    mask_last, mask_list, mask_map_values, mask_set, with_view,
};
// Re-exports from policy module
pub use policy::{
    CreditCard, DEFAULT_KEEP_INITIAL_CHARACTERS, DEFAULT_KEEP_LAST_CHARACTERS, FullMask, Keep,
    MASK_CHAR, MaskConfig, MaskProfile, MaskSettings, MaskingPolicy, PhoneNumber, View,
};

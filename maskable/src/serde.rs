//! Helpers for `#[serde(serialize_with = "...")]`.
//!
//! These let plain fields (`String`, `Vec<String>`, `HashMap<K, String>`, ...)
//! serialize masked under a masking view without changing their type. The
//! mask configuration comes from a [`MaskProfile`] named in the path; the view
//! comes from the enclosing [`with_view`](crate::with_view) scope.
//!
//! ```
//! use maskable::{Keep, MaskingPolicy, with_view};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Customer {
//!     name: String,
//!     #[serde(serialize_with = "maskable::serde::serialize::<Keep<0, 6, '#'>, _, _>")]
//!     document: String,
//! }
//!
//! let customer = Customer {
//!     name: "Ada".into(),
//!     document: "aabbccdd".into(),
//! };
//!
//! let masked = with_view(MaskingPolicy::Enabled, || serde_json::to_string(&customer)).unwrap();
//! assert_eq!(masked, r###"{"name":"Ada","document":"##bbccdd"}"###);
//!
//! let plain = serde_json::to_string(&customer).unwrap();
//! assert_eq!(plain, r#"{"name":"Ada","document":"aabbccdd"}"#);
//! ```

use serde::{Serialize, Serializer};

use crate::{
    masking::{Maskable, MaskingAdapter, active_policy},
    policy::{MaskConfig, MaskProfile, View},
};

/// Serializes `value` with `P::config()` if the active view enables masking.
pub fn serialize<P, T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    P: MaskProfile,
    T: Maskable + Serialize,
    S: Serializer,
{
    serialize_with_config(value, &P::config(), active_policy(), serializer)
}

/// Serializes `value` with `P::config()`, regardless of the active view.
///
/// Useful for fields that must never leave the process unmasked.
pub fn serialize_always<P, T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    P: MaskProfile,
    T: Maskable + Serialize,
    S: Serializer,
{
    value.masked(&P::config()).serialize(serializer)
}

/// Serializes `value` with an explicit configuration and view.
///
/// This is the building block for hand-written `Serialize` impls whose
/// configuration is only known at runtime.
pub fn serialize_with_config<T, S>(
    value: &T,
    config: &MaskConfig,
    view: impl View,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    T: Maskable + Serialize,
    S: Serializer,
{
    MaskingAdapter::new(*config).serialize(value, view, serializer)
}

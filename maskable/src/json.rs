//! `serde_json` integration.
//!
//! - `*_with_view` functions serialize a value with a view active for the
//!   whole call, the JSON counterpart of wrapping the call in
//!   [`with_view`](crate::with_view).
//! - `serde_json::Value` implements [`Maskable`]: string leaves are masked,
//!   arrays and object values are walked, every other scalar is kept. Object
//!   keys are never masked.

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::{
    masking::{Maskable, with_view},
    policy::{MaskConfig, View},
};

/// Serializes `value` as a JSON string with `view` active.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use maskable::{Keep, MaskedValue, MaskingPolicy, json::to_string_with_view};
///
/// let mut documents: BTreeMap<u32, MaskedValue<String, Keep<0, 1>>> = BTreeMap::new();
/// documents.insert(1, "bcd".to_string().into());
///
/// assert_eq!(to_string_with_view(&documents, MaskingPolicy::Enabled).unwrap(), r#"{"1":"**d"}"#);
/// assert_eq!(to_string_with_view(&documents, MaskingPolicy::Disabled).unwrap(), r#"{"1":"bcd"}"#);
/// ```
pub fn to_string_with_view<T>(value: &T, view: impl View) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    with_view(view, || serde_json::to_string(value))
}

/// Serializes `value` as a pretty-printed JSON string with `view` active.
pub fn to_string_pretty_with_view<T>(value: &T, view: impl View) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    with_view(view, || serde_json::to_string_pretty(value))
}

/// Serializes `value` as JSON bytes with `view` active.
pub fn to_vec_with_view<T>(value: &T, view: impl View) -> serde_json::Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    with_view(view, || serde_json::to_vec(value))
}

/// Converts `value` into a `serde_json::Value` with `view` active.
pub fn to_value_with_view<T>(value: &T, view: impl View) -> serde_json::Result<JsonValue>
where
    T: Serialize + ?Sized,
{
    with_view(view, || serde_json::to_value(value))
}

impl Maskable for JsonValue {
    fn masked(&self, config: &MaskConfig) -> Self {
        match self {
            JsonValue::String(text) => JsonValue::String(config.apply_to(text)),
            JsonValue::Array(items) => JsonValue::Array(items.masked(config)),
            JsonValue::Object(entries) => JsonValue::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.masked(config)))
                    .collect(),
            ),
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Number(_) => self.clone(),
        }
    }
}

//! Adapters for emitting masked values through `slog`.
//!
//! A log sink is never a consumer that should see raw values, so everything
//! in this module masks unconditionally: the active view is ignored.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from `Maskable::masked()`,
//!   not from the original value.
//! - Emitting strings as plain strings and every other shape as nested JSON
//!   via `slog`'s nested-value support.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    masking::{Maskable, MaskedValue},
    policy::{MaskConfig, MaskProfile},
};

/// Marker trait for types whose `slog` integration always emits masked output.
///
/// ```compile_fail
/// use maskable::slog::SlogMasked;
///
/// fn assert_slog_masked<T: SlogMasked>() {}
///
/// assert_slog_masked::<String>();
/// ```
pub trait SlogMasked: SlogValue {}

impl<T: SlogMasked + ?Sized> SlogMasked for &T {}

/// An already-masked value, stored as JSON, ready to be logged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskedJson(JsonValue);

impl MaskedJson {
    /// Masks `value` with `config` and captures the result as JSON.
    ///
    /// If the masked value cannot be represented as JSON, the captured value is
    /// a string starting with `"Failed to serialize masked value"`.
    pub fn new<T>(value: &T, config: &MaskConfig) -> Self
    where
        T: Maskable + Serialize,
    {
        let json = serde_json::to_value(value.masked(config)).unwrap_or_else(|err| {
            JsonValue::String(format!("Failed to serialize masked value: {err}"))
        });
        Self(json)
    }

    /// The captured JSON.
    pub const fn value(&self) -> &JsonValue {
        &self.0
    }
}

fn emit_json(
    json: &JsonValue,
    record: &Record<'_>,
    key: Key,
    serializer: &mut dyn Serializer,
) -> SlogResult {
    match json {
        JsonValue::String(text) => serializer.emit_str(key, text),
        other => {
            let nested = slog::Serde(other.clone());
            SlogValue::serialize(&nested, record, key, serializer)
        }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        emit_json(&self.0, record, key, serializer)
    }
}

impl SlogMasked for MaskedJson {}

impl<T, P> SlogValue for MaskedValue<T, P>
where
    T: Maskable + Serialize,
    P: MaskProfile,
{
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let masked = MaskedJson::new(self.expose(), &P::config());
        emit_json(masked.value(), record, key, serializer)
    }
}

impl<T, P> SlogMasked for MaskedValue<T, P>
where
    T: Maskable + Serialize,
    P: MaskProfile,
{
}

/// Extension trait for ergonomic slog logging of masked values.
///
/// ## Example
/// ```ignore
/// use maskable::{MaskConfig, slog::SlogMaskedExt};
///
/// info!(logger, "payment"; "card" => card_number.slog_masked(&MaskConfig::keep_last(4)));
/// ```
pub trait SlogMaskedExt: Maskable + Serialize {
    /// Masks `self` with `config` and returns a `slog::Value` for the result.
    fn slog_masked(&self, config: &MaskConfig) -> MaskedJson {
        MaskedJson::new(self, config)
    }
}

impl<T> SlogMaskedExt for T where T: Maskable + Serialize {}

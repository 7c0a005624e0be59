//! The view-gated transform adapter.
//!
//! [`MaskingAdapter`] binds one resolved [`MaskConfig`] and decides, per call,
//! whether a value is masked before it reaches the serializer. The decision is
//! recomputed from the view passed to each call; nothing is remembered
//! between calls.

use std::borrow::Cow;

use serde::{Serialize, Serializer};

use super::traits::Maskable;
use crate::policy::{MaskConfig, MaskSettings, View};

/// Applies a bound [`MaskConfig`] when, and only when, the view enables masking.
///
/// The adapter never encodes anything itself: it hands either the original or
/// the masked value to the value's own `Serialize` implementation.
///
/// ```
/// use maskable::{MaskConfig, MaskingAdapter, MaskingPolicy};
///
/// let adapter = MaskingAdapter::new(MaskConfig::keep_last(1));
/// let values = vec![Some("abc".to_string()), Some("a".to_string())];
///
/// let masked = serde_json::to_string(&adapter.view(&values, MaskingPolicy::Enabled)).unwrap();
/// assert_eq!(masked, r#"["**c","a"]"#);
///
/// let plain = serde_json::to_string(&adapter.view(&values, MaskingPolicy::Disabled)).unwrap();
/// assert_eq!(plain, r#"["abc","a"]"#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MaskingAdapter {
    config: MaskConfig,
}

impl MaskingAdapter {
    /// Binds a resolved configuration.
    #[must_use]
    pub const fn new(config: MaskConfig) -> Self {
        Self { config }
    }

    /// Binds configuration settings, clamping negative counts to zero.
    #[must_use]
    pub fn from_settings(settings: MaskSettings) -> Self {
        Self::new(MaskConfig::from(settings))
    }

    /// The bound configuration.
    pub const fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Returns the value to hand to the serializer for this call.
    ///
    /// Borrows the original when the view does not enable masking.
    pub fn transform<'a, T>(&self, value: &'a T, view: impl View) -> Cow<'a, T>
    where
        T: Maskable + Clone,
    {
        if view.masking_policy().is_enabled() {
            Cow::Owned(value.masked(&self.config))
        } else {
            Cow::Borrowed(value)
        }
    }

    /// Serializes `value`, masked if the view enables masking.
    pub fn serialize<T, S>(
        &self,
        value: &T,
        view: impl View,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        T: Maskable + Serialize,
        S: Serializer,
    {
        if view.masking_policy().is_enabled() {
            value.masked(&self.config).serialize(serializer)
        } else {
            value.serialize(serializer)
        }
    }

    /// Wraps `value` for serialization under an explicit view.
    pub fn view<'a, T, V>(&'a self, value: &'a T, view: V) -> MaskedView<'a, T, V>
    where
        T: Maskable + Serialize,
        V: View,
    {
        MaskedView {
            adapter: self,
            value,
            view,
        }
    }
}

impl From<MaskConfig> for MaskingAdapter {
    fn from(config: MaskConfig) -> Self {
        Self::new(config)
    }
}

/// A value paired with the view it is serialized under.
///
/// Created by [`MaskingAdapter::view`]. Serializing it routes through
/// [`MaskingAdapter::serialize`].
#[derive(Clone, Copy, Debug)]
pub struct MaskedView<'a, T, V> {
    adapter: &'a MaskingAdapter,
    value: &'a T,
    view: V,
}

impl<T, V> Serialize for MaskedView<'_, T, V>
where
    T: Maskable + Serialize,
    V: View,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.adapter.serialize(self.value, &self.view, serializer)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::MaskingAdapter;
    use crate::{MaskConfig, MaskSettings, MaskingPolicy};

    #[test]
    fn disabled_view_borrows_original() {
        let adapter = MaskingAdapter::new(MaskConfig::keep_last(1));
        let value = "abc".to_string();
        let result = adapter.transform(&value, MaskingPolicy::Disabled);
        assert!(matches!(result, Cow::Borrowed(original) if original == "abc"));
    }

    #[test]
    fn enabled_view_masks() {
        let adapter = MaskingAdapter::new(MaskConfig::keep_last(1));
        let value = "abc".to_string();
        assert_eq!(adapter.transform(&value, MaskingPolicy::Enabled).as_str(), "**c");
        assert_eq!(value, "abc");
    }

    #[test]
    fn decision_is_not_sticky() {
        let adapter = MaskingAdapter::new(MaskConfig::default());
        let value = Some("abc".to_string());
        assert_eq!(
            *adapter.transform(&value, true),
            Some("***".to_string())
        );
        assert_eq!(*adapter.transform(&value, false), Some("abc".to_string()));
        assert_eq!(*adapter.transform(&value, None::<bool>), Some("abc".to_string()));
    }

    #[test]
    fn serialize_delegates_to_inner_serializer() {
        let adapter = MaskingAdapter::new(MaskConfig::keep_last(2));
        let value: Option<String> = None;
        let json = serde_json::to_string(&adapter.view(&value, MaskingPolicy::Enabled)).unwrap();
        assert_eq!(json, "null");

        let value = "hello".to_string();
        let json = serde_json::to_string(&adapter.view(&value, MaskingPolicy::Enabled)).unwrap();
        assert_eq!(json, r#""***lo""#);
    }

    #[test]
    fn from_settings_clamps() {
        let adapter = MaskingAdapter::from_settings(MaskSettings {
            mask_character: '#',
            keep_initial_characters: -2,
            keep_last_characters: 1,
        });
        assert_eq!(
            *adapter.config(),
            MaskConfig::keep_last(1).with_mask_char('#')
        );
    }
}

//! Field wrapper that serializes masked under a masking view.

use std::{fmt, hash::Hash, marker::PhantomData};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{adapter::MaskingAdapter, context::active_policy, traits::Maskable};
use crate::policy::MaskProfile;

// =============================================================================
// MaskedValue - Wrapper binding a value to a mask profile
// =============================================================================

/// A value bound to the mask profile `P`.
///
/// **Serialization** is view-gated: inside a
/// [`with_view`](crate::with_view) scope whose view enables masking, the value
/// serializes masked with `P::config()`; everywhere else it serializes
/// unchanged, exactly like `T`.
///
/// **Deserialization** reads `T` as-is.
///
/// **`Debug`** always shows the masked form, so the raw value does not end up
/// in logs by accident. Use [`MaskedValue::expose`] to get at it.
///
/// ```
/// use maskable::{CreditCard, MaskedValue, MaskingPolicy, with_view};
///
/// let card = MaskedValue::<String, CreditCard>::from("4111111111111111".to_string());
///
/// let plain = serde_json::to_string(&card).unwrap();
/// let masked = with_view(MaskingPolicy::Enabled, || serde_json::to_string(&card)).unwrap();
///
/// assert_eq!(plain, r#""4111111111111111""#);
/// assert_eq!(masked, r#""************1111""#);
/// ```
pub struct MaskedValue<T, P> {
    value: T,
    profile: PhantomData<fn() -> P>,
}

impl<T, P> MaskedValue<T, P> {
    /// Wraps a value.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            profile: PhantomData,
        }
    }

    /// Explicitly access the inner value.
    ///
    /// This method makes it clear in your code that you are intentionally
    /// accessing the raw sensitive value. Use with care.
    #[must_use]
    pub const fn expose(&self) -> &T {
        &self.value
    }

    /// Explicitly access the inner value mutably.
    pub fn expose_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Consume the wrapper and return the inner value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, P> MaskedValue<T, P>
where
    T: Maskable,
    P: MaskProfile,
{
    /// Returns the value masked with `P::config()`, regardless of any view.
    #[must_use]
    pub fn masked(&self) -> T {
        self.value.masked(&P::config())
    }
}

impl<T, P> From<T> for MaskedValue<T, P> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Clone, P> Clone for MaskedValue<T, P> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Default, P> Default for MaskedValue<T, P> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, P> PartialEq for MaskedValue<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P> Eq for MaskedValue<T, P> {}

impl<T: Hash, P> Hash for MaskedValue<T, P> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P> fmt::Debug for MaskedValue<T, P>
where
    T: Maskable + fmt::Debug,
    P: MaskProfile,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MaskedValue").field(&self.masked()).finish()
    }
}

impl<T, P> Serialize for MaskedValue<T, P>
where
    T: Maskable + Serialize,
    P: MaskProfile,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MaskingAdapter::new(P::config()).serialize(&self.value, active_policy(), serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for MaskedValue<T, P>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

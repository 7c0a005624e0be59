//! Adapters for emitting masked values through `tracing`.
//!
//! Like the `slog` adapters, these mask unconditionally; the active view is
//! ignored.
//!
//! - **`TracingMaskedExt`**: Logs masked values as display strings (the
//!   `Debug` rendering of the masked value). Works with any subscriber.
//!
//! - **`TracingValuableExt`** (requires `tracing-valuable` feature): Logs
//!   masked values as structured data via the `valuable` crate.
//!
//! # Example
//!
//! ```ignore
//! use maskable::tracing::{TracingMaskedExt, TracingValuableExt};
//!
//! tracing::info!(card = %account.card.tracing_masked());
//! tracing::info!(emails = account.emails.tracing_masked_valuable());
//! ```

use std::fmt;

use tracing::field::{DisplayValue, display};

use crate::{
    masking::{Maskable, MaskedValue},
    policy::{MaskConfig, MaskProfile},
};

/// Marker trait for types whose `tracing` integration always emits masked output.
pub trait TracingMasked {}

impl<T, P> TracingMasked for MaskedValue<T, P>
where
    T: Maskable,
    P: MaskProfile,
{
}

/// Extension trait for logging masked values as display strings.
pub trait TracingMaskedExt {
    /// Wraps the masked value for `tracing` logging as a display value.
    fn tracing_masked(&self) -> DisplayValue<String>;
}

impl<T, P> TracingMaskedExt for MaskedValue<T, P>
where
    T: Maskable + fmt::Debug,
    P: MaskProfile,
{
    fn tracing_masked(&self) -> DisplayValue<String> {
        display(format!("{:?}", self.masked()))
    }
}

/// Masks any value with an explicit configuration for `tracing` output.
pub fn tracing_masked_with<T>(value: &T, config: &MaskConfig) -> DisplayValue<String>
where
    T: Maskable + fmt::Debug,
{
    display(format!("{:?}", value.masked(config)))
}

/// A masked value that implements `valuable::Valuable` for structured tracing output.
#[cfg(feature = "tracing-valuable")]
#[derive(Clone, Debug)]
pub struct MaskedValuable<T> {
    masked: T,
}

#[cfg(feature = "tracing-valuable")]
impl<T> MaskedValuable<T> {
    /// Creates a new `MaskedValuable` from an already-masked value.
    pub const fn new(masked: T) -> Self {
        Self { masked }
    }

    /// Returns a reference to the masked inner value.
    pub const fn inner(&self) -> &T {
        &self.masked
    }
}

#[cfg(feature = "tracing-valuable")]
impl<T: valuable::Valuable> valuable::Valuable for MaskedValuable<T> {
    fn as_value(&self) -> valuable::Value<'_> {
        self.masked.as_value()
    }

    fn visit(&self, visit: &mut dyn valuable::Visit) {
        self.masked.visit(visit);
    }
}

#[cfg(feature = "tracing-valuable")]
impl<T> TracingMasked for MaskedValuable<T> {}

/// Extension trait for logging masked values as structured `valuable` data.
#[cfg(feature = "tracing-valuable")]
pub trait TracingValuableExt {
    /// The masked type that will be wrapped in `MaskedValuable`.
    type Masked: valuable::Valuable;

    /// Masks the value and wraps it for structured tracing output.
    fn tracing_masked_valuable(&self) -> MaskedValuable<Self::Masked>;
}

#[cfg(feature = "tracing-valuable")]
impl<T, P> TracingValuableExt for MaskedValue<T, P>
where
    T: Maskable + valuable::Valuable,
    P: MaskProfile,
{
    type Masked = T;

    fn tracing_masked_valuable(&self) -> MaskedValuable<Self::Masked> {
        MaskedValuable::new(self.masked())
    }
}

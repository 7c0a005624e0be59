//! Maskable leaves: owned and borrowed string types.

use std::borrow::Cow;

use crate::{masking::traits::Maskable, policy::MaskConfig};

impl Maskable for String {
    fn masked(&self, config: &MaskConfig) -> Self {
        config.apply_to(self)
    }
}

impl Maskable for Box<str> {
    fn masked(&self, config: &MaskConfig) -> Self {
        config.apply_to(self).into_boxed_str()
    }
}

impl Maskable for Cow<'_, str> {
    fn masked(&self, config: &MaskConfig) -> Self {
        Cow::Owned(config.apply_to(self))
    }
}

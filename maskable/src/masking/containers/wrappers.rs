//! Masking for wrapper and sequence container types.

use std::{collections::VecDeque, rc::Rc, sync::Arc};

use crate::{masking::traits::Maskable, policy::MaskConfig};

// =============================================================================
// Wrapper container implementations
// =============================================================================

impl<T> Maskable for Option<T>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        self.as_ref().map(|value| value.masked(config))
    }
}

impl<T> Maskable for Box<T>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        Box::new((**self).masked(config))
    }
}

impl<T> Maskable for Rc<T>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        Rc::new((**self).masked(config))
    }
}

impl<T> Maskable for Arc<T>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        Arc::new((**self).masked(config))
    }
}

// =============================================================================
// Sequence implementations (order and length preserved)
// =============================================================================

impl<T> Maskable for Vec<T>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        self.iter().map(|value| value.masked(config)).collect()
    }
}

impl<T> Maskable for VecDeque<T>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        self.iter().map(|value| value.masked(config)).collect()
    }
}

impl<T> Maskable for Box<[T]>
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        self.iter().map(|value| value.masked(config)).collect()
    }
}

impl<T, const N: usize> Maskable for [T; N]
where
    T: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        self.each_ref().map(|value| value.masked(config))
    }
}

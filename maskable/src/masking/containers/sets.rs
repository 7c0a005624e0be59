//! Masking for set containers.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{masking::traits::Maskable, policy::MaskConfig};

// =============================================================================
// Set implementations
// =============================================================================

impl<T, S> Maskable for HashSet<T, S>
where
    T: Maskable + Hash + Eq,
    S: BuildHasher + Clone,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        // NOTE: Masking can collapse distinct values into equal ones, which may
        // reduce set cardinality (e.g., "abc" and "xbc" both masking to "**c").
        let mut result = HashSet::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(self.iter().map(|value| value.masked(config)));
        result
    }
}

impl<T> Maskable for BTreeSet<T>
where
    T: Maskable + Ord,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        // NOTE: Masking can collapse distinct values into equal ones, which may
        // reduce set cardinality (e.g., "abc" and "xbc" both masking to "**c").
        self.iter().map(|value| value.masked(config)).collect()
    }
}

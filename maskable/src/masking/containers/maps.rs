//! Masking for map containers (values only).

use std::{
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use crate::{masking::traits::Maskable, policy::MaskConfig};

// =============================================================================
// Map implementations (values only, keys unchanged)
// =============================================================================

impl<K, V, S> Maskable for HashMap<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Maskable,
    S: BuildHasher + Clone,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        // NOTE: Map keys are not masked. Masking them could make two keys equal
        // and silently drop entries.
        let mut result = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        result.extend(
            self.iter()
                .map(|(key, value)| (key.clone(), value.masked(config))),
        );
        result
    }
}

impl<K, V> Maskable for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Maskable,
{
    fn masked(&self, config: &MaskConfig) -> Self {
        // NOTE: Map keys are not masked. Masking them could make two keys equal
        // and silently drop entries.
        self.iter()
            .map(|(key, value)| (key.clone(), value.masked(config)))
            .collect()
    }
}

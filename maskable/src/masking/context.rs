//! Per-thread serialization context carrying the active view.
//!
//! `serde::Serialize` has no context parameter, so a field deep inside a
//! struct cannot be handed the view its enclosing serialization call runs
//! under. [`with_view`] installs the view for the duration of one closure on
//! the current thread; [`MaskedValue`](crate::MaskedValue) and the
//! [`crate::serde`] helpers read it back with [`active_policy`].
//!
//! The scope is restored when the closure returns or unwinds, so a view never
//! leaks into later calls, and threads never observe each other's views.

use std::cell::Cell;

use crate::policy::{MaskingPolicy, View};

thread_local! {
    static ACTIVE_POLICY: Cell<MaskingPolicy> = const { Cell::new(MaskingPolicy::Disabled) };
}

/// Runs `f` with `view` as the active view on the current thread.
///
/// Scopes nest: the previous view is restored when `f` returns (or panics).
///
/// ```
/// use maskable::{MaskingPolicy, active_policy, with_view};
///
/// assert_eq!(active_policy(), MaskingPolicy::Disabled);
/// with_view(MaskingPolicy::Enabled, || {
///     assert_eq!(active_policy(), MaskingPolicy::Enabled);
/// });
/// assert_eq!(active_policy(), MaskingPolicy::Disabled);
/// ```
pub fn with_view<V, F, R>(view: V, f: F) -> R
where
    V: View,
    F: FnOnce() -> R,
{
    let _guard = ScopeGuard::enter(view.masking_policy());
    f()
}

/// Returns the masking policy of the innermost active view on this thread.
///
/// Outside of any [`with_view`] scope this is [`MaskingPolicy::Disabled`].
pub fn active_policy() -> MaskingPolicy {
    ACTIVE_POLICY.with(Cell::get)
}

/// Restores the previous policy on drop.
struct ScopeGuard {
    previous: MaskingPolicy,
}

impl ScopeGuard {
    fn enter(policy: MaskingPolicy) -> Self {
        let previous = ACTIVE_POLICY.with(|active| active.replace(policy));
        Self { previous }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ACTIVE_POLICY.with(|active| active.set(self.previous));
    }
}

//! Views: the per-call signal that turns masking on.
//!
//! A serialization pass runs under at most one active view. Masking applies
//! only when that view resolves to [`MaskingPolicy::Enabled`]; with no view,
//! or any view that does not opt in, values are written unchanged.

/// Whether masking applies to the current serialization call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MaskingPolicy {
    /// Values pass through unchanged. This is the initial state.
    #[default]
    Disabled,
    /// Values are masked with their bound configuration.
    Enabled,
}

impl MaskingPolicy {
    /// Resolves the policy for an optional active view.
    ///
    /// No view means [`MaskingPolicy::Disabled`].
    pub fn resolve<V: View + ?Sized>(active_view: Option<&V>) -> Self {
        active_view.map_or(Self::Disabled, |view| view.masking_policy())
    }

    /// Returns `true` for [`MaskingPolicy::Enabled`].
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl From<bool> for MaskingPolicy {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// A view a value can be serialized under.
///
/// Views that extend the masking view return [`MaskingPolicy::Enabled`];
/// every other view returns [`MaskingPolicy::Disabled`].
///
/// ```
/// use maskable::{MaskingPolicy, View};
///
/// enum ApiView {
///     Internal,
///     Public,
/// }
///
/// impl View for ApiView {
///     fn masking_policy(&self) -> MaskingPolicy {
///         match self {
///             ApiView::Internal => MaskingPolicy::Disabled,
///             ApiView::Public => MaskingPolicy::Enabled,
///         }
///     }
/// }
///
/// assert!(MaskingPolicy::resolve(Some(&ApiView::Public)).is_enabled());
/// assert!(!MaskingPolicy::resolve(Some(&ApiView::Internal)).is_enabled());
/// assert!(!MaskingPolicy::resolve::<ApiView>(None).is_enabled());
/// ```
pub trait View {
    /// Returns whether this view masks values.
    fn masking_policy(&self) -> MaskingPolicy;
}

impl View for MaskingPolicy {
    fn masking_policy(&self) -> MaskingPolicy {
        *self
    }
}

impl View for bool {
    fn masking_policy(&self) -> MaskingPolicy {
        MaskingPolicy::from(*self)
    }
}

impl<V: View> View for Option<V> {
    fn masking_policy(&self) -> MaskingPolicy {
        MaskingPolicy::resolve(self.as_ref())
    }
}

impl<V: View + ?Sized> View for &V {
    fn masking_policy(&self) -> MaskingPolicy {
        (**self).masking_policy()
    }
}

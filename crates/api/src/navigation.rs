use crate::error::NavigationFailure;
use crate::models::PageMetadata;
use crate::surface::{MenuSurface, RenderTarget};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Forward,
    Back,
}

/// Notifications raised by a [`NavigationService`].
///
/// Always delivered after the state change they describe, so a listener that
/// reads `current()` sees the new page.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    Navigated {
        from: Option<String>,
        to: String,
        direction: NavigationDirection,
    },
    /// A request that left the navigation state untouched.
    Failed {
        target: Option<String>,
        reason: NavigationFailure,
    },
}

impl NavigationEvent {
    pub fn is_navigated(&self) -> bool {
        matches!(self, NavigationEvent::Navigated { .. })
    }
}

pub type NavigationListener = Arc<dyn Fn(&NavigationEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(pub u64);

/// Runtime navigation: current page, back-history, breadcrumbs and the
/// binding to a menu's selection.
///
/// Navigation misses are not errors. `navigate` and `go_back` silently do
/// nothing when the request cannot be honored; callers who care use the
/// `try_*` variants or listen for [`NavigationEvent::Failed`].
pub trait NavigationService: Send + Sync {
    fn attach_render_target(&self, target: Arc<dyn RenderTarget>);

    fn detach_render_target(&self);

    fn try_navigate(&self, id: &str) -> Result<(), NavigationFailure>;

    fn try_go_back(&self) -> Result<(), NavigationFailure>;

    fn navigate(&self, id: &str) {
        let _ = self.try_navigate(id);
    }

    fn go_back(&self) {
        let _ = self.try_go_back();
    }

    fn can_go_back(&self) -> bool;

    fn current(&self) -> Option<PageMetadata>;

    fn current_page_id(&self) -> Option<String> {
        self.current().map(|page| page.id)
    }

    /// Back-history ids, oldest first. The last entry is what `go_back` returns to.
    fn history(&self) -> Vec<String>;

    fn page(&self, id: &str) -> Option<PageMetadata>;

    /// Root-to-leaf trail along the parent chain of `id`. Empty for unknown ids.
    fn breadcrumbs(&self, id: &str) -> Vec<PageMetadata>;

    fn subscribe(&self, listener: NavigationListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId) -> bool;

    /// Route the menu's selection changes into `navigate`. Selecting the page
    /// that is already current does nothing.
    fn connect(&self, menu: &dyn MenuSurface);
}

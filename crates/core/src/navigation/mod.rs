//! The runtime navigation engine.

mod history;

pub use history::BackStack;

use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::{debug, warn};
use wayfinder_api::{
    MenuSurface, NavigationDirection, NavigationEvent, NavigationFailure, NavigationListener,
    NavigationOptions, NavigationService, PageMetadata, RenderTarget, SubscriptionId,
};

struct NavigationState {
    current: Option<String>,
    history: BackStack,
}

/// [`NavigationService`] over a fixed set of pages.
///
/// The page lookup is fixed at construction; only the current page and the
/// back-history change, and only through navigation. Locks are never held
/// while the render target or a listener runs, so listeners may navigate.
pub struct PageNavigator {
    pages: IndexMap<String, PageMetadata>,
    state: RwLock<NavigationState>,
    frame: RwLock<Option<Arc<dyn RenderTarget>>>,
    listeners: RwLock<Vec<(SubscriptionId, NavigationListener)>>,
    next_subscription: AtomicU64,
    me: Weak<PageNavigator>,
}

impl PageNavigator {
    pub fn new(pages: Vec<PageMetadata>, options: &NavigationOptions) -> Arc<Self> {
        let mut lookup = IndexMap::with_capacity(pages.len());
        for page in pages {
            if lookup.contains_key(&page.id) {
                warn!(id = %page.id, "duplicate page id ignored by navigator");
                continue;
            }
            lookup.insert(page.id.clone(), page);
        }

        Arc::new_cyclic(|me| Self {
            pages: lookup,
            state: RwLock::new(NavigationState {
                current: None,
                history: BackStack::new(options.history_limit),
            }),
            frame: RwLock::new(None),
            listeners: RwLock::new(Vec::new()),
            next_subscription: AtomicU64::new(1),
            me: me.clone(),
        })
    }

    /// All pages in discovery order.
    pub fn pages(&self) -> impl Iterator<Item = &PageMetadata> {
        self.pages.values()
    }

    fn state(&self) -> RwLockReadGuard<'_, NavigationState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, NavigationState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn frame(&self) -> Option<Arc<dyn RenderTarget>> {
        self.frame
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn emit(&self, event: NavigationEvent) {
        let listeners: Vec<NavigationListener> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(&event);
        }
    }

    fn fail(&self, target: Option<&str>, reason: NavigationFailure) -> Result<(), NavigationFailure> {
        debug!(page = ?target, %reason, "navigation ignored");
        self.emit(NavigationEvent::Failed {
            target: target.map(str::to_string),
            reason: reason.clone(),
        });
        Err(reason)
    }
}

impl NavigationService for PageNavigator {
    fn attach_render_target(&self, target: Arc<dyn RenderTarget>) {
        *self.frame.write().unwrap_or_else(PoisonError::into_inner) = Some(target);
    }

    fn detach_render_target(&self) {
        *self.frame.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn try_navigate(&self, id: &str) -> Result<(), NavigationFailure> {
        let Some(frame) = self.frame() else {
            return self.fail(Some(id), NavigationFailure::NoRenderTarget);
        };
        let Some(page) = self.pages.get(id) else {
            return self.fail(Some(id), NavigationFailure::UnknownPage(id.to_string()));
        };

        let (from, depth) = {
            let mut state = self.state_mut();
            let from = state.current.replace(page.id.clone());
            if let Some(previous) = &from {
                state.history.push(previous.clone());
            }
            (from, state.history.len())
        };

        debug!(from = ?from, to = %page.id, depth, "navigate");
        frame.display_page(&page.page);
        self.emit(NavigationEvent::Navigated {
            from,
            to: page.id.clone(),
            direction: NavigationDirection::Forward,
        });
        Ok(())
    }

    fn try_go_back(&self) -> Result<(), NavigationFailure> {
        if !self.can_go_back() {
            return self.fail(None, NavigationFailure::EmptyHistory);
        }
        let Some(frame) = self.frame() else {
            return self.fail(None, NavigationFailure::NoRenderTarget);
        };

        let popped = {
            let mut state = self.state_mut();
            match state.history.pop() {
                Some(id) => match self.pages.get(&id) {
                    Some(page) => Ok((state.current.replace(id), page)),
                    None => Err(NavigationFailure::UnknownPage(id)),
                },
                None => Err(NavigationFailure::EmptyHistory),
            }
        };

        let (from, page) = match popped {
            Ok(found) => found,
            Err(NavigationFailure::UnknownPage(id)) => {
                return self.fail(Some(&id), NavigationFailure::UnknownPage(id.clone()));
            }
            Err(reason) => return self.fail(None, reason),
        };

        debug!(from = ?from, to = %page.id, "go back");
        frame.display_page(&page.page);
        self.emit(NavigationEvent::Navigated {
            from,
            to: page.id.clone(),
            direction: NavigationDirection::Back,
        });
        Ok(())
    }

    fn can_go_back(&self) -> bool {
        !self.state().history.is_empty()
    }

    fn current(&self) -> Option<PageMetadata> {
        let state = self.state();
        state
            .current
            .as_deref()
            .and_then(|id| self.pages.get(id))
            .cloned()
    }

    fn current_page_id(&self) -> Option<String> {
        self.state().current.clone()
    }

    fn history(&self) -> Vec<String> {
        self.state().history.to_vec()
    }

    fn page(&self, id: &str) -> Option<PageMetadata> {
        self.pages.get(id).cloned()
    }

    fn breadcrumbs(&self, id: &str) -> Vec<PageMetadata> {
        let mut trail = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut cursor = self.pages.get(id);

        while let Some(page) = cursor {
            if !seen.insert(page.id.as_str()) {
                warn!(id = %page.id, "parent cycle while building breadcrumbs");
                break;
            }
            trail.push(page.clone());
            cursor = page.parent_id.as_deref().and_then(|p| self.pages.get(p));
        }

        trail.reverse();
        trail
    }

    fn subscribe(&self, listener: NavigationListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.write().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(sub, _)| *sub != id);
        listeners.len() != before
    }

    fn connect(&self, menu: &dyn MenuSurface) {
        let me = self.me.clone();
        menu.on_selection_changed(Arc::new(move |id: &str| {
            let Some(service) = me.upgrade() else {
                return;
            };
            if service.current_page_id().as_deref() == Some(id) {
                return;
            }
            service.navigate(id);
        }));
    }
}

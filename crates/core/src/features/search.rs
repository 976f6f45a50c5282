//! Incremental text filter over the main menu section.

use std::sync::{Arc, Weak};
use tracing::debug;
use wayfinder_api::models::flatten_items;
use wayfinder_api::{
    MenuItem, MenuNode, MenuSurface, NavigationService, SearchInput, TextChangeReason,
};

/// Narrows the displayed main section to the items whose title contains the
/// typed text, and navigates to the first match when the query is submitted.
///
/// The canonical item list is never modified; filtering only replaces what the
/// menu surface shows. Matches are shown flat.
pub struct SearchOverlay {
    service: Arc<dyn NavigationService>,
    items: Vec<MenuNode>,
}

impl SearchOverlay {
    pub fn new(service: Arc<dyn NavigationService>, main_items: Vec<MenuNode>) -> Arc<Self> {
        Arc::new(Self {
            service,
            items: main_items,
        })
    }

    /// Items (nested ones included) whose title contains `query`, ignoring
    /// case. A blank query matches nothing.
    pub fn filter(&self, query: &str) -> Vec<&MenuItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        flatten_items(&self.items)
            .into_iter()
            .filter(|item| item.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn first_match(&self, query: &str) -> Option<&MenuItem> {
        self.filter(query).into_iter().next()
    }

    /// Install a search input on `menu` and wire it up. Returns `false` when
    /// the surface has no text input to offer.
    pub fn attach(self: &Arc<Self>, menu: &Arc<dyn MenuSurface>) -> bool {
        let Some(input) = menu.install_search_input() else {
            debug!("menu surface has no search input");
            return false;
        };

        let menu_ref = Arc::downgrade(menu);
        let input_ref = Arc::downgrade(&input);

        let overlay = Arc::clone(self);
        let (menu_weak, input_weak) = (menu_ref.clone(), input_ref.clone());
        input.on_text_changed(Arc::new(move |text: &str, reason: TextChangeReason| {
            if reason != TextChangeReason::UserInput {
                return;
            }
            if let Some((menu, input)) = upgrade(&menu_weak, &input_weak) {
                overlay.on_text_changed(menu.as_ref(), input.as_ref(), text);
            }
        }));

        let overlay = Arc::clone(self);
        input.on_query_submitted(Arc::new(move |query: &str| {
            if let Some((menu, input)) = upgrade(&menu_ref, &input_ref) {
                overlay.on_query_submitted(menu.as_ref(), input.as_ref(), query);
            }
        }));

        true
    }

    fn on_text_changed(&self, menu: &dyn MenuSurface, input: &dyn SearchInput, text: &str) {
        if text.trim().is_empty() {
            menu.set_main_items(self.items.clone());
            input.set_suggestions(Vec::new());
            return;
        }

        let matches = self.filter(text);
        debug!(query = %text, matches = matches.len(), "menu filtered");
        input.set_suggestions(matches.iter().map(|item| item.title.clone()).collect());
        menu.set_main_items(
            matches
                .into_iter()
                .map(|item| MenuNode::Item(item.without_children()))
                .collect(),
        );
    }

    fn on_query_submitted(&self, menu: &dyn MenuSurface, input: &dyn SearchInput, query: &str) {
        let Some(id) = self.first_match(query).map(|item| item.id.clone()) else {
            debug!(query = %query, "no page matches submitted query");
            return;
        };

        input.set_suggestions(Vec::new());
        input.set_text("");
        menu.set_main_items(self.items.clone());
        self.service.navigate(&id);
    }
}

fn upgrade(
    menu: &Weak<dyn MenuSurface>,
    input: &Weak<dyn SearchInput>,
) -> Option<(Arc<dyn MenuSurface>, Arc<dyn SearchInput>)> {
    Some((menu.upgrade()?, input.upgrade()?))
}

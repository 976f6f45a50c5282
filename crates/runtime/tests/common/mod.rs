#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use wayfinder_api::{
    MenuNode, MenuSurface, PageHandle, QuerySubmittedHandler, RenderTarget, SearchInput,
    SelectionHandler, TextChangeReason, TextChangedHandler,
};

/// Page ids of everything the registry put on screen, in order.
#[derive(Default)]
pub struct RecordingFrame {
    shown: Mutex<Vec<String>>,
}

impl RecordingFrame {
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl RenderTarget for RecordingFrame {
    fn display_page(&self, page: &PageHandle) {
        let id = page.downcast_ref::<String>().cloned().unwrap_or_default();
        self.shown.lock().unwrap().push(id);
    }
}

#[derive(Default)]
pub struct FakeSearchBox {
    text: Mutex<String>,
    suggestions: Mutex<Vec<String>>,
    changed: Mutex<Vec<TextChangedHandler>>,
    submitted: Mutex<Vec<QuerySubmittedHandler>>,
}

impl FakeSearchBox {
    pub fn type_text(&self, text: &str) {
        self.change(text, TextChangeReason::UserInput);
    }

    pub fn submit(&self) {
        let query = self.text();
        let handlers = self.submitted.lock().unwrap().clone();
        for handler in handlers {
            handler(&query);
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.suggestions.lock().unwrap().clone()
    }

    fn change(&self, text: &str, reason: TextChangeReason) {
        *self.text.lock().unwrap() = text.to_string();
        let handlers = self.changed.lock().unwrap().clone();
        for handler in handlers {
            handler(text, reason);
        }
    }
}

impl SearchInput for FakeSearchBox {
    fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn set_text(&self, text: &str) {
        self.change(text, TextChangeReason::ProgrammaticChange);
    }

    fn set_suggestions(&self, suggestions: Vec<String>) {
        *self.suggestions.lock().unwrap() = suggestions;
    }

    fn on_text_changed(&self, handler: TextChangedHandler) {
        self.changed.lock().unwrap().push(handler);
    }

    fn on_query_submitted(&self, handler: QuerySubmittedHandler) {
        self.submitted.lock().unwrap().push(handler);
    }
}

/// Menu surface recording what the registry binds to it.
///
/// By default moving the selection programmatically raises a selection change,
/// like a list control. A quiet menu only moves the highlight.
#[derive(Default)]
pub struct FakeMenu {
    pub main: Mutex<Vec<MenuNode>>,
    pub footer: Mutex<Vec<MenuNode>>,
    selected: Mutex<Option<String>>,
    search: Mutex<Option<Arc<FakeSearchBox>>>,
    handlers: Mutex<Vec<SelectionHandler>>,
    quiet: bool,
}

impl FakeMenu {
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    /// The user clicks the item `id`.
    pub fn select(&self, id: &str) {
        *self.selected.lock().unwrap() = Some(id.to_string());
        let handlers = self.handlers.lock().unwrap().clone();
        for handler in handlers {
            handler(id);
        }
    }

    pub fn selected(&self) -> Option<String> {
        self.selected.lock().unwrap().clone()
    }

    pub fn main_titles(&self) -> Vec<String> {
        self.main
            .lock()
            .unwrap()
            .iter()
            .filter_map(MenuNode::as_item)
            .map(|item| item.title.clone())
            .collect()
    }

    pub fn search_box(&self) -> Option<Arc<FakeSearchBox>> {
        self.search.lock().unwrap().clone()
    }
}

impl MenuSurface for FakeMenu {
    fn set_main_items(&self, items: Vec<MenuNode>) {
        *self.main.lock().unwrap() = items;
    }

    fn set_footer_items(&self, items: Vec<MenuNode>) {
        *self.footer.lock().unwrap() = items;
    }

    fn on_selection_changed(&self, handler: SelectionHandler) {
        self.handlers.lock().unwrap().push(handler);
    }

    fn set_selected_item(&self, id: &str) {
        if self.quiet {
            *self.selected.lock().unwrap() = Some(id.to_string());
        } else {
            self.select(id);
        }
    }

    fn install_search_input(&self) -> Option<Arc<dyn SearchInput>> {
        let search = Arc::new(FakeSearchBox::default());
        *self.search.lock().unwrap() = Some(search.clone());
        Some(search)
    }
}

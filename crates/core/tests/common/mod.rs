#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use wayfinder_api::{
    MenuNode, MenuSurface, PageAnnotation, PageHandle, PageMetadata, QuerySubmittedHandler,
    RenderTarget, SearchInput, SelectionHandler, TextChangeReason, TextChangedHandler,
};

pub fn page(annotation: PageAnnotation) -> PageMetadata {
    let id = annotation.id.clone();
    PageMetadata::from_annotation(annotation, PageHandle::new(id))
}

/// Remembers every page it was asked to display, by id.
#[derive(Default)]
pub struct RecordingFrame {
    pub shown: Mutex<Vec<String>>,
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
    pub text: Mutex<String>,
    pub suggestions: Mutex<Vec<String>>,
    changed: Mutex<Vec<TextChangedHandler>>,
    submitted: Mutex<Vec<QuerySubmittedHandler>>,
}

impl FakeSearchBox {
    /// Simulate the user typing `text` into the box.
    pub fn type_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
        let handlers = self.changed.lock().unwrap().clone();
        for handler in handlers {
            handler(text, TextChangeReason::UserInput);
        }
    }

    pub fn submit(&self) {
        let query = self.text.lock().unwrap().clone();
        let handlers = self.submitted.lock().unwrap().clone();
        for handler in handlers {
            handler(&query);
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        self.suggestions.lock().unwrap().clone()
    }
}

impl SearchInput for FakeSearchBox {
    fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    fn set_text(&self, text: &str) {
        *self.text.lock().unwrap() = text.to_string();
        let handlers = self.changed.lock().unwrap().clone();
        for handler in handlers {
            handler(text, TextChangeReason::ProgrammaticChange);
        }
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

/// Menu surface that behaves like a list control: moving the selection
/// raises a selection change.
#[derive(Default)]
pub struct FakeMenu {
    pub main: Mutex<Vec<MenuNode>>,
    pub footer: Mutex<Vec<MenuNode>>,
    pub selected: Mutex<Option<String>>,
    pub search: Mutex<Option<Arc<FakeSearchBox>>>,
    pub without_search: bool,
    pub handlers: Mutex<Vec<SelectionHandler>>,
}

impl FakeMenu {
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
        self.select(id);
    }

    fn install_search_input(&self) -> Option<Arc<dyn SearchInput>> {
        if self.without_search {
            return None;
        }
        let search = Arc::new(FakeSearchBox::default());
        *self.search.lock().unwrap() = Some(search.clone());
        Some(search)
    }
}

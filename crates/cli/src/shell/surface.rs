//! Terminal stand-ins for the host collaborators: a frame that prints the page
//! it shows, a list-style menu, and the menu's search box.

use nu_ansi_term::Color;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use wayfinder_api::{
    MenuNode, MenuSurface, PageHandle, QuerySubmittedHandler, RenderTarget, SearchInput,
    SelectionHandler, TextChangeReason, TextChangedHandler,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Lines produced by callbacks while a command runs, printed after it.
#[derive(Default)]
pub struct Transcript {
    lines: Mutex<Vec<String>>,
}

impl Transcript {
    pub fn push(&self, line: impl Into<String>) {
        lock(&self.lines).push(line.into());
    }

    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.lines))
    }
}

pub struct TerminalFrame {
    transcript: Arc<Transcript>,
    shown: Mutex<Option<String>>,
}

impl TerminalFrame {
    pub fn new(transcript: Arc<Transcript>) -> Self {
        Self {
            transcript,
            shown: Mutex::new(None),
        }
    }

    /// Content of the page on screen.
    pub fn shown(&self) -> Option<String> {
        lock(&self.shown).clone()
    }
}

impl RenderTarget for TerminalFrame {
    fn display_page(&self, page: &PageHandle) {
        let content = page
            .downcast_ref::<String>()
            .cloned()
            .unwrap_or_else(|| format!("<{}>", page.type_name()));
        self.transcript
            .push(format!("{} {}", Color::LightBlue.bold().paint("│"), content));
        *lock(&self.shown) = Some(content);
    }
}

/// Menu surface with list-control semantics: changing the selection raises
/// a selection change, re-selecting the selected item does not.
#[derive(Default)]
pub struct TerminalMenu {
    main: Mutex<Vec<MenuNode>>,
    footer: Mutex<Vec<MenuNode>>,
    selected: Mutex<Option<String>>,
    handlers: Mutex<Vec<SelectionHandler>>,
    search: Mutex<Option<Arc<TerminalSearchBox>>>,
}

impl TerminalMenu {
    pub fn main(&self) -> Vec<MenuNode> {
        lock(&self.main).clone()
    }

    pub fn footer(&self) -> Vec<MenuNode> {
        lock(&self.footer).clone()
    }

    pub fn selected(&self) -> Option<String> {
        lock(&self.selected).clone()
    }

    pub fn search_box(&self) -> Option<Arc<TerminalSearchBox>> {
        lock(&self.search).clone()
    }

    /// The user picks the item `id`.
    pub fn select(&self, id: &str) {
        {
            let mut selected = lock(&self.selected);
            if selected.as_deref() == Some(id) {
                return;
            }
            *selected = Some(id.to_string());
        }
        let handlers = lock(&self.handlers).clone();
        for handler in handlers {
            handler(id);
        }
    }
}

impl MenuSurface for TerminalMenu {
    fn set_main_items(&self, items: Vec<MenuNode>) {
        *lock(&self.main) = items;
    }

    fn set_footer_items(&self, items: Vec<MenuNode>) {
        *lock(&self.footer) = items;
    }

    fn on_selection_changed(&self, handler: SelectionHandler) {
        lock(&self.handlers).push(handler);
    }

    fn set_selected_item(&self, id: &str) {
        self.select(id);
    }

    fn install_search_input(&self) -> Option<Arc<dyn SearchInput>> {
        let search = Arc::new(TerminalSearchBox::default());
        *lock(&self.search) = Some(search.clone());
        Some(search)
    }
}

#[derive(Default)]
pub struct TerminalSearchBox {
    text: Mutex<String>,
    suggestions: Mutex<Vec<String>>,
    changed: Mutex<Vec<TextChangedHandler>>,
    submitted: Mutex<Vec<QuerySubmittedHandler>>,
}

impl TerminalSearchBox {
    pub fn type_text(&self, text: &str) {
        self.replace_text(text, TextChangeReason::UserInput);
    }

    pub fn submit(&self) {
        let query = self.text();
        let handlers = lock(&self.submitted).clone();
        for handler in handlers {
            handler(&query);
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        lock(&self.suggestions).clone()
    }

    fn replace_text(&self, text: &str, reason: TextChangeReason) {
        *lock(&self.text) = text.to_string();
        let handlers = lock(&self.changed).clone();
        for handler in handlers {
            handler(text, reason);
        }
    }
}

impl SearchInput for TerminalSearchBox {
    fn text(&self) -> String {
        lock(&self.text).clone()
    }

    fn set_text(&self, text: &str) {
        self.replace_text(text, TextChangeReason::ProgrammaticChange);
    }

    fn set_suggestions(&self, suggestions: Vec<String>) {
        *lock(&self.suggestions) = suggestions;
    }

    fn on_text_changed(&self, handler: TextChangedHandler) {
        lock(&self.changed).push(handler);
    }

    fn on_query_submitted(&self, handler: QuerySubmittedHandler) {
        lock(&self.submitted).push(handler);
    }
}

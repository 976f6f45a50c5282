//! Boundary traits for the host-side collaborators: the surface that renders
//! pages, the menu that displays built items, and its search box.

use crate::models::{MenuNode, PageHandle};
use std::sync::Arc;

/// Displays pages. The handle is passed through untouched.
pub trait RenderTarget: Send + Sync {
    fn display_page(&self, page: &PageHandle);
}

/// Called with the id of the menu item the user selected.
pub type SelectionHandler = Arc<dyn Fn(&str) + Send + Sync>;

pub type TextChangedHandler = Arc<dyn Fn(&str, TextChangeReason) + Send + Sync>;

pub type QuerySubmittedHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Where a text change on a search input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChangeReason {
    UserInput,
    ProgrammaticChange,
    SuggestionChosen,
}

pub trait MenuSurface: Send + Sync {
    fn set_main_items(&self, items: Vec<MenuNode>);

    fn set_footer_items(&self, items: Vec<MenuNode>);

    fn on_selection_changed(&self, handler: SelectionHandler);

    /// Move the visual selection to `id`. Surfaces may raise their usual
    /// selection change in response.
    fn set_selected_item(&self, id: &str);

    /// Put a search input on the surface. `None` when the surface has no
    /// text input, in which case search stays off. The surface owns the
    /// returned input; callers only hold it weakly.
    fn install_search_input(&self) -> Option<Arc<dyn SearchInput>>;
}

pub trait SearchInput: Send + Sync {
    fn text(&self) -> String;

    /// Programmatic assignment; reported to handlers as
    /// [`TextChangeReason::ProgrammaticChange`].
    fn set_text(&self, text: &str);

    fn set_suggestions(&self, suggestions: Vec<String>);

    fn on_text_changed(&self, handler: TextChangedHandler);

    fn on_query_submitted(&self, handler: QuerySubmittedHandler);
}

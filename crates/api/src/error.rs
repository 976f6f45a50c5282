/// Problems with the page catalog itself. These indicate a broken set of page
/// declarations and are reported before any navigation happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate page id '{id}' declared in '{first}' and '{second}'")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
    #[error("parent chain forms a cycle: {}", ids.join(" -> "))]
    ParentCycle { ids: Vec<String> },
    #[error("page '{id}' in '{module}' is annotated but is not a navigable page")]
    IneligiblePage { id: String, module: String },
}

/// Reasons a navigation request did not change the current page.
///
/// `navigate` and `go_back` absorb these; they surface only through
/// `NavigationEvent::Failed` and the `try_*` variants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationFailure {
    #[error("no render target attached")]
    NoRenderTarget,
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("back-history is empty")]
    EmptyHistory,
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

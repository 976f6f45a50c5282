pub mod error;
pub mod models;
pub mod navigation;
pub mod options;
pub mod source;
pub mod surface;

// Re-export commonly used types
pub use error::{CatalogError, NavigationFailure};
pub use models::*;
pub use navigation::{
    NavigationDirection, NavigationEvent, NavigationListener, NavigationService, SubscriptionId,
};
pub use options::NavigationOptions;
pub use source::PageSource;
pub use surface::{
    MenuSurface, QuerySubmittedHandler, RenderTarget, SearchInput, SelectionHandler,
    TextChangeReason, TextChangedHandler,
};

pub mod catalog;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod navigation;

pub use catalog::{PageCatalog, PageManifest};
pub use error::Result;
pub use features::{MenuBuilder, SearchOverlay, discover};
pub use navigation::PageNavigator;

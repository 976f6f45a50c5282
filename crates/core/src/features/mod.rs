pub mod builder;
pub mod discovery;
pub mod search;

pub use builder::MenuBuilder;
pub use discovery::discover;
pub use search::SearchOverlay;

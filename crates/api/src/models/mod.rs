pub mod icon;
pub mod menu;
pub mod page;

pub use icon::*;
pub use menu::*;
pub use page::*;

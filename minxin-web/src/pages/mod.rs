pub mod catalog;
pub mod layout;

pub use catalog::Catalog;
pub use layout::PageChrome;

//! Shared UI components

pub mod book_card;
pub mod dark_mode;
pub mod detail_modal;
pub mod export_button;
pub mod fade_in_image;
pub mod genre_row;
pub mod heart_button;
pub mod icons;
pub mod modal;
pub mod platform_select;
pub mod scroll_top;

pub use book_card::{BookCard, MinxinBadge};
pub use dark_mode::DarkModeToggle;
pub use detail_modal::BookDetailView;
pub use export_button::ExportFavoritesButton;
pub use fade_in_image::FadeInImage;
pub use genre_row::GenreRow;
pub use heart_button::HeartButton;
pub use icons::{ArrowUpIcon, DownloadIcon, HeartIcon, XIcon};
pub use modal::Modal;
pub use platform_select::PlatformSelect;
pub use scroll_top::ScrollTopButton;

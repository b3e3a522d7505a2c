mod card_item;
mod detail;
mod grid_row;
mod intro;

pub use card_item::GalleryCardItem;
pub use detail::GalleryCardDetail;
pub use grid_row::GalleryGridRow;
pub use intro::GalleryIntro;

mod card_preview;
mod field;
mod locale_switcher;
mod modal;
mod share_modal;
mod toggle_chip;

pub mod gallery;

pub use card_preview::CardPreview;
pub use field::{Field, TextArea};
pub use locale_switcher::LocaleSwitcher;
pub use modal::CommonModal;
pub use share_modal::ShareCardModal;
pub use toggle_chip::ToggleChip;

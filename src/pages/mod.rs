mod gallery;
mod home;

pub use gallery::Gallery;
pub use home::Home;

mod desktop;
mod home;
mod journal;
mod not_found;

pub use desktop::DesktopPage;
pub use home::HomePage;
pub use journal::JournalPage;
pub use not_found::NotFoundPage;

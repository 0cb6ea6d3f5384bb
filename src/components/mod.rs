mod counter_grid;
mod gallery;
mod hero;
mod love_note;
mod media;
mod music_toggle;
mod nav_bar;
mod secret_modal;
mod taskbar;
mod window;

pub use counter_grid::CounterGrid;
pub use gallery::Gallery;
pub use hero::Hero;
pub use love_note::LoveNote;
pub use media::{PlaylistEmbed, ShortVideoEmbed};
pub use music_toggle::MusicToggle;
pub use nav_bar::NavBar;
pub use secret_modal::{SecretHeart, SecretModal};
pub use taskbar::Taskbar;
pub use window::Window;

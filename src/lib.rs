// Pedantic: suppress noise for internal crate code.
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod background;
pub mod card;
pub mod color;
pub mod config;
pub mod format;
pub mod github;
pub mod i18n;
pub mod streak;
pub mod theme;
pub mod types;

pub use card::{CardOptions, generate_card, generate_theme_preview};
pub use types::StreakCardData;

//! PassForm: a single-screen random password generator.
//!
//! The library holds everything that does not need a window: character
//! classes, the generator itself, form validation and persisted settings.
//! The `passform` binary wraps it in an eframe/egui window.

pub mod charset;
pub mod error;
pub mod form;
pub mod manager;
pub mod password;
pub mod settings;

pub use charset::{CharacterClass, CharacterClassSelection};
pub use error::{GenerateError, LengthInputError, SettingsError};
pub use password::{GeneratedPassword, LengthBounds, PasswordRequest, generate};

//! Form state for the generator screen.
//!
//! Holds everything the window shows (raw length text, class toggles, the
//! last result or error) without depending on egui, so the submit / reset
//! flow can be exercised directly.

use log::info;
use zeroize::Zeroize;

use crate::charset::{CharacterClass, CharacterClassSelection};
use crate::error::LengthInputError;
use crate::password::{GeneratedPassword, LengthBounds, estimate_entropy, generate_with_bounds};

/// Parses the length field the way the form validates it.
pub fn validate_length_input(
    raw_input: &str,
    bounds: LengthBounds,
) -> Result<usize, LengthInputError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(LengthInputError::Required);
    }
    let length: usize = trimmed.parse().map_err(|_| LengthInputError::NotANumber)?;
    if length < bounds.min() {
        return Err(LengthInputError::TooShort { min: bounds.min() });
    }
    if length > bounds.max() {
        return Err(LengthInputError::TooLong { max: bounds.max() });
    }
    Ok(length)
}

pub struct PasswordForm {
    pub length_input: String,
    pub selection: CharacterClassSelection,
    /// Set once the user has edited the length field
    pub touched: bool,
    bounds: LengthBounds,
    default_selection: CharacterClassSelection,
    generated: Option<GeneratedPassword>,
    // Alphabet size the current result was drawn from
    generated_alphabet: usize,
    error: Option<String>,
}

impl Default for PasswordForm {
    fn default() -> Self {
        Self::new(LengthBounds::default(), CharacterClassSelection::default())
    }
}

impl PasswordForm {
    pub fn new(bounds: LengthBounds, default_selection: CharacterClassSelection) -> Self {
        Self {
            length_input: String::new(),
            selection: default_selection,
            touched: false,
            bounds,
            default_selection,
            generated: None,
            generated_alphabet: 0,
            error: None,
        }
    }

    pub fn bounds(&self) -> LengthBounds {
        self.bounds
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.selection.toggle(class);
    }

    pub fn length(&self) -> Result<usize, LengthInputError> {
        validate_length_input(&self.length_input, self.bounds)
    }

    /// Inline message under the length field, hidden until the field is touched.
    pub fn length_error(&self) -> Option<LengthInputError> {
        if !self.touched {
            return None;
        }
        self.length().err()
    }

    /// Generate is only offered when the form would succeed.
    pub fn is_valid(&self) -> bool {
        self.length().is_ok() && !self.selection.is_empty()
    }

    /// Validates the form and generates a password.
    ///
    /// On failure any previous result is dropped and the error message is
    /// kept for display.
    pub fn submit(&mut self) -> Option<&GeneratedPassword> {
        self.touched = true;
        self.generated = None;
        self.error = None;

        let length = match self.length() {
            Ok(length) => length,
            Err(e) => {
                self.error = Some(e.to_string());
                return None;
            }
        };

        match generate_with_bounds(length, &self.selection, self.bounds) {
            Ok(pwd) => {
                info!("Password generated ({} chars)", pwd.len());
                self.generated = Some(pwd);
                self.generated_alphabet = self.selection.alphabet_size();
                self.generated.as_ref()
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Back to the initial state: empty input, default toggles, no result.
    pub fn reset(&mut self) {
        self.length_input.zeroize();
        self.selection = self.default_selection;
        self.touched = false;
        self.generated = None;
        self.error = None;
    }

    pub fn generated(&self) -> Option<&GeneratedPassword> {
        self.generated.as_ref()
    }

    /// Entropy in bits of the current result, 0.0 when there is none.
    pub fn generated_entropy(&self) -> f64 {
        match &self.generated {
            Some(pwd) => estimate_entropy(pwd.len(), self.generated_alphabet),
            None => 0.0,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

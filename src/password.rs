use std::fmt;

use log::debug;
use rand::Rng;
use zeroize::Zeroize;

use crate::charset::CharacterClassSelection;
use crate::error::GenerateError;

/// Shortest length the form accepts by default
pub const DEFAULT_MIN_LENGTH: usize = 4;
/// Longest length the form accepts by default
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Inclusive range of accepted password lengths.
///
/// `min` is always at least 1 and never greater than `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl Default for LengthBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_LENGTH,
            max: DEFAULT_MAX_LENGTH,
        }
    }
}

impl LengthBounds {
    /// Builds bounds, raising `min` to 1 and `max` to `min` when needed.
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(1);
        Self {
            min,
            max: max.max(min),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    fn check(&self, length: usize) -> Result<(), GenerateError> {
        if self.contains(length) {
            Ok(())
        } else {
            Err(GenerateError::InvalidLength {
                length,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// A length plus the classes to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub selection: CharacterClassSelection,
}

impl PasswordRequest {
    pub fn new(length: usize, selection: CharacterClassSelection) -> Self {
        Self { length, selection }
    }

    pub fn generate(&self, bounds: LengthBounds) -> Result<GeneratedPassword, GenerateError> {
        generate_with_bounds(self.length, &self.selection, bounds)
    }
}

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (every alphabet character is ASCII).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars redacted>)", self.0.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Generates a password of `length` characters from the enabled classes,
/// using the default 4..=10 length bounds.
pub fn generate(
    length: usize,
    selection: &CharacterClassSelection,
) -> Result<GeneratedPassword, GenerateError> {
    generate_with_bounds(length, selection, LengthBounds::default())
}

/// Same as [`generate`] with caller-supplied length bounds.
pub fn generate_with_bounds(
    length: usize,
    selection: &CharacterClassSelection,
    bounds: LengthBounds,
) -> Result<GeneratedPassword, GenerateError> {
    generate_with_rng(length, selection, bounds, &mut rand::rng())
}

/// Core generator. Each position is drawn independently and uniformly from
/// the alphabet, with replacement.
pub fn generate_with_rng<R: Rng>(
    length: usize,
    selection: &CharacterClassSelection,
    bounds: LengthBounds,
    rng: &mut R,
) -> Result<GeneratedPassword, GenerateError> {
    bounds.check(length)?;

    let chars = selection.alphabet();
    if chars.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let password: String = (0..length)
        .map(|_| chars[rng.random_range(0..chars.len())])
        .collect();
    debug!(
        "Generated {}-character password from a {}-character alphabet",
        length,
        chars.len()
    );

    Ok(GeneratedPassword(password))
}

/// Entropy in bits of a uniformly random password: `length * log2(alphabet_size)`.
pub fn estimate_entropy(length: usize, alphabet_size: usize) -> f64 {
    if length == 0 || alphabet_size == 0 {
        return 0.0;
    }
    length as f64 * (alphabet_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    if bits < 40.0 {
        "Weak"
    } else if bits < 60.0 {
        "Fair"
    } else if bits < 80.0 {
        "Strong"
    } else {
        "Very strong"
    }
}

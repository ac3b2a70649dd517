//! Character classes and alphabet composition.

use serde::{Deserialize, Serialize};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+";

/// A named set of literal characters that can be included in the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Canonical order used when composing the alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Checkbox label shown in the form
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Include UpperCase",
            CharacterClass::Lowercase => "Include LowerCase",
            CharacterClass::Digits => "Include Numbers",
            CharacterClass::Symbols => "Include Symbols",
        }
    }
}

/// Which character classes are enabled.
///
/// Defaults to lowercase only. Missing fields take their default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterClassSelection {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for CharacterClassSelection {
    fn default() -> Self {
        Self {
            uppercase: false,
            lowercase: true,
            digits: false,
            symbols: false,
        }
    }
}

impl CharacterClassSelection {
    /// Every class enabled.
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    /// No class enabled. Generating from this selection always fails.
    pub fn none() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn flag_mut(&mut self, class: CharacterClass) -> &mut bool {
        match class {
            CharacterClass::Uppercase => &mut self.uppercase,
            CharacterClass::Lowercase => &mut self.lowercase,
            CharacterClass::Digits => &mut self.digits,
            CharacterClass::Symbols => &mut self.symbols,
        }
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        let flag = self.flag_mut(class);
        *flag = !*flag;
    }

    /// Enabled classes, in canonical order.
    pub fn enabled(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |c| self.is_enabled(*c))
    }

    pub fn is_empty(&self) -> bool {
        self.enabled().next().is_none()
    }

    /// Concatenate the literal sets of every enabled class.
    pub fn alphabet(&self) -> Vec<char> {
        let mut chars = Vec::with_capacity(self.alphabet_size());
        for class in self.enabled() {
            chars.extend(class.chars().chars());
        }
        chars
    }

    /// Number of characters in the alphabet (for entropy calculation).
    pub fn alphabet_size(&self) -> usize {
        self.enabled().map(|c| c.chars().len()).sum()
    }

    /// Whether `ch` belongs to one of the enabled classes.
    pub fn contains(&self, ch: char) -> bool {
        self.enabled().any(|c| c.chars().contains(ch))
    }
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lowercase_only() {
        let sel = CharacterClassSelection::default();
        assert!(sel.lowercase);
        assert!(!sel.uppercase);
        assert!(!sel.digits);
        assert!(!sel.symbols);
        assert_eq!(sel.alphabet_size(), 26);
    }

    #[test]
    fn test_alphabet_canonical_order() {
        let alphabet: String = CharacterClassSelection::all()
            .alphabet()
            .into_iter()
            .collect();
        assert_eq!(
            alphabet,
            "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+"
        );
    }

    #[test]
    fn test_alphabet_skips_disabled_classes() {
        let sel = CharacterClassSelection {
            uppercase: false,
            lowercase: false,
            digits: true,
            symbols: true,
        };
        let alphabet: String = sel.alphabet().into_iter().collect();
        assert_eq!(alphabet, "0123456789!@#$%^&*()_+");
        assert_eq!(sel.alphabet_size(), 22);
    }

    #[test]
    fn test_empty_selection() {
        let sel = CharacterClassSelection::none();
        assert!(sel.is_empty());
        assert!(sel.alphabet().is_empty());
        assert_eq!(sel.alphabet_size(), 0);
    }

    #[test]
    fn test_toggle_flips_one_flag() {
        let mut sel = CharacterClassSelection::default();
        sel.toggle(CharacterClass::Symbols);
        assert!(sel.symbols);
        sel.toggle(CharacterClass::Lowercase);
        assert!(!sel.lowercase);
        assert_eq!(
            sel.enabled().collect::<Vec<_>>(),
            vec![CharacterClass::Symbols]
        );
    }

    #[test]
    fn test_contains() {
        let sel = CharacterClassSelection::default();
        assert!(sel.contains('q'));
        assert!(!sel.contains('Q'));
        assert!(!sel.contains('5'));
        assert!(CharacterClassSelection::all().contains('_'));
    }

    #[test]
    fn test_selection_serialization() {
        let sel = CharacterClassSelection {
            uppercase: true,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        let json = serde_json::to_string(&sel).unwrap();
        let restored: CharacterClassSelection = serde_json::from_str(&json).unwrap();
        assert_eq!(sel, restored);
    }

    #[test]
    fn test_partial_selection_json_keeps_defaults() {
        let json = r#"{"uppercase": true}"#;
        let sel: CharacterClassSelection = serde_json::from_str(json).unwrap();
        assert!(sel.uppercase);
        assert!(sel.lowercase);
        assert!(!sel.digits);
        assert!(!sel.symbols);
    }
}

use thiserror::Error;

/// Why a password could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("Invalid length {length}: must be between {min} and {max}")]
    InvalidLength {
        length: usize,
        min: usize,
        max: usize,
    },

    #[error("Select at least one character class")]
    EmptyAlphabet,
}

/// Validation failures for the raw length text in the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthInputError {
    #[error("Required")]
    Required,

    #[error("Must be a number")]
    NotANumber,

    #[error("Too Short!")]
    TooShort { min: usize },

    #[error("Too Long!")]
    TooLong { max: usize },
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

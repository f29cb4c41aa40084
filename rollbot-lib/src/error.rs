/// Crate Error type
///
/// Every variant is an input validation failure local to one command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Please enter some dice")]
    EmptyCommand,

    #[error("{0} is not a valid dice syntax")]
    InvalidDiceSyntax(String),

    #[error("{0} is not a valid integer")]
    InvalidInteger(String),

    #[error("Threshold value format error. Must be integer")]
    InvalidThreshold(String),

    #[error("Hit value format error. Must be integer")]
    InvalidHitValue(String),

    #[error("{0} contains a modifier, `!` and `>` may only follow the last term")]
    UnexpectedModifierPosition(String),

    #[error("{term} exceeds the max allowed amount of dice `{limit}`")]
    TooManyDice { term: String, limit: u64 },

    #[error("{0} overflows the integer range")]
    Overflow(String),
}

impl Error {
    /// Offending term or modifier suffix, if any
    pub fn term(&self) -> Option<&str> {
        match self {
            Self::EmptyCommand => None,
            Self::InvalidDiceSyntax(term)
            | Self::InvalidInteger(term)
            | Self::InvalidThreshold(term)
            | Self::InvalidHitValue(term)
            | Self::UnexpectedModifierPosition(term)
            | Self::TooManyDice { term, .. }
            | Self::Overflow(term) => Some(term),
        }
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;

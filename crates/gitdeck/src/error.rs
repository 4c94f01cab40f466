use std::fmt;

/// Errors raised while selecting or stepping through a deck.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck `{0}` has no slides")]
    Empty(String),

    #[error("unknown deck `{0}`. Must be one of: {names}.", names = crate::deck::DeckVariant::names())]
    UnknownVariant(String),
}

/// Errors reported by a fullscreen backend when a mode change is refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FullscreenError {
    #[error("fullscreen request denied: {0}")]
    Denied(String),

    #[error("fullscreen is not supported by this window")]
    Unsupported,
}

/// Errors produced when parsing diagram path data.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("path data must start with a move command, found `{0}`")]
    MissingMove(String),

    #[error("unknown path command `{0}`")]
    UnknownCommand(String),

    #[error("expected a number after `{command}`, found {found}")]
    ExpectedNumber { command: char, found: Found },
}

/// What the path tokenizer found where a number was expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Found {
    End,
    Token(String),
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => write!(f, "end of input"),
            Self::Token(t) => write!(f, "`{t}`"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            DeckError::UnknownVariant("mini".into()).to_string(),
            "unknown deck `mini`. Must be one of: full, visual."
        );
        let err = PathError::ExpectedNumber {
            command: 'C',
            found: Found::End,
        };
        assert_eq!(
            err.to_string(),
            "expected a number after `C`, found end of input"
        );
    }
}

use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;
use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Builds a diagnostic from an `Illegal` token. The lexer itself never
    /// fails; it is up to the caller to turn illegal tokens into errors.
    pub fn from_illegal(token: &Token) -> Self {
        let value = &token.value;

        // A malformed numeric literal spans several characters and starts
        // with a digit; any other illegal lexeme is a lone stray character.
        let internal_error = if value.len() > 1 {
            ErrorImpl::MalformedNumber {
                token: value.clone(),
            }
        } else {
            ErrorImpl::UnrecognisedToken {
                token: value.clone(),
            }
        };

        Error {
            internal_error,
            position: token.span.start.clone(),
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { token } => ErrorTip::Suggestion(format!(
                "Malformed number: `{}`, does it have more than one decimal point?",
                token
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("malformed number: {token:?}")]
    MalformedNumber { token: String },
}

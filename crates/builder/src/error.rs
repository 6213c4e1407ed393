use std::error::Error;
use std::fmt::{self, Display};

pub type SelectorResult<T> = Result<T, SelectorError>;

#[derive(Debug)]
pub struct SelectorError {
    kind: ErrorKind,
}

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An exclusive part (element, id, or pseudo-element) was appended a
    /// second time to the same selector
    Duplication,

    /// A part was appended after a part of a later rank
    Order,

    /// A token that is not one of the four combinators
    InvalidCombinator(String),

    /// `to_text` or `from_text` failed to serialize or parse
    Json(serde_json::Error),
}

impl SelectorError {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn duplication() -> Self {
        SelectorError {
            kind: ErrorKind::Duplication,
        }
    }

    pub(crate) fn order() -> Self {
        SelectorError {
            kind: ErrorKind::Order,
        }
    }

    pub(crate) fn invalid_combinator(token: &str) -> Self {
        SelectorError {
            kind: ErrorKind::InvalidCombinator(token.to_owned()),
        }
    }
}

impl Display for SelectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::Duplication => f.write_str(
                "Element, id and pseudo-element should not occur more then one time inside the selector",
            ),
            ErrorKind::Order => f.write_str(
                "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element",
            ),
            ErrorKind::InvalidCombinator(token) => write!(f, "Invalid combinator \"{}\"", token),
            ErrorKind::Json(error) => write!(f, "{}", error),
        }
    }
}

impl Error for SelectorError {}

impl From<serde_json::Error> for SelectorError {
    #[inline]
    fn from(error: serde_json::Error) -> SelectorError {
        SelectorError {
            kind: ErrorKind::Json(error),
        }
    }
}

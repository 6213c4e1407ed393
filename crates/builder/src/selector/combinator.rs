use std::fmt::{self, Display, Write};
use std::str::FromStr;

use crate::error::SelectorError;

/// A combinator joining two selectors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Combinator {
    /// Matches the right-hand selector if it's a descendant of the left-hand
    /// selector in the DOM tree.
    ///
    /// `' '`
    Descendant,

    /// Matches the right-hand selector if it's immediately adjacent to the
    /// left-hand selector in the DOM tree.
    ///
    /// `'+'`
    NextSibling,

    /// Matches the right-hand selector if it's a direct child of the left-hand
    /// selector in the DOM tree.
    ///
    /// `'>'`
    Child,

    /// Matches the right-hand selector if it comes after the left-hand selector
    /// in the DOM tree.
    ///
    /// `'~'`
    FollowingSibling,
}

impl Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match self {
            Self::Descendant => ' ',
            Self::NextSibling => '+',
            Self::Child => '>',
            Self::FollowingSibling => '~',
        })
    }
}

impl FromStr for Combinator {
    type Err = SelectorError;

    fn from_str(token: &str) -> Result<Combinator, Self::Err> {
        match token {
            " " => Ok(Self::Descendant),
            "+" => Ok(Self::NextSibling),
            ">" => Ok(Self::Child),
            "~" => Ok(Self::FollowingSibling),
            _ => Err(SelectorError::invalid_combinator(token)),
        }
    }
}

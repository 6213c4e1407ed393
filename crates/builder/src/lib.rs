/*!
This crate provides the internal implementation of `sedge`, a chainable
builder for compound [CSS selectors](https://www.w3.org/TR/selectors-4/).

A selector is assembled from discrete parts (type, id, class, attribute,
pseudo-class, pseudo-element) and from combinators that join sub-selectors.
Parts must be appended in the canonical order element, id, class, attribute,
pseudo-class, pseudo-element; element, id and pseudo-element may each occur
at most once per simple selector. Violating either rule fails the chain with
a [`SelectorError`](Error).

## Use as library
```
# use sedge_builder as sedge;
fn main() -> Result<(), sedge::Error> {
    let mut selector = sedge::Selector::new()
        .id("main")?
        .class("container")?
        .class("editable")?;
    assert_eq!(selector.stringify(), "#main.container.editable");
    Ok(())
}
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::new_without_default
)]

pub use crate::error::{ErrorKind, SelectorError as Error, SelectorResult as Result};
pub use crate::json::{from_text, to_text};
pub use crate::logger::{Logger, NullLogger, StdLogger};
pub use crate::options::Options;
pub use crate::rect::Rectangle;
pub use crate::selector::{Combinator, Selector};

mod common;
mod error;
mod json;
mod known;
mod logger;
mod options;
mod rect;
mod selector;

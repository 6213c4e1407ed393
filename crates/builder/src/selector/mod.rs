pub use builder::Selector;
pub use combinator::Combinator;
pub(crate) use part::{PartKind, SelectorPart};

mod builder;
mod combinator;
mod part;

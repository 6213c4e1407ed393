use std::fmt;

use crate::error::{SelectorError, SelectorResult};
use crate::known::{is_known_pseudo_class, is_known_pseudo_element};
use crate::options::Options;

use super::{Combinator, PartKind, SelectorPart};

/// An incrementally assembled compound selector.
///
/// Parts are appended through the chainable methods below and rendered with
/// [`Selector::stringify`]. Two structural rules are enforced on every append:
/// element, id and pseudo-element may occur at most once per simple selector,
/// and parts must arrive in the canonical order element, id, class, attribute,
/// pseudo-class, pseudo-element.
///
/// Every append consumes the selector and returns a new one, so an `Err`
/// leaves no partially-built value behind.
///
/// ```
/// # use sedge_builder as sedge;
/// fn main() -> Result<(), sedge::Error> {
///     let mut selector = sedge::Selector::new()
///         .element("a")?
///         .attr("href$=\".png\"")?
///         .pseudo_class("focus")?;
///     assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selector {
    /// The parts and combinators appended so far, in output order
    components: Vec<Component>,

    /// Rank of the most recently appended part.
    ///
    /// Appends may never regress below it; repeatable kinds may repeat at
    /// their own rank.
    last_kind: Option<PartKind>,

    has_type: bool,
    has_id: bool,
    has_pseudo_element: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Component {
    Part(SelectorPart),
    Combinator(Combinator),
}

impl Selector {
    pub fn new() -> Selector {
        Selector::default()
    }

    /// Appends a type selector, e.g. `div`.
    ///
    /// Errors with a duplication message if this selector already has a type
    /// part, and with an order message if any later-ranked part is present.
    pub fn element<S: Into<String>>(self, value: S) -> SelectorResult<Selector> {
        self.push(SelectorPart::Type(value.into()))
    }

    /// Appends an id selector, emitted with a leading `#`.
    ///
    /// At most one id may be present.
    pub fn id<S: Into<String>>(self, value: S) -> SelectorResult<Selector> {
        self.push(SelectorPart::Id(value.into()))
    }

    /// Appends a class selector, emitted with a leading `.`.
    ///
    /// May be called any number of times; each call appends another class in
    /// call order.
    pub fn class<S: Into<String>>(self, value: S) -> SelectorResult<Selector> {
        self.push(SelectorPart::Class(value.into()))
    }

    /// Appends an attribute selector.
    ///
    /// The raw attribute expression is emitted verbatim between brackets, so
    /// `attr("href$=\".png\"")` renders as `[href$=".png"]`. May be called any
    /// number of times.
    pub fn attr<S: Into<String>>(self, value: S) -> SelectorResult<Selector> {
        self.push(SelectorPart::Attribute(value.into()))
    }

    /// Appends a pseudo-class selector, emitted with a leading `:`.
    ///
    /// May be called any number of times.
    pub fn pseudo_class<S: Into<String>>(self, value: S) -> SelectorResult<Selector> {
        self.push(SelectorPart::PseudoClass(value.into()))
    }

    /// Appends a pseudo-element selector, emitted with a leading `::`.
    ///
    /// At most one pseudo-element may be present.
    pub fn pseudo_element<S: Into<String>>(self, value: S) -> SelectorResult<Selector> {
        self.push(SelectorPart::PseudoElement(value.into()))
    }

    fn push(mut self, part: SelectorPart) -> SelectorResult<Selector> {
        let kind = part.kind();

        if part.is_exclusive() && self.has_part(kind) {
            return Err(SelectorError::duplication());
        }

        match self.last_kind {
            Some(last) if last > kind => return Err(SelectorError::order()),
            _ => {}
        }

        match kind {
            PartKind::Type => self.has_type = true,
            PartKind::Id => self.has_id = true,
            PartKind::PseudoElement => self.has_pseudo_element = true,
            _ => {}
        }

        self.last_kind = Some(kind);
        self.components.push(Component::Part(part));
        Ok(self)
    }

    fn has_part(&self, kind: PartKind) -> bool {
        match kind {
            PartKind::Type => self.has_type,
            PartKind::Id => self.has_id,
            PartKind::PseudoElement => self.has_pseudo_element,
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => false,
        }
    }

    /// Joins `left` and `right` with `combinator`, producing a new selector.
    ///
    /// The combinator is emitted with a single space on each side. Note that
    /// [`Combinator::Descendant`] is itself a space, so it renders as three
    /// spaces in total.
    ///
    /// Combinators are not ranked parts: the combined selector starts with no
    /// presence flags and no rank high-water mark, and further parts may be
    /// appended to its right-hand end. The right operand may itself be a
    /// combined selector, nesting to arbitrary depth.
    pub fn combine(left: Selector, combinator: Combinator, right: Selector) -> Selector {
        let mut components = left.components;
        components.push(Component::Combinator(combinator));
        components.extend(right.components);
        Selector {
            components,
            ..Selector::default()
        }
    }

    /// Renders the accumulated selector and resets this instance to empty.
    ///
    /// This is a destructive read: a second call without intervening appends
    /// returns `""`, and the reset instance may be reused for a fresh
    /// selector. [`Selector`]'s `Display` implementation is the non-mutating
    /// projection of the same text.
    pub fn stringify(&mut self) -> String {
        let rendered = self.to_string();
        self.components.clear();
        self.last_kind = None;
        self.has_type = false;
        self.has_id = false;
        self.has_pseudo_element = false;
        rendered
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Warns through `options` about pseudo-class and pseudo-element names
    /// that are not defined by CSS.
    ///
    /// Functional arguments and vendor prefixes are stripped before lookup,
    /// so `nth-of-type(even)` and `-webkit-autofill` are both recognized.
    /// Linting never fails and does not affect rendering.
    pub fn lint(&self, options: &Options) {
        if options.quiet {
            return;
        }

        for component in &self.components {
            match component {
                Component::Part(SelectorPart::PseudoClass(name)) => {
                    if !is_known_pseudo_class(name) {
                        options
                            .logger
                            .warning(&format!("unknown pseudo-class \":{}\"", name));
                    }
                }
                Component::Part(SelectorPart::PseudoElement(name)) => {
                    if !is_known_pseudo_element(name) {
                        options
                            .logger
                            .warning(&format!("unknown pseudo-element \"::{}\"", name));
                    }
                }
                _ => {}
            }
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for component in &self.components {
            match component {
                Component::Part(part) => write!(f, "{}", part)?,
                Component::Combinator(combinator) => write!(f, " {} ", combinator)?,
            }
        }
        Ok(())
    }
}

use std::fmt;

/// A single part of a simple selector.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum SelectorPart {
    /// A type selector.
    ///
    /// This selects elements whose name equals the given name.
    Type(String),

    Id(String),

    /// A class selector.
    ///
    /// This selects elements whose `class` attribute contains an identifier
    /// with the given name.
    Class(String),

    /// An attribute selector.
    ///
    /// The attribute expression, e.g. `href$=".png"`, is emitted verbatim
    /// between brackets. No parsing of the expression is performed.
    Attribute(String),

    /// A pseudo-class selector, e.g. `:hover`.
    ///
    /// Functional pseudo-classes carry their argument as part of the name,
    /// e.g. `nth-of-type(even)`.
    PseudoClass(String),

    /// A pseudo-element selector, e.g. `::before`.
    PseudoElement(String),
}

/// The canonical position of a part-kind inside a simple selector.
///
/// Parts must be appended in non-decreasing `PartKind` order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub(crate) enum PartKind {
    Type,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl SelectorPart {
    pub fn kind(&self) -> PartKind {
        match self {
            Self::Type(..) => PartKind::Type,
            Self::Id(..) => PartKind::Id,
            Self::Class(..) => PartKind::Class,
            Self::Attribute(..) => PartKind::Attribute,
            Self::PseudoClass(..) => PartKind::PseudoClass,
            Self::PseudoElement(..) => PartKind::PseudoElement,
        }
    }

    /// Whether this part may occur at most once inside a simple selector
    pub fn is_exclusive(&self) -> bool {
        matches!(self, Self::Type(..) | Self::Id(..) | Self::PseudoElement(..))
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(name) => f.write_str(name),
            Self::Id(name) => write!(f, "#{}", name),
            Self::Class(name) => write!(f, ".{}", name),
            Self::Attribute(expr) => write!(f, "[{}]", expr),
            Self::PseudoClass(name) => write!(f, ":{}", name),
            Self::PseudoElement(name) => write!(f, "::{}", name),
        }
    }
}

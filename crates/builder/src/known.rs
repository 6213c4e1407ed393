use phf::phf_set;

use crate::common::{strip_argument, unvendor};

/// Pseudo-classes defined by the CSS selectors specifications.
///
/// Functional names appear without their argument.
static PSEUDO_CLASSES: phf::Set<&'static str> = phf_set! {
    "active",
    "any-link",
    "autofill",
    "blank",
    "checked",
    "current",
    "default",
    "defined",
    "dir",
    "disabled",
    "empty",
    "enabled",
    "first",
    "first-child",
    "first-of-type",
    "focus",
    "focus-visible",
    "focus-within",
    "fullscreen",
    "future",
    "has",
    "host",
    "host-context",
    "hover",
    "in-range",
    "indeterminate",
    "invalid",
    "is",
    "lang",
    "last-child",
    "last-of-type",
    "left",
    "link",
    "local-link",
    "modal",
    "not",
    "nth-child",
    "nth-last-child",
    "nth-last-of-type",
    "nth-of-type",
    "only-child",
    "only-of-type",
    "optional",
    "out-of-range",
    "past",
    "paused",
    "picture-in-picture",
    "placeholder-shown",
    "playing",
    "read-only",
    "read-write",
    "required",
    "right",
    "root",
    "scope",
    "target",
    "target-within",
    "user-invalid",
    "user-valid",
    "valid",
    "visited",
    "where",
};

/// Pseudo-elements defined by the CSS pseudo-elements specification.
static PSEUDO_ELEMENTS: phf::Set<&'static str> = phf_set! {
    "after",
    "backdrop",
    "before",
    "cue",
    "cue-region",
    "file-selector-button",
    "first-letter",
    "first-line",
    "grammar-error",
    "highlight",
    "marker",
    "part",
    "placeholder",
    "selection",
    "slotted",
    "spelling-error",
    "target-text",
};

pub(crate) fn is_known_pseudo_class(name: &str) -> bool {
    PSEUDO_CLASSES.contains(unvendor(strip_argument(name)))
}

pub(crate) fn is_known_pseudo_element(name: &str) -> bool {
    PSEUDO_ELEMENTS.contains(unvendor(strip_argument(name)))
}

/*!
This crate provides a chainable builder for assembling compound
[CSS selectors](https://www.w3.org/TR/selectors-4/) as text.

Selector parts must be appended in the canonical order element, id, class,
attribute, pseudo-class, pseudo-element. Element, id and pseudo-element may
each occur at most once per simple selector. Violating either rule fails the
chain with a [`SelectorError`](Error), so malformed selectors are rejected at
construction time instead of surfacing downstream.

Sub-selectors are joined with [`Selector::combine`] and one of the four
[`Combinator`]s; the right operand may itself be a combined selector, nesting
to arbitrary depth.

## Use as library
```
fn main() -> Result<(), sedge::Error> {
    let mut selector = sedge::Selector::new()
        .element("a")?
        .attr("href$=\".png\"")?
        .pseudo_class("focus")?;
    assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
    Ok(())
}
```

## Use as binary
```bash
cargo install sedge
sedge -e a -a 'href$=".png"' -p focus
```
*/

#![warn(clippy::all, clippy::cargo, clippy::dbg_macro)]
#![deny(missing_debug_implementations)]
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions
)]

pub use sedge_builder::*;

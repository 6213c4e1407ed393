use serde::{de::DeserializeOwned, Serialize};

use crate::error::SelectorResult;

/// Serializes `value` to its canonical JSON text.
///
/// Object keys are emitted in insertion order.
///
/// ```
/// # use sedge_builder as sedge;
/// fn main() -> Result<(), sedge::Error> {
///     let text = sedge::to_text(&sedge::Rectangle::new(10.0, 20.0))?;
///     assert_eq!(text, "{\"width\":10.0,\"height\":20.0}");
///     Ok(())
/// }
/// ```
pub fn to_text<T: Serialize>(value: &T) -> SelectorResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Parses `text` as JSON into a `T`.
///
/// The parsed fields are moved into the target type directly, so the result
/// carries `T`'s behavior without any intermediate untyped object.
///
/// ```
/// # use sedge_builder as sedge;
/// fn main() -> Result<(), sedge::Error> {
///     let rect: sedge::Rectangle = sedge::from_text("{\"width\":10.0,\"height\":20.0}")?;
///     assert_eq!(rect.area(), 200.0);
///     Ok(())
/// }
/// ```
pub fn from_text<T: DeserializeOwned>(text: &str) -> SelectorResult<T> {
    Ok(serde_json::from_str(text)?)
}

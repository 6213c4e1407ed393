/// Returns `name` without a vendor prefix.
///
/// If `name` has no vendor prefix, it's returned as-is.
pub(crate) fn unvendor(name: &str) -> &str {
    let rest = match name.strip_prefix('-') {
        Some(rest) => rest,
        None => return name,
    };

    // `--foo` is a custom identifier, not a vendor prefix
    if rest.starts_with('-') {
        return name;
    }

    match rest.find('-') {
        Some(idx) => &rest[idx + 1..],
        None => name,
    }
}

/// Returns a functional pseudo selector name without its argument,
/// e.g. `nth-of-type` for `nth-of-type(even)`.
///
/// Names without an argument are returned as-is.
pub(crate) fn strip_argument(name: &str) -> &str {
    match name.find('(') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

//! Name well-formedness.

/// A name is well-formed iff it is kebab-case: one or more segments of
/// lowercase ASCII letters and digits, separated by single hyphens, with
/// no leading or trailing hyphen.
pub fn is_well_formed_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

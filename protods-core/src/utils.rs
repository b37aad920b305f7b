//! Shared identifier helpers.

use crate::ABSTRACTION_MARKER;

/// Convert a snake_case identifier to PascalCase (e.g., "map_field" -> "MapField").
///
/// Every underscore-delimited token has its first character upper-cased, the
/// rest of the token is kept as written.
pub fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Strip the abstraction marker from an interface name
/// (e.g., "IStringExampleMap" -> "StringExampleMap").
pub fn strip_marker(name: &str) -> &str {
    name.strip_prefix(ABSTRACTION_MARKER).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("subject"), "Subject");
        assert_eq!(to_pascal_case("map_field"), "MapField");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("int32"), "Int32");
        assert_eq!(to_pascal_case("Example"), "Example");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_pascal_case_collapses_repeated_underscores() {
        assert_eq!(to_pascal_case("a__b"), "AB");
        assert_eq!(to_pascal_case("_leading"), "Leading");
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("IStringExampleMap"), "StringExampleMap");
        assert_eq!(strip_marker("Plain"), "Plain");
    }
}

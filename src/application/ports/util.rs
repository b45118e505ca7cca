// src/application/ports/util.rs

/// Turns a human-readable title into a URL path segment.
///
/// Implementations must be pure: the same input always yields the same
/// output, and the output holds only lowercase ASCII letters, digits and
/// single hyphens, with no hyphen at either end. Input with nothing to keep
/// yields an empty string.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}

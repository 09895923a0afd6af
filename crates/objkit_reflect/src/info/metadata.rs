use alloc::boxed::Box;

use crate::info::FieldDescriptor;

// -----------------------------------------------------------------------------
// FieldMetadata

/// Extracts declared-type tags from field documentation.
///
/// A tag is a marker in a field's doc comment:
///
/// ```text
/// /// The age in years.
/// /// @var int
/// pub(crate) age: Option<u32>,
/// ```
///
/// Recognised markers are `@var` and `@type`, followed by whitespace and a
/// token. The tag is the leading run of lowercase ASCII letters of that
/// token, provided the run is not directly followed by another letter,
/// digit or `_`; so `@var string|null` gives `string` while `@var String`
/// and `@var int32` give nothing. The first marker that yields a tag wins.
///
/// # Examples
///
/// ```
/// use objkit_reflect::info::FieldMetadata;
///
/// assert_eq!(FieldMetadata::parse("The age.\n@var int"), Some("int"));
/// assert_eq!(FieldMetadata::parse("@type string|null"), Some("string"));
/// assert_eq!(FieldMetadata::parse("@var Person"), None);
/// assert_eq!(FieldMetadata::parse("no marker here"), None);
/// ```
pub struct FieldMetadata;

const MARKERS: [&str; 2] = ["@var", "@type"];

impl FieldMetadata {
    /// Returns the declared-type tag found in `docs`, if any.
    pub fn parse(docs: &'static str) -> Option<&'static str> {
        docs.lines().find_map(Self::parse_line)
    }

    fn parse_line(line: &'static str) -> Option<&'static str> {
        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if MARKERS.contains(&word)
                && let Some(tag) = words.next().and_then(Self::tag_of)
            {
                return Some(tag);
            }
        }
        None
    }

    fn tag_of(token: &'static str) -> Option<&'static str> {
        let end = token
            .find(|c: char| !c.is_ascii_lowercase())
            .unwrap_or(token.len());
        let rest = &token[end..];

        if end == 0 || rest.starts_with(|c: char| c.is_alphanumeric() || c == '_') {
            return None;
        }
        Some(&token[..end])
    }
}

// -----------------------------------------------------------------------------
// FieldsConfig

/// Configuration of one eligible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldConfig {
    /// The declared-type tag, if the field has one.
    pub ty: Option<&'static str>,
}

/// Ordered mapping from eligible field name to its [`FieldConfig`].
///
/// Built once per type together with its
/// [`TypeDescriptor`](crate::info::TypeDescriptor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldsConfig {
    entries: Box<[(&'static str, FieldConfig)]>,
}

impl FieldsConfig {
    pub(crate) fn new<'a>(fields: impl Iterator<Item = &'a FieldDescriptor>) -> Self {
        let entries = fields
            .map(|field| {
                let config = FieldConfig {
                    ty: field.declared_type(),
                };
                (field.name(), config)
            })
            .collect();
        Self { entries }
    }

    /// Returns the configuration of `name`, if it is an eligible field.
    pub fn get(&self, name: &str) -> Option<&FieldConfig> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, config)| config)
    }

    /// Iterates over the entries in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&'static str, &FieldConfig)> {
        self.entries.iter().map(|(name, config)| (*name, config))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::FieldMetadata;

    #[test]
    fn first_marker_wins() {
        let docs = "Line one.\n@var int\n@var string";
        assert_eq!(FieldMetadata::parse(docs), Some("int"));
    }

    #[test]
    fn marker_must_be_a_word() {
        assert_eq!(FieldMetadata::parse("email@var int"), None);
        assert_eq!(FieldMetadata::parse("@var"), None);
        assert_eq!(FieldMetadata::parse("@var\n int"), None);
    }

    #[test]
    fn rejects_non_lowercase_tokens() {
        assert_eq!(FieldMetadata::parse("@var Int"), None);
        assert_eq!(FieldMetadata::parse("@var int32"), None);
        assert_eq!(FieldMetadata::parse("@var snake_case"), None);
        assert_eq!(FieldMetadata::parse("@var 42"), None);
    }

    #[test]
    fn skips_bad_marker_and_keeps_looking() {
        assert_eq!(FieldMetadata::parse("@var Foo @type bool"), Some("bool"));
        assert_eq!(FieldMetadata::parse("@var float, maybe"), Some("float"));
        assert_eq!(FieldMetadata::parse("@var array<int>"), Some("array"));
    }
}

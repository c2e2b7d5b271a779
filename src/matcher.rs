use regex::Regex;

use crate::error::LdxError;
use crate::traits::Matcher;

/// Matches file names ending in one of a fixed set of extensions.
///
/// The set compiles into a single anchored pattern — the name must end in a
/// literal dot followed by one of the given extensions, nothing after.
/// Matching is case-sensitive: `"jpg"` does not match `a.JPG`.
///
/// Every extension is escaped before the pattern is composed, so an element
/// like `"c++"` matches the literal suffix `.c++` rather than being
/// interpreted as regex syntax.
///
/// # Example
///
/// ```rust
/// use ldx::ExtensionMatcher;
/// use ldx::Matcher;
///
/// let m = ExtensionMatcher::new(&["jpg", "txt"]).unwrap();
/// assert!(m.is_match("photo.jpg"));
/// assert!(m.is_match("notes.txt"));
/// assert!(!m.is_match("photo.JPG"));
/// assert!(!m.is_match("photo.jpgx"));
/// ```
#[derive(Debug)]
pub struct ExtensionMatcher {
    pattern: Regex,
}

impl ExtensionMatcher {
    /// Build a matcher from a non-empty set of bare extensions (no leading dot).
    ///
    /// # Errors
    ///
    /// [`LdxError::EmptyExtensionSet`] if `extensions` is empty,
    /// [`LdxError::InvalidExtension`] if an element is empty or contains a
    /// path separator.
    pub fn new<S: AsRef<str>>(extensions: &[S]) -> Result<Self, LdxError> {
        if extensions.is_empty() {
            return Err(LdxError::EmptyExtensionSet);
        }

        let mut escaped = Vec::with_capacity(extensions.len());
        for ext in extensions {
            let ext = ext.as_ref();
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(LdxError::InvalidExtension(ext.to_string()));
            }
            escaped.push(regex::escape(ext));
        }

        let pattern = Regex::new(&format!(r"\A.*\.(?:{})\z", escaped.join("|")))?;
        Ok(Self { pattern })
    }
}

impl Matcher for ExtensionMatcher {
    fn is_match(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metacharacters_are_literal() {
        let m = ExtensionMatcher::new(&["c++"]).unwrap();
        assert!(m.is_match("vector.c++"));
        assert!(!m.is_match("vector.cpp"));
        assert!(!m.is_match("vector.cxx"));
    }

    #[test]
    fn dot_in_extension_is_literal() {
        let m = ExtensionMatcher::new(&["tar.gz"]).unwrap();
        assert!(m.is_match("backup.tar.gz"));
        assert!(!m.is_match("backup.tarxgz"));
    }

    #[test]
    fn bare_extension_name_does_not_match() {
        let m = ExtensionMatcher::new(&["jpg"]).unwrap();
        assert!(!m.is_match("jpg"));
        assert!(m.is_match(".jpg"));
    }

    #[test]
    fn empty_element_rejected() {
        let err = ExtensionMatcher::new(&["jpg", ""]).unwrap_err();
        assert!(matches!(err, LdxError::InvalidExtension(_)));
    }
}

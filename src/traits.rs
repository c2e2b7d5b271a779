/// Decides whether an entry name survives the scan's name filter.
///
/// Implement this for custom filtering logic — glob-style suffixes, regex,
/// prefix matching, or anything else keyed off the base name. [`ldx`](crate)
/// ships [`ExtensionMatcher`](crate::ExtensionMatcher) for the common case.
///
/// # Object Safety
///
/// `Matcher` is object-safe. The builder stores matchers as
/// `Box<dyn Matcher>`.
///
/// # Example
///
/// ```rust
/// use ldx::Matcher;
///
/// struct DotfileMatcher;
///
/// impl Matcher for DotfileMatcher {
///     fn is_match(&self, name: &str) -> bool {
///         name.starts_with('.')
///     }
/// }
///
/// assert!(DotfileMatcher.is_match(".gitignore"));
/// assert!(!DotfileMatcher.is_match("main.rs"));
/// ```
pub trait Matcher: Send + Sync {
    /// Returns `true` if an entry with this base name should be kept.
    ///
    /// Must be a pure predicate — no side effects, no I/O, never fails.
    fn is_match(&self, name: &str) -> bool;
}

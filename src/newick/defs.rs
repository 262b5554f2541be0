//! Constants and character classes for Newick scanning and rendering.

/// Opens an internal node
pub(crate) const OPEN_PAREN: char = '(';

/// Closes an internal node
pub(crate) const CLOSE_PAREN: char = ')';

/// Separator between siblings when rendering
pub(crate) const CHILD_SEPARATOR: char = ',';

/// Characters of a label: Unicode letters and digits, and underscore.
///
/// Follows [char::is_alphanumeric], so combining marks with the
/// `Alphabetic` property (e.g. the vowel sign U+093F in `कि`) stay part of
/// the label rather than splitting it, which a `\w` regex would do.
#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters expected between tokens: comma and whitespace.
#[inline]
pub(crate) fn is_separator(c: char) -> bool {
    c == CHILD_SEPARATOR || c.is_whitespace()
}

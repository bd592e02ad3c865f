//! Clue module - the unit of evidence collected during an investigation

use std::fmt;

/// A piece of evidence found in a room.
///
/// Identity is the exact text: comparison is byte-wise and case-sensitive,
/// so `"Nota"` and `"nota"` are different clues. The text is immutable once
/// the clue exists and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clue(Box<str>);

impl Clue {
    /// Create a clue from its description
    ///
    /// Returns `None` for empty text, which is never a valid clue.
    ///
    /// # Examples
    ///
    /// ```
    /// use detective_domain::Clue;
    ///
    /// let clue = Clue::new("pegada de lama").unwrap();
    /// assert_eq!(clue.as_str(), "pegada de lama");
    /// assert!(Clue::new("").is_none());
    /// ```
    pub fn new(text: &str) -> Option<Self> {
        if text.is_empty() {
            None
        } else {
            Some(Self(text.into()))
        }
    }

    /// Get the clue text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Clue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

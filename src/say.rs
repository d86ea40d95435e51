//! A phrase builder that strings words together one at a time.
//!
//! # Examples
//!
//! ```
//! use exercises::say::say;
//!
//! assert_eq!(say().and("small").and("steps").phrase(), "small steps");
//! ```

use std::fmt;

/// An immutable phrase. [`and`][Sayer::and] returns a longer one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Sayer {
    phrase: String,
}

/// Starts an empty phrase.
pub fn say() -> Sayer {
    Sayer::default()
}

impl Sayer {
    /// Returns a new phrase with `word` appended. Words are separated by a
    /// single space, and the first word gets no leading space. An empty
    /// `word` appends just a space.
    pub fn and(&self, word: &str) -> Self {
        let phrase = if word.is_empty() {
            format!("{} ", self.phrase)
        } else if self.phrase.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", self.phrase, word)
        };
        Self { phrase }
    }

    /// The words so far.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }
}

impl From<&str> for Sayer {
    fn from(phrase: &str) -> Self {
        Self::from(phrase.to_string())
    }
}

impl From<String> for Sayer {
    fn from(phrase: String) -> Self {
        Self { phrase }
    }
}

impl fmt::Display for Sayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

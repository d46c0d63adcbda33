//! Field paths.
//!
//! A field path addresses a (possibly nested or indexed) value inside a
//! submitted payload. The textual form is the wire contract UIs bind to:
//! object keys are joined with `.` and list positions use `[i]`, for example
//! `favoriteGames[0].id` or `eu.gdprConsent`.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{FormError, Result};

/// A segment in a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// A list position.
    Index(usize),
}

/// Address of a field inside a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Returns the root path (the payload itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a child path addressing `key` under this path.
    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Key(key.into()));
        Self { segments }
    }

    /// Returns a child path addressing list position `index` under this path.
    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns the path segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parses a path in the `a.b[0].c` notation.
    ///
    /// # Example
    ///
    /// ```
    /// use formlab_forms::FieldPath;
    ///
    /// let path = FieldPath::parse("favoriteGames[2].id").unwrap();
    /// assert_eq!(path, FieldPath::root().key("favoriteGames").index(2).key("id"));
    /// assert_eq!(path.to_string(), "favoriteGames[2].id");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || FormError::InvalidPath(input.to_string());
        let mut segments = Vec::new();
        let mut chars = input.chars().peekable();
        let mut key = String::new();
        // Set right after `]`, where only `.`, `[` or the end may follow.
        let mut after_index = false;

        while let Some(c) = chars.next() {
            match c {
                '.' => {
                    if key.is_empty() && !after_index {
                        return Err(invalid());
                    }
                    if !key.is_empty() {
                        segments.push(PathSegment::Key(std::mem::take(&mut key)));
                    }
                    after_index = false;
                    if chars.peek().is_none() {
                        return Err(invalid());
                    }
                }
                '[' => {
                    if !key.is_empty() {
                        segments.push(PathSegment::Key(std::mem::take(&mut key)));
                    } else if segments.is_empty() {
                        return Err(invalid());
                    }
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some(']') => break,
                            Some(d) if d.is_ascii_digit() => digits.push(d),
                            _ => return Err(invalid()),
                        }
                    }
                    let index = digits.parse().map_err(|_| invalid())?;
                    segments.push(PathSegment::Index(index));
                    after_index = true;
                }
                ']' => return Err(invalid()),
                other => {
                    if after_index {
                        return Err(invalid());
                    }
                    key.push(other);
                }
            }
        }

        if !key.is_empty() {
            segments.push(PathSegment::Key(key));
        }
        if segments.is_empty() {
            return Err(invalid());
        }

        Ok(Self { segments })
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{key}")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FieldPath::root().to_string(), "");
        assert_eq!(FieldPath::root().key("region").to_string(), "region");
        assert_eq!(
            FieldPath::root().key("eu").key("gdprConsent").to_string(),
            "eu.gdprConsent"
        );
        assert_eq!(
            FieldPath::root()
                .key("favoriteGames")
                .index(0)
                .key("id")
                .to_string(),
            "favoriteGames[0].id"
        );
    }

    #[test]
    fn test_parse() {
        let path = FieldPath::parse("contact.channel").unwrap();
        assert_eq!(path, FieldPath::root().key("contact").key("channel"));

        let path = FieldPath::parse("matrix[1][2]").unwrap();
        assert_eq!(path, FieldPath::root().key("matrix").index(1).index(2));
        assert_eq!(path.to_string(), "matrix[1][2]");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", ".a", "a.", "a..b", "[0]", "a[x]", "a[0]b", "a]", "a[1"] {
            assert!(FieldPath::parse(input).is_err(), "accepted {input:?}");
        }
    }
}

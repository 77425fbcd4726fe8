//! Key paths addressing values inside a locale's data tree.

use std::fmt;

/// One step of a [`KeyPath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySegment {
    /// Named entry of a table.
    Key(String),
    /// Position inside a sequence.
    Index(usize),
}

impl From<&str> for KeySegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for KeySegment {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<usize> for KeySegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl fmt::Display for KeySegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Ordered segments such as `Currencies/USD/0`.
///
/// # Examples
///
/// ```
/// use glossa::bundle::KeyPath;
///
/// let path = KeyPath::new().key("Currencies").key("USD").index(0);
/// assert_eq!(path.to_string(), "Currencies/USD/0");
/// assert_eq!(path.replace(1, "DEFAULT").to_string(), "Currencies/DEFAULT/0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<KeySegment>);

impl KeyPath {
    /// Empty path addressing the whole document.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a named segment.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(KeySegment::Key(key.into()));
        self
    }

    /// Append a positional segment.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(KeySegment::Index(index));
        self
    }

    /// Copy of the path with the segment at `position` replaced.
    ///
    /// Positions past the end leave the path unchanged.
    #[must_use]
    pub fn replace(&self, position: usize, segment: impl Into<KeySegment>) -> Self {
        let mut out = self.clone();
        if let Some(slot) = out.0.get_mut(position) {
            *slot = segment.into();
        }
        out
    }

    /// Borrow the segments.
    #[must_use]
    pub fn segments(&self) -> &[KeySegment] {
        &self.0
    }
}

impl<S: Into<KeySegment>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

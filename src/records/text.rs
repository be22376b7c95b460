//! Text records

use std::fmt;

use crate::models::DssPath;

/// A block of free text stored under a pathname
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRecord {
    pub text: String,
    pub path: Option<DssPath>,
}

impl TextRecord {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            path: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: DssPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Lines of the text
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

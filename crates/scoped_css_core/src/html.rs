use std::fmt;

/// A string that is already valid markup and must not be escaped again
/// before insertion into HTML.
///
/// Both outputs of this library (rewritten CSS text and serialized
/// attribute strings) carry intentionally-unescaped content, so they are
/// returned wrapped instead of as bare `String`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawHtml(String);

impl RawHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RawHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RawHtml {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RawHtml {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for RawHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

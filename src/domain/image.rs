use std::fmt;

/// A parsed image location.
///
/// Parsing only rejects references that cannot be a URL at all: empty ones and
/// ones containing whitespace. Relative and schemeless references are kept as
/// given; resolving and reaching them is left to the `ImageFetcher`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    /// Builds the URL from the first reference in the list, if any.
    pub fn from_first(refs: &[String]) -> Option<Self> {
        Self::parse(refs.first().map(String::as_str).unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded image payload attached to a display entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    bytes: Vec<u8>,
}

impl Image {
    /// An empty payload decodes to no image.
    pub fn decode(bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            None
        } else {
            Some(Self { bytes })
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

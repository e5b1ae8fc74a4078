use serde::{Deserialize, Serialize};

/// Two versions of one artifact.
///
/// `identifier` is only a label for reporting. A side that does not exist is
/// represented by an empty string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPair {
    pub identifier: String,
    pub content_a: String,
    pub content_b: String,
}

impl ContentPair {
    pub fn new(
        identifier: impl Into<String>,
        content_a: impl Into<String>,
        content_b: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            content_a: content_a.into(),
            content_b: content_b.into(),
        }
    }
}

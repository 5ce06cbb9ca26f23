use serde::{Deserialize, Serialize};

/// One rendered computational-layer script fragment, addressed by the
/// component key it should be pasted into (for example `q1_misconception2`).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snippet {
    pub key: String,
    pub script: String,
}

impl Snippet {
    pub fn new(key: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            script: script.into(),
        }
    }
}

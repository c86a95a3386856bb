/// Caller-supplied scale used to alias tokens before table lookup
///
/// A scale is written as space-separated tokens, e.g. `"s r2 g3 m1 p d2 n3"`.
/// While converting, a note token is replaced by a scale entry that contains
/// it (the token lower-cased, the entry as written). Every entry is checked,
/// so the last containing entry wins.
///
/// Containment is looser than degree matching: `g` matches `g1`, `g2` and `g3`
/// alike and whichever is listed last is used.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Scale {
    entries: Vec<String>,
}

impl Scale {
    /// Split a scale string on single spaces
    ///
    /// Entries are kept verbatim. Repeated spaces produce empty entries, which
    /// never match a token.
    pub fn parse(text: &str) -> Self {
        Self {
            entries: text.split(' ').map(str::to_string).collect(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// True when no entry could ever match a token
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.is_empty())
    }

    /// Rewrite `token` through the scale, last match wins
    pub fn apply(&self, token: &str) -> String {
        let needle = token.to_lowercase();
        let mut current = token.to_string();
        for entry in &self.entries {
            if entry.contains(needle.as_str()) {
                log::trace!("scale entry '{}' overrides '{}'", entry, token);
                current.clone_from(entry);
            }
        }
        current
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries.join(" "))
    }
}

impl FromStr for Scale {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Scale::parse(s))
    }
}

impl From<String> for Scale {
    fn from(text: String) -> Self {
        Scale::parse(&text)
    }
}

impl From<&str> for Scale {
    fn from(text: &str) -> Self {
        Scale::parse(text)
    }
}

impl From<Scale> for String {
    fn from(scale: Scale) -> Self {
        scale.to_string()
    }
}

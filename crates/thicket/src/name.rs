use std::fmt;

use convert_case::{Case, Casing};

/// Fallback for names with no usable characters.
const DEFAULT_NAME: &str = "node";

/// A component name for logs and tree dumps: lowercase ASCII alphanumerics
/// and underscores, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeName(String);

impl NodeName {
    /// Snake-case `raw` and drop everything outside `[a-z0-9_]`.
    pub fn convert(raw: &str) -> Self {
        let name: String = raw
            .to_case(Case::Snake)
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();
        if name.is_empty() {
            Self(DEFAULT_NAME.into())
        } else {
            Self(name)
        }
    }

    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NodeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

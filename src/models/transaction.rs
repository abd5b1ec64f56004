use std::fmt;

use serde::Deserialize;

/// A price as the backend sent it.
///
/// Database-backed endpoints emit prices either as JSON numbers or as
/// numeric strings, so the original text is kept and displayed verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A completed trade from the `neworders` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    pub item_name: String,
    pub price: Price,
}

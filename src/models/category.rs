use serde::Deserialize;

/// A purchasable item category, as listed by the `categories` endpoint.
///
/// Fetched fresh every time the filter panel opens and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub item_name: String,
    pub item_photo: String,
    /// Key the market endpoint filters on. Older backends omit it.
    #[serde(default)]
    pub item_key: Option<String>,
}

impl Category {
    /// Value sent as the market `category` query parameter.
    ///
    /// Falls back to the displayed name when the backend sends no key.
    pub fn query_value(&self) -> &str {
        self.item_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(&self.item_name)
    }
}

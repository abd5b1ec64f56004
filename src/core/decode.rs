//! Response body decoding for each endpoint.
//!
//! Decoders only check shape. Whether an empty list is an error is the
//! caller's decision, see [`require_entries`].

use serde::de::DeserializeOwned;

use crate::core::error::LoadError;
use crate::models::{Category, Endpoint, MarketItem, Transaction};

fn parse<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::parse(endpoint, e))
}

/// Decode the `categories` body: a JSON array of category objects.
pub fn decode_categories(body: &str) -> Result<Vec<Category>, LoadError> {
    parse(Endpoint::Categories, body)
}

/// Decode the `market` body.
///
/// The listing is double-encoded: the outer array holds JSON strings,
/// each of which is itself a serialized item object.
pub fn decode_market(body: &str) -> Result<Vec<MarketItem>, LoadError> {
    let encoded: Vec<String> = parse(Endpoint::Market, body)?;
    encoded
        .iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_str(item)
                .map_err(|e| LoadError::parse(Endpoint::Market, format!("item {}: {}", i, e)))
        })
        .collect()
}

/// Decode the `neworders` body: a JSON array of transactions.
pub fn decode_transactions(body: &str) -> Result<Vec<Transaction>, LoadError> {
    parse(Endpoint::NewOrders, body)
}

/// Turn an empty list into [`LoadError::Empty`].
pub fn require_entries<T>(endpoint: Endpoint, entries: Vec<T>) -> Result<Vec<T>, LoadError> {
    if entries.is_empty() {
        Err(LoadError::Empty(endpoint))
    } else {
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_categories_keeps_order() {
        let body = r#"[
            {"item_name":"Totems","item_photo":"t.png"},
            {"item_name":"Gapples","item_photo":"g.png"},
            {"item_name":"Elytra","item_photo":"e.png"}
        ]"#;
        let names: Vec<String> = decode_categories(body)
            .unwrap()
            .into_iter()
            .map(|c| c.item_name)
            .collect();
        assert_eq!(names, vec!["Totems", "Gapples", "Elytra"]);
    }

    #[test]
    fn test_decode_categories_malformed() {
        let err = decode_categories("[{\"item_name\":").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse {
                endpoint: Endpoint::Categories,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_market_double_encoded() {
        let body = r#"["{\"item_name\":\"Totem\",\"sell_order_min\":25}","{\"item_name\":\"Gapple\"}"]"#;
        let items = decode_market(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_name, "Totem");
        assert_eq!(items[0].price.as_ref().map(|p| p.to_string()), Some("25".into()));
        assert_eq!(items[1].item_name, "Gapple");
        assert_eq!(items[1].price, None);
    }

    #[test]
    fn test_decode_market_rejects_plain_objects() {
        let body = r#"[{"item_name":"Totem"}]"#;
        assert!(matches!(
            decode_market(body),
            Err(LoadError::Parse {
                endpoint: Endpoint::Market,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_market_reports_bad_inner_item() {
        let body = r#"["{\"item_name\":\"Totem\"}","not json"]"#;
        match decode_market(body) {
            Err(LoadError::Parse { message, .. }) => assert!(message.starts_with("item 1:")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_transactions() {
        let txs = decode_transactions(r#"[{"item_name":"Sword","price":10}]"#).unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].item_name, "Sword");

        assert!(decode_transactions("<html>502 Bad Gateway</html>").is_err());
    }

    #[test]
    fn test_require_entries() {
        assert_eq!(require_entries(Endpoint::Market, vec![1]), Ok(vec![1]));
        assert_eq!(
            require_entries::<u8>(Endpoint::Categories, Vec::new()),
            Err(LoadError::Empty(Endpoint::Categories))
        );
    }
}

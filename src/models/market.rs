use serde::Deserialize;

use super::Price;

/// An entry of the `market` listing.
///
/// The lowest open sell order is the price a buyer would pay, so it is
/// accepted as the item price when no explicit `price` is sent.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MarketItem {
    pub item_name: String,
    #[serde(default, alias = "sell_order_min")]
    pub price: Option<Price>,
}

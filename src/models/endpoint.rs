use std::fmt;

use crate::config::endpoints;

/// Backend endpoint a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Categories,
    Market,
    NewOrders,
}

impl Endpoint {
    /// Relative request path, without query string.
    pub fn path(self) -> &'static str {
        match self {
            Self::Categories => endpoints::CATEGORIES,
            Self::Market => endpoints::MARKET,
            Self::NewOrders => endpoints::NEW_ORDERS,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Categories => write!(f, "categories"),
            Self::Market => write!(f, "market items"),
            Self::NewOrders => write!(f, "recent transactions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Categories.path(), "categories");
        assert_eq!(Endpoint::Market.path(), "market");
        assert_eq!(Endpoint::NewOrders.path(), "neworders");
    }
}

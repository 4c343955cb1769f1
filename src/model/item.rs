//! Ration item types and stock status classification

use serde::{Deserialize, Serialize};

/// Commodities distributed through ration shops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Rice,
    Wheat,
    Sugar,
    Kerosene,
}

impl ItemType {
    /// Every item type, in display and update order
    pub const ALL: [ItemType; 4] = [
        ItemType::Rice,
        ItemType::Wheat,
        ItemType::Sugar,
        ItemType::Kerosene,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Rice => "rice",
            ItemType::Wheat => "wheat",
            ItemType::Sugar => "sugar",
            ItemType::Kerosene => "kerosene",
        }
    }

    /// Unit the quantity is measured in
    pub fn unit(self) -> &'static str {
        match self {
            ItemType::Kerosene => "L",
            _ => "kg",
        }
    }

    /// Quantity below which the item counts as low stock
    pub fn low_stock_threshold(self) -> u32 {
        match self {
            ItemType::Kerosene => 50,
            _ => 100,
        }
    }

    /// Monthly quantity a beneficiary household is entitled to
    pub fn monthly_allocation(self) -> u32 {
        match self {
            ItemType::Rice => 5,
            ItemType::Wheat => 3,
            ItemType::Sugar => 1,
            ItemType::Kerosene => 2,
        }
    }
}

/// Availability of a single stock row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Nothing left
    Empty,
    /// Below the item threshold
    Low,
    Sufficient,
}

impl StockStatus {
    pub fn classify(item: ItemType, quantity: u32) -> Self {
        if quantity == 0 {
            StockStatus::Empty
        } else if quantity < item.low_stock_threshold() {
            StockStatus::Low
        } else {
            StockStatus::Sufficient
        }
    }

    /// Human readable label shown next to the quantity
    pub fn label(self) -> &'static str {
        match self {
            StockStatus::Empty => "Out of Stock",
            StockStatus::Low => "Low Stock",
            StockStatus::Sufficient => "Available",
        }
    }

    /// Whether the row should raise a low stock alert (empty rows included)
    pub fn is_alert(self) -> bool {
        !matches!(self, StockStatus::Sufficient)
    }
}

/// Overall health of a shop across all of its rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopStatus {
    Critical,
    Low,
    Good,
}

impl ShopStatus {
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = StockStatus>,
    {
        let mut overall = ShopStatus::Good;
        for status in statuses {
            match status {
                StockStatus::Empty => return ShopStatus::Critical,
                StockStatus::Low => overall = ShopStatus::Low,
                StockStatus::Sufficient => {}
            }
        }
        overall
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_always_empty() {
        for item in ItemType::ALL {
            assert_eq!(StockStatus::classify(item, 0), StockStatus::Empty);
        }
    }

    #[test]
    fn threshold_boundaries() {
        for item in ItemType::ALL {
            let threshold = item.low_stock_threshold();
            assert_eq!(StockStatus::classify(item, 1), StockStatus::Low);
            assert_eq!(StockStatus::classify(item, threshold - 1), StockStatus::Low);
            assert_eq!(StockStatus::classify(item, threshold), StockStatus::Sufficient);
            assert_eq!(StockStatus::classify(item, threshold + 500), StockStatus::Sufficient);
        }
    }

    #[test]
    fn kerosene_uses_lower_threshold() {
        assert_eq!(StockStatus::classify(ItemType::Kerosene, 60), StockStatus::Sufficient);
        assert_eq!(StockStatus::classify(ItemType::Sugar, 60), StockStatus::Low);
        assert_eq!(StockStatus::classify(ItemType::Sugar, 45), StockStatus::Low);
    }

    #[test]
    fn units_follow_item_type() {
        assert_eq!(ItemType::Kerosene.unit(), "L");
        assert_eq!(ItemType::Rice.unit(), "kg");
        assert_eq!(ItemType::Wheat.unit(), "kg");
        assert_eq!(ItemType::Sugar.unit(), "kg");
    }

    #[test]
    fn shop_rollup_prefers_worst_status() {
        use StockStatus::*;
        assert_eq!(ShopStatus::from_statuses([Sufficient, Low, Empty]), ShopStatus::Critical);
        assert_eq!(ShopStatus::from_statuses([Low, Sufficient]), ShopStatus::Low);
        assert_eq!(ShopStatus::from_statuses([Sufficient]), ShopStatus::Good);
        assert_eq!(ShopStatus::from_statuses(std::iter::empty()), ShopStatus::Good);
    }

    #[test]
    fn item_type_wire_names() {
        assert_eq!(serde_json::to_string(&ItemType::Kerosene).unwrap(), "\"kerosene\"");
        let parsed: ItemType = serde_json::from_str("\"wheat\"").unwrap();
        assert_eq!(parsed, ItemType::Wheat);
        assert!(serde_json::from_str::<ItemType>("\"oil\"").is_err());
    }
}

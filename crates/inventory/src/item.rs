use serde::{Deserialize, Serialize};

use stockscan_core::RfidTag;

/// Quantities strictly below this value are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Inventory item as returned by `GET /items`.
///
/// Unknown fields (the server also sends its row `id`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub rfid_tag: RfidTag,
    pub quantity: i64,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, rfid_tag: RfidTag, quantity: i64) -> Self {
        Self {
            name: name.into(),
            rfid_tag,
            quantity,
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::for_quantity(self.quantity)
    }

    pub fn is_low_stock(&self) -> bool {
        self.status() == StockStatus::Low
    }
}

/// Presentation state of an item's stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Ok,
    Low,
}

impl StockStatus {
    pub fn for_quantity(quantity: i64) -> Self {
        if quantity < LOW_STOCK_THRESHOLD {
            StockStatus::Low
        } else {
            StockStatus::Ok
        }
    }

    /// Text shown in the status column.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "OK",
            StockStatus::Low => "LOW STOCK",
        }
    }

    /// CSS class applied to the quantity cell, if any.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            StockStatus::Ok => None,
            StockStatus::Low => Some("low-stock"),
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn stapler(quantity: i64) -> InventoryItem {
        InventoryItem::new("Stapler", RfidTag::from_static("TAG003"), quantity)
    }

    #[test]
    fn quantity_below_threshold_is_low_stock() {
        let item = stapler(3);
        assert_eq!(item.status(), StockStatus::Low);
        assert_eq!(item.status().label(), "LOW STOCK");
        assert_eq!(item.status().css_class(), Some("low-stock"));
    }

    #[test]
    fn threshold_itself_is_ok() {
        let item = stapler(LOW_STOCK_THRESHOLD);
        assert_eq!(item.status(), StockStatus::Ok);
        assert_eq!(item.status().label(), "OK");
        assert_eq!(item.status().css_class(), None);
    }

    #[test]
    fn zero_is_low_stock() {
        assert!(stapler(0).is_low_stock());
    }

    #[test]
    fn deserializes_api_payload_and_ignores_row_id() {
        let body = r#"[
            {"id": 1, "name": "Laptop", "rfid_tag": "TAG001", "quantity": 10},
            {"id": 3, "name": "Stapler", "rfid_tag": "TAG003", "quantity": 3}
        ]"#;
        let items: Vec<InventoryItem> = serde_json::from_str(body).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Laptop");
        assert_eq!(items[0].rfid_tag.as_str(), "TAG001");
        assert!(!items[0].is_low_stock());
        assert_eq!(items[1], stapler(3));
    }

    #[test]
    fn rejects_non_integer_quantity() {
        let body = r#"{"name": "Pen", "rfid_tag": "TAG002", "quantity": "many"}"#;
        assert!(serde_json::from_str::<InventoryItem>(body).is_err());
    }

    proptest! {
        #[test]
        fn status_is_low_iff_below_threshold(quantity in -1_000i64..1_000_000) {
            let status = StockStatus::for_quantity(quantity);
            prop_assert_eq!(status == StockStatus::Low, quantity < LOW_STOCK_THRESHOLD);
            prop_assert_eq!(status.css_class().is_some(), status == StockStatus::Low);
        }
    }
}

//! Scan request/response wire types.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use stockscan_core::{DomainError, RfidTag};

/// Tag scanned by the dashboard's scan button (the stapler).
pub const DEMO_SCAN_TAG: &str = "TAG003";

/// Tag scanned by the periodic scanner (the pen).
pub const SIMULATOR_SCAN_TAG: &str = "TAG002";

/// What a scan does to the tagged item's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanAction {
    Add,
    Remove,
}

impl ScanAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanAction::Add => "add",
            ScanAction::Remove => "remove",
        }
    }

    /// Stock rule applied by the server: add one, or remove one without
    /// going below zero.
    pub fn apply(&self, quantity: i64) -> i64 {
        match self {
            ScanAction::Add => quantity.saturating_add(1),
            ScanAction::Remove => quantity.saturating_sub(1).max(0),
        }
    }
}

impl core::fmt::Display for ScanAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(ScanAction::Add),
            "remove" => Ok(ScanAction::Remove),
            other => Err(DomainError::validation(format!(
                "unknown scan action {other:?} (expected \"add\" or \"remove\")"
            ))),
        }
    }
}

/// Body of `POST /scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub tag_id: RfidTag,
    pub action: ScanAction,
}

impl ScanRequest {
    pub fn new(tag_id: RfidTag, action: ScanAction) -> Self {
        Self { tag_id, action }
    }

    /// Scan of the fixed demo tag.
    pub fn demo(action: ScanAction) -> Self {
        Self::new(RfidTag::from_static(DEMO_SCAN_TAG), action)
    }
}

/// Reply of `POST /scan`. Clients don't need it; kept for servers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub message: String,
    pub new_quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_request_serializes_to_wire_shape() {
        let body = serde_json::to_value(ScanRequest::demo(ScanAction::Add)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "tag_id": "TAG003", "action": "add" })
        );
    }

    #[test]
    fn parses_known_actions_only() {
        assert_eq!("add".parse::<ScanAction>().unwrap(), ScanAction::Add);
        assert_eq!("remove".parse::<ScanAction>().unwrap(), ScanAction::Remove);
        assert!(matches!(
            "Remove".parse::<ScanAction>(),
            Err(DomainError::Validation(_))
        ));
        assert!("delete".parse::<ScanAction>().is_err());
    }

    #[test]
    fn remove_never_goes_negative() {
        assert_eq!(ScanAction::Remove.apply(1), 0);
        assert_eq!(ScanAction::Remove.apply(0), 0);
        assert_eq!(ScanAction::Add.apply(0), 1);
    }

    #[test]
    fn apply_saturates_at_integer_bounds() {
        assert_eq!(ScanAction::Remove.apply(i64::MIN), 0);
        assert_eq!(ScanAction::Add.apply(i64::MAX), i64::MAX);
    }
}

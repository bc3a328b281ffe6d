//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier printed on an RFID tag (e.g. `TAG003`).
///
/// Serialized as a bare string so it matches the API's `rfid_tag` / `tag_id`
/// fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RfidTag(String);

impl RfidTag {
    /// Build a tag from a value known to be valid at compile time.
    ///
    /// Use [`str::parse`] for anything coming from user input.
    pub fn from_static(tag: &'static str) -> Self {
        Self(tag.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RfidTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RfidTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(DomainError::invalid_id("rfid tag cannot be empty"));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid_id(format!(
                "rfid tag cannot contain whitespace: {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for RfidTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_tag() {
        let tag: RfidTag = "TAG003".parse().unwrap();
        assert_eq!(tag.as_str(), "TAG003");
        assert_eq!(tag.to_string(), "TAG003");
    }

    #[test]
    fn rejects_empty_tag() {
        assert!(matches!(
            "".parse::<RfidTag>(),
            Err(DomainError::InvalidId(_))
        ));
        assert!(matches!(
            "   ".parse::<RfidTag>(),
            Err(DomainError::InvalidId(_))
        ));
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert!("TAG 003".parse::<RfidTag>().is_err());
    }

    #[test]
    fn serializes_as_bare_string() {
        let tag = RfidTag::from_static("TAG002");
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"TAG002\"");
        let back: RfidTag = serde_json::from_str("\"TAG002\"").unwrap();
        assert_eq!(back, tag);
    }
}

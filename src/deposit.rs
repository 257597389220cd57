//! Deposit Record
//!
//! The wire model for one blockchain deposit transaction as returned by the
//! indexer's `/api/deposits` endpoint. Records are immutable once received;
//! every poll replaces the whole collection.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One deposit transaction, exactly as the indexer reports it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    /// Block height at which the deposit was included.
    pub block_number: u64,

    /// Inclusion time as an opaque string; parsed only for display.
    pub block_timestamp: String,

    /// Transaction fee as a decimal ETH amount, displayed verbatim.
    pub fee: String,

    /// Unique transaction identifier.
    pub hash: String,

    /// Depositor public key; present only for external transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
}

/// Response envelope for `GET /api/deposits`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DepositsResponse {
    pub deposits: Vec<Deposit>,
}

impl Deposit {
    /// Whether the record is an external transaction (carries a pubkey).
    pub fn is_external(&self) -> bool {
        self.pubkey.is_some()
    }

    /// The block timestamp formatted for display in the local timezone.
    ///
    /// Unparseable strings are rendered verbatim; a malformed field is
    /// displayed, never rejected.
    pub fn display_timestamp(&self) -> String {
        format_block_timestamp(&self.block_timestamp)
    }
}

impl Display for Deposit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "block {}  {}  {} ETH  {}",
            self.block_number,
            self.display_timestamp(),
            self.fee,
            self.hash
        )?;
        if let Some(pubkey) = &self.pubkey {
            write!(f, "  pubkey {}", pubkey)?;
        }
        Ok(())
    }
}

/// Convert a stored timestamp string to local time for display.
pub fn format_block_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "deposits": [
                {
                    "blockNumber": 100,
                    "blockTimestamp": "2024-01-01T00:00:00Z",
                    "fee": "0.01",
                    "hash": "0xabc",
                    "pubkey": "0x99aabb"
                },
                {
                    "blockNumber": 99,
                    "blockTimestamp": "2023-12-31T23:59:48Z",
                    "fee": "0.008",
                    "hash": "0xdef"
                }
            ]
        }"#
    }

    #[test]
    /// The camelCase wire shape decodes into the model, pubkey optional.
    fn decodes_wire_shape() {
        let response: DepositsResponse = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(response.deposits.len(), 2);

        let external = &response.deposits[0];
        assert_eq!(external.block_number, 100);
        assert_eq!(external.fee, "0.01");
        assert_eq!(external.hash, "0xabc");
        assert_eq!(external.pubkey.as_deref(), Some("0x99aabb"));
        assert!(external.is_external());

        let internal = &response.deposits[1];
        assert_eq!(internal.pubkey, None);
        assert!(!internal.is_external());
    }

    #[test]
    /// A body without the `deposits` field is a decode failure.
    fn rejects_missing_deposits_field() {
        assert!(serde_json::from_str::<DepositsResponse>(r#"{"records": []}"#).is_err());
        assert!(serde_json::from_str::<DepositsResponse>("[]").is_err());
    }

    #[test]
    /// Serialization round-trips through the same camelCase field names.
    fn serializes_camel_case() {
        let deposit = Deposit {
            block_number: 7,
            block_timestamp: "2024-01-01T00:00:00Z".to_string(),
            fee: "0.002".to_string(),
            hash: "0x01".to_string(),
            pubkey: None,
        };
        let json = serde_json::to_string(&deposit).unwrap();
        assert!(json.contains("\"blockNumber\":7"));
        assert!(json.contains("\"blockTimestamp\""));
        // Absent pubkey is omitted, matching the wire shape
        assert!(!json.contains("pubkey"));
    }

    #[test]
    /// RFC 3339 timestamps are reformatted; anything else passes through.
    fn formats_timestamps_for_display() {
        let formatted = format_block_timestamp("2024-01-01T00:00:00Z");
        assert_ne!(formatted, "2024-01-01T00:00:00Z");
        assert!(!formatted.contains('T'));
        assert_eq!(formatted.len(), "2024-01-01 00:00:00".len());

        assert_eq!(format_block_timestamp("pending"), "pending");
        assert_eq!(format_block_timestamp(""), "");
    }

    #[test]
    fn display_includes_pubkey_only_when_present() {
        let mut deposit = Deposit {
            block_number: 1,
            block_timestamp: "t".to_string(),
            fee: "0.1".to_string(),
            hash: "0xaa".to_string(),
            pubkey: None,
        };
        assert!(!deposit.to_string().contains("pubkey"));

        deposit.pubkey = Some("0xbb".to_string());
        assert!(deposit.to_string().contains("pubkey 0xbb"));
    }
}

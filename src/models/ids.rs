//! Strongly-typed ID wrappers for ledger entities
//!
//! Ids are random UUIDs assigned at creation and carried through the ledger
//! file unchanged, so they stay stable across process restarts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(GoalId, "goal-");

impl TransactionId {
    /// Map a numeric id from an older ledger file onto a UUID
    ///
    /// The mapping is deterministic, so distinct legacy ids stay distinct and
    /// re-loading the same file yields the same ids.
    pub fn from_legacy(number: u64) -> Self {
        Self(Uuid::from_u64_pair(0, number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_id_creation() {
        let id = TransactionId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = TransactionId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("txn-"));
        assert_eq!(display.len(), 12);

        let goal = GoalId::new();
        assert!(goal.to_string().starts_with("goal-"));
    }

    #[test]
    fn test_ids_are_unique() {
        let id1 = TransactionId::new();
        let id2 = id1;
        assert_eq!(id1, id2);
        assert_ne!(id1, TransactionId::new());
    }

    #[test]
    fn test_id_serialization() {
        let id = GoalId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = TransactionId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);

        let prefixed: TransactionId = format!("txn-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_legacy_ids_are_stable_and_distinct() {
        assert_eq!(
            TransactionId::from_legacy(140_234_567),
            TransactionId::from_legacy(140_234_567)
        );
        assert_ne!(TransactionId::from_legacy(1), TransactionId::from_legacy(2));
    }
}

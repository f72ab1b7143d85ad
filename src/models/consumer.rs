use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Prefix used for synthetic consumer ids.
const SYNTHETIC_PREFIX: &str = "mock-";

/// Identity of someone who eats meals.
///
/// Serialized as a string: `"7"` for a family member, `"mock-3"` for a
/// synthetic placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConsumerId {
    Member(u32),
    Synthetic(u32),
}

impl ConsumerId {
    /// Family member id as persisted in the plan store; synthetic consumers have none.
    pub fn member_id(self) -> Option<u32> {
        match self {
            ConsumerId::Member(id) => Some(id),
            ConsumerId::Synthetic(_) => None,
        }
    }

    pub fn is_synthetic(self) -> bool {
        matches!(self, ConsumerId::Synthetic(_))
    }
}

impl fmt::Display for ConsumerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsumerId::Member(id) => write!(f, "{}", id),
            ConsumerId::Synthetic(n) => write!(f, "{}{}", SYNTHETIC_PREFIX, n),
        }
    }
}

impl FromStr for ConsumerId {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidConsumerId(s.to_string());
        match s.strip_prefix(SYNTHETIC_PREFIX) {
            Some(n) => n.parse().map(ConsumerId::Synthetic).map_err(|_| invalid()),
            None => s.parse().map(ConsumerId::Member).map_err(|_| invalid()),
        }
    }
}

impl From<ConsumerId> for String {
    fn from(id: ConsumerId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for ConsumerId {
    type Error = PlannerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A family member record from the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: u32,
    pub name: String,
}

/// Someone who receives one assignment per slot they take part in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consumer {
    pub id: ConsumerId,
    pub display_name: String,
}

impl Consumer {
    /// Placeholder eater number `n` (1-based).
    pub fn synthetic(n: u32) -> Self {
        Self {
            id: ConsumerId::Synthetic(n),
            display_name: format!("Eater {}", n),
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.id.is_synthetic()
    }
}

impl From<&FamilyMember> for Consumer {
    fn from(member: &FamilyMember) -> Self {
        Self {
            id: ConsumerId::Member(member.id),
            display_name: member.name.clone(),
        }
    }
}

impl PartialEq for Consumer {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Consumer {}

impl std::hash::Hash for Consumer {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumer_id_display_and_parse() {
        assert_eq!(ConsumerId::Member(42).to_string(), "42");
        assert_eq!(ConsumerId::Synthetic(3).to_string(), "mock-3");
        assert_eq!("42".parse::<ConsumerId>().unwrap(), ConsumerId::Member(42));
        assert_eq!(
            "mock-3".parse::<ConsumerId>().unwrap(),
            ConsumerId::Synthetic(3)
        );
        assert!("mock-x".parse::<ConsumerId>().is_err());
        assert!("alice".parse::<ConsumerId>().is_err());
    }

    #[test]
    fn test_consumer_id_serializes_as_string() {
        let json = serde_json::to_string(&ConsumerId::Synthetic(1)).unwrap();
        assert_eq!(json, "\"mock-1\"");
        let id: ConsumerId = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(id, ConsumerId::Member(5));
    }

    #[test]
    fn test_member_id_mapping() {
        assert_eq!(ConsumerId::Member(9).member_id(), Some(9));
        assert_eq!(ConsumerId::Synthetic(9).member_id(), None);
    }

    #[test]
    fn test_consumer_equality_by_id() {
        let a = Consumer {
            id: ConsumerId::Member(1),
            display_name: "Anna".to_string(),
        };
        let b = Consumer {
            id: ConsumerId::Member(1),
            display_name: "Anya".to_string(),
        };
        assert_eq!(a, b);
        assert_ne!(a, Consumer::synthetic(1));
    }
}

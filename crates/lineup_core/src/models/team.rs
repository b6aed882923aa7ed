use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Sport, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    /// Fresh random identity.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A coach's team. `sport` and `owner_id` never change after creation;
/// `formation` follows the last applied formation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub sport: Sport,
    pub owner_id: UserId,
    #[serde(default)]
    pub formation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    pub fn new(name: impl Into<String>, sport: Sport, owner_id: UserId) -> Self {
        Self {
            id: TeamId::generate(),
            name: name.into(),
            sport,
            owner_id,
            formation: None,
            created_at: Utc::now(),
        }
    }
}

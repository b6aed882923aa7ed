use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::LineupError;

/// Sports a team can be created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Football,
    Volleyball,
    Badminton,
}

impl Sport {
    pub fn all() -> Vec<Sport> {
        vec![Self::Football, Self::Volleyball, Self::Badminton]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Football => "football",
            Self::Volleyball => "volleyball",
            Self::Badminton => "badminton",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = LineupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "football" => Ok(Self::Football),
            "volleyball" => Ok(Self::Volleyball),
            "badminton" => Ok(Self::Badminton),
            other => Err(LineupError::Configuration(format!("unknown sport: {}", other))),
        }
    }
}

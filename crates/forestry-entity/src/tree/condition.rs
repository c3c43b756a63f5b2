//! Tree condition enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Observed condition of a measured tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tree_condition", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TreeCondition {
    /// Standing and healthy.
    Healthy,
    /// Standing with visible disease or damage.
    Diseased,
    /// Standing dead.
    Dead,
    /// Fallen or uprooted.
    Fallen,
}

impl TreeCondition {
    /// Return the condition as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Diseased => "diseased",
            Self::Dead => "dead",
            Self::Fallen => "fallen",
        }
    }
}

impl fmt::Display for TreeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TreeCondition {
    type Err = forestry_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "healthy" | "sano" => Ok(Self::Healthy),
            "diseased" | "enfermo" => Ok(Self::Diseased),
            "dead" | "muerto" => Ok(Self::Dead),
            "fallen" | "caido" => Ok(Self::Fallen),
            _ => Err(forestry_core::AppError::validation(format!(
                "Invalid tree condition: '{s}'. Expected one of: healthy, diseased, dead, fallen"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_including_legacy_names() {
        assert_eq!(
            "healthy".parse::<TreeCondition>().unwrap(),
            TreeCondition::Healthy
        );
        assert_eq!(
            "Sano".parse::<TreeCondition>().unwrap(),
            TreeCondition::Healthy
        );
        assert!("stump".parse::<TreeCondition>().is_err());
    }
}

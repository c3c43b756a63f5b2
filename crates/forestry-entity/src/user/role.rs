//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the forestry inventory system.
///
/// - Administrator: full access to web admin and mobile app, manages users.
/// - Supervisor: full mobile access, leads field teams, no user management.
/// - ForestTechnician: mobile field capture.
/// - Consultant: read-only access for queries and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full system administrator.
    Administrator,
    /// Field team supervisor.
    Supervisor,
    /// Field data capture technician.
    ForestTechnician,
    /// Read-only consultant.
    Consultant,
}

impl UserRole {
    /// Check if this role is an administrator.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Administrator)
    }

    /// Check if this role performs field work (may create and edit records).
    pub fn is_staff(&self) -> bool {
        matches!(
            self,
            Self::Administrator | Self::Supervisor | Self::ForestTechnician
        )
    }

    /// Return the role as its canonical snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Supervisor => "supervisor",
            Self::ForestTechnician => "forest_technician",
            Self::Consultant => "consultant",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = forestry_core::AppError;

    /// Parse a role string, failing closed on unrecognized input.
    ///
    /// Accepts the canonical names plus the legacy Spanish spellings the
    /// mobile field app still sends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "administrator" | "administrador" => Ok(Self::Administrator),
            "supervisor" => Ok(Self::Supervisor),
            "forest_technician" | "foresttechnician" | "tecnicoforestal" => {
                Ok(Self::ForestTechnician)
            }
            "consultant" | "consultor" => Ok(Self::Consultant),
            _ => Err(forestry_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: administrator, supervisor, forest_technician, consultant"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        assert_eq!(
            "administrator".parse::<UserRole>().unwrap(),
            UserRole::Administrator
        );
        assert_eq!(
            "forest_technician".parse::<UserRole>().unwrap(),
            UserRole::ForestTechnician
        );
        assert_eq!(
            "Consultant".parse::<UserRole>().unwrap(),
            UserRole::Consultant
        );
    }

    #[test]
    fn parses_legacy_spanish_names() {
        assert_eq!(
            "Administrador".parse::<UserRole>().unwrap(),
            UserRole::Administrator
        );
        assert_eq!(
            "TecnicoForestal".parse::<UserRole>().unwrap(),
            UserRole::ForestTechnician
        );
        assert_eq!("Consultor".parse::<UserRole>().unwrap(), UserRole::Consultant);
    }

    #[test]
    fn fails_closed_on_unknown_input() {
        assert!("root".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
        assert!("3".parse::<UserRole>().is_err());
    }

    #[test]
    fn staff_excludes_consultant() {
        assert!(UserRole::Administrator.is_staff());
        assert!(UserRole::Supervisor.is_staff());
        assert!(UserRole::ForestTechnician.is_staff());
        assert!(!UserRole::Consultant.is_staff());
    }
}

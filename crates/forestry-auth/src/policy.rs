//! Named role policies for route gating.

use forestry_core::error::AppError;
use forestry_entity::user::UserRole;

/// A named access policy a route can require.
///
/// Policies map to fixed sets of allowed roles; the access-control gate
/// checks the authenticated role against the route's declared policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Administrators only (user management, destructive operations).
    AdminOnly,
    /// Field staff: administrators, supervisors, and forest technicians.
    Staff,
    /// Any authenticated role.
    Authenticated,
}

impl RoutePolicy {
    /// Whether the given role satisfies this policy.
    pub fn allows(&self, role: UserRole) -> bool {
        match self {
            Self::AdminOnly => role.is_admin(),
            Self::Staff => role.is_staff(),
            Self::Authenticated => true,
        }
    }

    /// Checks the role against this policy, returning an authorization
    /// error on mismatch.
    pub fn check(&self, role: UserRole) -> Result<(), AppError> {
        if self.allows(role) {
            Ok(())
        } else {
            Err(AppError::authorization(match self {
                Self::AdminOnly => "Administrator access required",
                Self::Staff => "Field staff access required",
                Self::Authenticated => "Authentication required",
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_only_rejects_everyone_else() {
        assert!(RoutePolicy::AdminOnly.allows(UserRole::Administrator));
        assert!(!RoutePolicy::AdminOnly.allows(UserRole::Supervisor));
        assert!(!RoutePolicy::AdminOnly.allows(UserRole::ForestTechnician));
        assert!(!RoutePolicy::AdminOnly.allows(UserRole::Consultant));
    }

    #[test]
    fn staff_excludes_consultants() {
        assert!(RoutePolicy::Staff.allows(UserRole::Administrator));
        assert!(RoutePolicy::Staff.allows(UserRole::Supervisor));
        assert!(RoutePolicy::Staff.allows(UserRole::ForestTechnician));
        assert!(!RoutePolicy::Staff.allows(UserRole::Consultant));
    }

    #[test]
    fn check_maps_to_authorization_error() {
        let err = RoutePolicy::AdminOnly.check(UserRole::Consultant).unwrap_err();
        assert_eq!(err.kind, forestry_core::error::ErrorKind::Authorization);
        assert!(RoutePolicy::Authenticated.check(UserRole::Consultant).is_ok());
    }
}

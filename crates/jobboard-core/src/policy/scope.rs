//! Role-scoped listing of applications

use crate::policy::Actor;
use crate::value_objects::Role;

/// Which applications a listing may return for an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationScope {
    All,
    /// Applications to jobs of companies owned by this user
    OwnedCompanies(i64),
    /// Applications submitted by this user
    Applicant(i64),
}

impl ApplicationScope {
    pub fn for_actor(actor: &Actor) -> Self {
        match actor.role {
            Role::Admin => Self::All,
            Role::Employer => Self::OwnedCompanies(actor.id),
            Role::Seeker => Self::Applicant(actor.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_per_role() {
        assert_eq!(
            ApplicationScope::for_actor(&Actor::new(1, Role::Admin)),
            ApplicationScope::All
        );
        assert_eq!(
            ApplicationScope::for_actor(&Actor::new(2, Role::Employer)),
            ApplicationScope::OwnedCompanies(2)
        );
        assert_eq!(
            ApplicationScope::for_actor(&Actor::new(3, Role::Seeker)),
            ApplicationScope::Applicant(3)
        );
    }
}

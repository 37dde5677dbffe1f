//! Ownership resolver

use std::fmt;

use crate::error::DomainError;
use crate::value_objects::{Capabilities, Role};

/// The authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub role: Role,
}

impl Actor {
    pub fn new(id: i64, role: Role) -> Self {
        Self { id, role }
    }

    #[inline]
    pub fn capabilities(&self) -> Capabilities {
        self.role.capabilities()
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.capabilities().has(Capabilities::MODERATE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    List,
    Create,
    Update,
    Delete,
}

/// The record being acted on, reduced to the ownership facts the rules need
///
/// For `Create`, the target describes the record that would exist afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Company { owner_id: i64 },
    Job { company_owner_id: i64 },
    Application { applicant_id: i64, company_owner_id: i64 },
    User { id: i64, role: Role },
    /// Platform-wide data: admin listings, reports, settings, audit log
    Platform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    InsufficientRole,
    NotCompanyOwner,
    NotReferencedCompanyOwner,
    NotJobOwner,
    NotHostingCompanyOwner,
    NotApplicationParty,
    NotSelf,
    AdminOnly,
    ProtectedAdmin,
}

impl DenyReason {
    pub fn message(self) -> &'static str {
        match self {
            Self::InsufficientRole => "Unauthorized. Insufficient role.",
            Self::NotCompanyOwner | Self::NotApplicationParty | Self::NotSelf => "Unauthorized",
            Self::NotReferencedCompanyOwner => "Unauthorized. You do not own this company.",
            Self::NotJobOwner => "Unauthorized. You do not own the company for this job.",
            Self::NotHostingCompanyOwner => {
                "Unauthorized. You do not own the company hosting this job."
            }
            Self::AdminOnly => "Unauthorized. Admin access required.",
            Self::ProtectedAdmin => "Cannot delete admin user.",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    #[inline]
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            Self::Allow => Ok(()),
            Self::Deny(reason) => Err(DomainError::Forbidden(reason)),
        }
    }
}

fn allow_if(condition: bool, reason: DenyReason) -> Decision {
    if condition {
        Decision::Allow
    } else {
        Decision::Deny(reason)
    }
}

/// Decide whether `actor` may perform `action` on `target`
///
/// Rules are evaluated in precedence order: admin moderation first, then
/// role capabilities, then ownership along User -> Company -> Job -> Application.
pub fn authorize(actor: &Actor, action: Action, target: &Target) -> Decision {
    let caps = actor.capabilities();

    if actor.is_admin() {
        match (action, target) {
            (Action::Delete, Target::User { role: Role::Admin, .. }) => {
                return Decision::Deny(DenyReason::ProtectedAdmin);
            }
            // Creation still follows role capabilities below
            (Action::Create, _) => {}
            _ => return Decision::Allow,
        }
    }

    match (action, target) {
        (Action::Read | Action::List, Target::Company { .. } | Target::Job { .. }) => {
            Decision::Allow
        }
        (Action::Read | Action::List, Target::Application { .. }) => Decision::Allow,

        (Action::Create, Target::Company { owner_id }) => {
            if !caps.has(Capabilities::MANAGE_COMPANIES) {
                return Decision::Deny(DenyReason::InsufficientRole);
            }
            allow_if(*owner_id == actor.id, DenyReason::NotCompanyOwner)
        }
        (Action::Update | Action::Delete, Target::Company { owner_id }) => {
            allow_if(*owner_id == actor.id, DenyReason::NotCompanyOwner)
        }

        (Action::Create, Target::Job { company_owner_id }) => {
            if !caps.has(Capabilities::POST_JOBS) {
                return Decision::Deny(DenyReason::InsufficientRole);
            }
            allow_if(
                *company_owner_id == actor.id,
                DenyReason::NotReferencedCompanyOwner,
            )
        }
        (Action::Update | Action::Delete, Target::Job { company_owner_id }) => {
            allow_if(*company_owner_id == actor.id, DenyReason::NotJobOwner)
        }

        (Action::Create, Target::Application { .. }) => {
            allow_if(caps.has(Capabilities::APPLY), DenyReason::InsufficientRole)
        }
        (Action::Update, Target::Application { company_owner_id, .. }) => allow_if(
            *company_owner_id == actor.id,
            DenyReason::NotHostingCompanyOwner,
        ),
        (Action::Delete, Target::Application { applicant_id, company_owner_id }) => allow_if(
            *applicant_id == actor.id || *company_owner_id == actor.id,
            DenyReason::NotApplicationParty,
        ),

        (Action::Read | Action::Update, Target::User { id, .. }) => {
            allow_if(*id == actor.id, DenyReason::NotSelf)
        }
        (_, Target::User { .. }) => Decision::Deny(DenyReason::AdminOnly),

        (_, Target::Platform) => Decision::Deny(DenyReason::AdminOnly),
    }
}

//! Capability bitflags derived from account roles
//!
//! Roles are coarse; the access policy asks for capabilities instead so the
//! checks read as "may this actor post jobs" rather than "is this an employer".

use bitflags::bitflags;

bitflags! {
    /// What an actor is allowed to do, independent of ownership
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u32 {
        /// Read public listings and single records
        const BROWSE              = 1 << 0;
        /// Submit job applications
        const APPLY               = 1 << 1;
        /// Create and manage owned companies
        const MANAGE_COMPANIES    = 1 << 2;
        /// Post jobs for owned companies
        const POST_JOBS           = 1 << 3;
        /// Move applications through the hiring workflow
        const REVIEW_APPLICATIONS = 1 << 4;
        /// Cross-entity moderation and platform settings
        const MODERATE            = 1 << 5;

        const SEEKER = Self::BROWSE.bits() | Self::APPLY.bits();

        const EMPLOYER = Self::BROWSE.bits()
            | Self::MANAGE_COMPANIES.bits()
            | Self::POST_JOBS.bits()
            | Self::REVIEW_APPLICATIONS.bits();

        const ADMIN = Self::BROWSE.bits() | Self::MODERATE.bits();
    }
}

impl Capabilities {
    /// Check if the set contains a required capability
    #[inline]
    pub fn has(&self, capability: Capabilities) -> bool {
        self.contains(capability)
    }

    /// Names of the individual capabilities that are set
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeker_capabilities() {
        let caps = Capabilities::SEEKER;
        assert!(caps.has(Capabilities::APPLY));
        assert!(!caps.has(Capabilities::POST_JOBS));
        assert!(!caps.has(Capabilities::MODERATE));
    }

    #[test]
    fn test_employer_capabilities() {
        let caps = Capabilities::EMPLOYER;
        assert!(caps.has(Capabilities::POST_JOBS));
        assert!(caps.has(Capabilities::MANAGE_COMPANIES));
        assert!(caps.has(Capabilities::REVIEW_APPLICATIONS));
        assert!(!caps.has(Capabilities::APPLY));
    }

    #[test]
    fn test_moderation_does_not_grant_creation() {
        let caps = Capabilities::ADMIN;
        assert!(caps.has(Capabilities::MODERATE));
        assert!(!caps.has(Capabilities::POST_JOBS));
        assert!(!caps.has(Capabilities::APPLY));
    }

    #[test]
    fn test_list_names() {
        let list = Capabilities::SEEKER.list();
        assert!(list.contains(&"BROWSE"));
        assert!(list.contains(&"APPLY"));
        assert!(!list.contains(&"MODERATE"));
    }
}

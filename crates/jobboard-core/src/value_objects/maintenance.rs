//! Maintenance mode and the request admission rule

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::Role;

/// Setting key holding the maintenance flag
pub const MAINTENANCE_SETTING_KEY: &str = "maintenance_mode";

/// Final path segments that stay reachable during maintenance
const EXEMPT_SEGMENTS: [&str; 3] = ["login", "logout", "register"];

/// Process-wide maintenance switch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaintenanceMode {
    On,
    #[default]
    Off,
}

impl MaintenanceMode {
    /// Interpret a stored setting value; a missing row means off
    pub fn from_setting(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("on") => Self::On,
            _ => Self::Off,
        }
    }

    pub fn from_bool(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }

    #[inline]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    /// Whether a request for `path` made by an actor with `role` may proceed
    pub fn admits(self, path: &str, role: Option<Role>) -> bool {
        !self.is_on() || role == Some(Role::Admin) || is_exempt_path(path)
    }
}

impl fmt::Display for MaintenanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Auth endpoints are reachable under any prefix and casing
pub(crate) fn is_exempt_path(path: &str) -> bool {
    let last = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    EXEMPT_SEGMENTS
        .iter()
        .any(|segment| last.eq_ignore_ascii_case(segment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_is_off() {
        assert_eq!(MaintenanceMode::from_setting(None), MaintenanceMode::Off);
        assert_eq!(MaintenanceMode::from_setting(Some("off")), MaintenanceMode::Off);
        assert_eq!(MaintenanceMode::from_setting(Some("garbage")), MaintenanceMode::Off);
        assert_eq!(MaintenanceMode::from_setting(Some("on")), MaintenanceMode::On);
    }

    #[test]
    fn test_exempt_paths() {
        assert!(is_exempt_path("/api/login"));
        assert!(is_exempt_path("/login"));
        assert!(is_exempt_path("/API/LOGOUT"));
        assert!(is_exempt_path("/api/register/"));
        assert!(!is_exempt_path("/api/jobs"));
        assert!(!is_exempt_path("/api/login/extra"));
        assert!(!is_exempt_path("/api/relogin"));
    }

    #[test]
    fn test_off_admits_everyone() {
        assert!(MaintenanceMode::Off.admits("/api/jobs", None));
    }

    #[test]
    fn test_on_blocks_non_admins() {
        let mode = MaintenanceMode::On;
        assert!(!mode.admits("/api/jobs", None));
        assert!(!mode.admits("/api/jobs", Some(Role::Seeker)));
        assert!(!mode.admits("/api/stats", Some(Role::Employer)));
        assert!(mode.admits("/api/admin/stats", Some(Role::Admin)));
        assert!(mode.admits("/api/login", None));
    }
}

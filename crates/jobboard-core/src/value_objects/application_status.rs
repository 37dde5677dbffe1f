//! Application workflow states and the transition table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Hiring workflow state of an application
///
/// `applied -> shortlisted -> interview_scheduled -> interviewed -> hired | failed`,
/// with `rejected` reachable from the first three states. Withdrawal is not a
/// state: the applicant deletes the record instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    #[serde(alias = "pending")]
    Applied,
    Shortlisted,
    InterviewScheduled,
    Interviewed,
    Hired,
    Rejected,
    Failed,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        Self::Applied,
        Self::Shortlisted,
        Self::InterviewScheduled,
        Self::Interviewed,
        Self::Hired,
        Self::Rejected,
        Self::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Shortlisted => "shortlisted",
            Self::InterviewScheduled => "interview_scheduled",
            Self::Interviewed => "interviewed",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }

    /// States reachable in one step
    pub fn next_states(self) -> &'static [ApplicationStatus] {
        match self {
            Self::Applied => &[Self::Shortlisted, Self::Rejected],
            Self::Shortlisted => &[Self::InterviewScheduled, Self::Rejected],
            Self::InterviewScheduled => &[Self::Interviewed, Self::Rejected],
            Self::Interviewed => &[Self::Hired, Self::Failed],
            Self::Hired | Self::Rejected | Self::Failed => &[],
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self.next_states().is_empty()
    }

    /// Re-asserting the current state is always accepted
    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        self == next || self.next_states().contains(&next)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" | "pending" => Ok(Self::Applied),
            "shortlisted" => Ok(Self::Shortlisted),
            "interview_scheduled" => Ok(Self::InterviewScheduled),
            "interviewed" => Ok(Self::Interviewed),
            "hired" => Ok(Self::Hired),
            "rejected" => Ok(Self::Rejected),
            "failed" => Ok(Self::Failed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// How status updates are checked against the transition table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Only edges of the transition table are accepted
    #[default]
    Strict,
    /// Any known status may be assigned from any state
    Permissive,
}

impl TransitionPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Permissive
        }
    }

    pub fn check(self, from: ApplicationStatus, to: ApplicationStatus) -> Result<(), DomainError> {
        match self {
            Self::Permissive => Ok(()),
            Self::Strict if from.can_transition_to(to) => Ok(()),
            Self::Strict => Err(DomainError::InvalidTransition { from, to }),
        }
    }
}

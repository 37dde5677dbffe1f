//! Company entity - owned by an employer

use chrono::{DateTime, Utc};

use super::assign;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Company {
    #[inline]
    pub fn is_owner(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// Apply the supplied fields; the rest keep their stored values
    pub fn apply_changes(&mut self, changes: CompanyChanges) {
        assign(&mut self.name, changes.name);
        assign(&mut self.description, changes.description);
        assign(&mut self.website, changes.website);
        assign(&mut self.logo, changes.logo);
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Clone)]
pub struct NewCompany {
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
}

/// Partial company edit. `None` leaves a field alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub logo: Option<Option<String>>,
}

//! Role-specific dashboard summary

use jobboard_core::{Actor, ApplicationScope, ApplicationStatus, Role};
use tracing::instrument;

use crate::dto::{DashboardResponse, LabelValue};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::relations::Relations;

/// Applications shown under recent activity
const RECENT_ACTIVITY_LIMIT: i64 = 10;

pub struct DashboardService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DashboardService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn summary(&self, actor: &Actor) -> ServiceResult<DashboardResponse> {
        let scope = ApplicationScope::for_actor(actor);
        let reporting = self.ctx.reporting_repo();
        let applications = self.ctx.application_repo();

        let stats = match actor.role {
            Role::Employer => vec![
                LabelValue {
                    label: "Total Jobs Posted",
                    value: reporting.count_jobs_owned_by(actor.id).await?,
                },
                LabelValue {
                    label: "Total Applications Received",
                    value: applications.count(scope, None).await?,
                },
                LabelValue {
                    label: "Total Companies",
                    value: reporting.count_companies_owned_by(actor.id).await?,
                },
            ],
            Role::Seeker => vec![
                LabelValue {
                    label: "Jobs Applied",
                    value: applications.count(scope, None).await?,
                },
                LabelValue {
                    label: "Accepted Applications",
                    value: applications
                        .count(scope, Some(ApplicationStatus::Hired))
                        .await?,
                },
                LabelValue {
                    label: "Total Companies",
                    value: reporting.count_companies().await?,
                },
            ],
            Role::Admin => vec![
                LabelValue {
                    label: "Total Users",
                    value: reporting.count_users(None).await?,
                },
                LabelValue {
                    label: "Total Jobs",
                    value: reporting.count_jobs(None).await?,
                },
                LabelValue {
                    label: "Total Applications",
                    value: applications.count(scope, None).await?,
                },
            ],
        };

        let recent = applications.recent(scope, RECENT_ACTIVITY_LIMIT).await?;
        let recent_activity = Relations::new(self.ctx).application_views(recent).await?;

        Ok(DashboardResponse {
            role: actor.role,
            stats,
            recent_activity,
        })
    }
}

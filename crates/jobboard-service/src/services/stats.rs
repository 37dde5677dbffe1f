//! Public landing page statistics

use jobboard_core::reporting::TOP_CATEGORY_LIMIT;
use jobboard_core::Role;
use tracing::instrument;

use crate::dto::{CategoryCount, LandingCounts, LandingStatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Job, company and candidate totals plus the most used categories
    #[instrument(skip(self))]
    pub async fn landing(&self) -> ServiceResult<LandingStatsResponse> {
        let reporting = self.ctx.reporting_repo();

        let stats = LandingCounts {
            active_jobs: reporting.count_jobs(None).await?,
            companies: reporting.count_companies().await?,
            candidates: reporting.count_users(Some(Role::Seeker)).await?,
        };

        let categories = reporting
            .top_categories(TOP_CATEGORY_LIMIT)
            .await?
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();

        Ok(LandingStatsResponse { stats, categories })
    }
}

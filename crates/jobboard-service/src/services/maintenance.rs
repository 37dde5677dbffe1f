//! Maintenance mode service
//!
//! The flag lives in the settings table and is read fresh on every call.

use jobboard_core::{MaintenanceMode, MAINTENANCE_SETTING_KEY};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct MaintenanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current mode; a missing setting row means off
    #[instrument(skip(self))]
    pub async fn current(&self) -> ServiceResult<MaintenanceMode> {
        let value = self.ctx.setting_repo().get(MAINTENANCE_SETTING_KEY).await?;
        Ok(MaintenanceMode::from_setting(value.as_deref()))
    }

    /// Store a new mode
    #[instrument(skip(self))]
    pub async fn set(&self, mode: MaintenanceMode) -> ServiceResult<()> {
        self.ctx
            .setting_repo()
            .put(MAINTENANCE_SETTING_KEY, mode.as_str())
            .await?;
        info!(mode = %mode, "Maintenance mode changed");
        Ok(())
    }
}

use chrono::{Duration, Utc};

use crate::domain::repository::StatsRepository;
use crate::domain::types::{PlatformStats, RECENT_USER_WINDOW_DAYS};
use crate::error::AdminServiceError;

/// Gathers the dashboard counters in one pass.
pub struct FetchStatsUseCase<S> {
    pub stats_repo: S,
}

impl<S: StatsRepository> FetchStatsUseCase<S> {
    pub async fn execute(&self) -> Result<PlatformStats, AdminServiceError> {
        let cutoff = Utc::now() - Duration::days(RECENT_USER_WINDOW_DAYS);

        Ok(PlatformStats {
            total_users: self.stats_repo.count_profiles().await?,
            total_images: self.stats_repo.count_images().await?,
            total_captions: self.stats_repo.count_captions().await?,
            total_votes: self.stats_repo.count_votes().await?,
            superadmins: self.stats_repo.count_superadmins().await?,
            recent_users: self.stats_repo.count_profiles_since(cutoff).await?,
        })
    }
}

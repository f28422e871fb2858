use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::domain::types::PlatformStats;
use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::stats::FetchStatsUseCase;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_users: u64,
    pub total_images: u64,
    pub total_captions: u64,
    pub total_votes: u64,
    pub superadmins: u64,
    pub recent_users: u64,
}

impl From<PlatformStats> for StatsResponse {
    fn from(stats: PlatformStats) -> Self {
        Self {
            total_users: stats.total_users,
            total_images: stats.total_images,
            total_captions: stats.total_captions,
            total_votes: stats.total_votes,
            superadmins: stats.superadmins,
            recent_users: stats.recent_users,
        }
    }
}

pub async fn dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AdminServiceError> {
    let usecase = FetchStatsUseCase {
        stats_repo: state.stats_repo(),
    };
    let stats = usecase.execute().await?;

    Ok(Json(stats.into()))
}

use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbFlavorRepository, DbProfileRepository, DbStatsRepository, DbStepRepository,
};
use crate::infra::identity::HttpIdentityClient;

/// Redirect targets used by the access guard.
#[derive(Clone)]
pub struct GuardRoutes {
    pub login: String,
    pub unauthorized: String,
}

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub identity: HttpIdentityClient,
    pub guard_routes: GuardRoutes,
    pub cookie_domain: String,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn flavor_repo(&self) -> DbFlavorRepository {
        DbFlavorRepository {
            db: self.db.clone(),
        }
    }

    pub fn step_repo(&self) -> DbStepRepository {
        DbStepRepository {
            db: self.db.clone(),
        }
    }

    pub fn stats_repo(&self) -> DbStatsRepository {
        DbStatsRepository {
            db: self.db.clone(),
        }
    }
}

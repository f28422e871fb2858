use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::HumorFlavor;
use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::flavor::{
    CreateFlavorUseCase, DeleteFlavorUseCase, ListFlavorsUseCase, UpdateFlavorUseCase,
};

#[derive(Debug, Serialize)]
pub struct FlavorResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "capvote_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<HumorFlavor> for FlavorResponse {
    fn from(flavor: HumorFlavor) -> Self {
        Self {
            id: flavor.id,
            name: flavor.name,
            description: flavor.description,
            created_at: flavor.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateFlavorRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateFlavorRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

pub async fn list_flavors(
    State(state): State<AppState>,
) -> Result<Json<Vec<FlavorResponse>>, AdminServiceError> {
    let usecase = ListFlavorsUseCase {
        flavor_repo: state.flavor_repo(),
    };
    let flavors = usecase.execute().await?;

    Ok(Json(flavors.into_iter().map(Into::into).collect()))
}

pub async fn create_flavor(
    State(state): State<AppState>,
    Json(body): Json<CreateFlavorRequest>,
) -> Result<(StatusCode, Json<FlavorResponse>), AdminServiceError> {
    let usecase = CreateFlavorUseCase {
        flavor_repo: state.flavor_repo(),
    };
    let flavor = usecase.execute(&body.name, &body.description).await?;

    Ok((StatusCode::CREATED, Json(flavor.into())))
}

pub async fn update_flavor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateFlavorRequest>,
) -> Result<StatusCode, AdminServiceError> {
    let usecase = UpdateFlavorUseCase {
        flavor_repo: state.flavor_repo(),
    };
    usecase.execute(id, &body.name, &body.description).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_flavor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AdminServiceError> {
    let usecase = DeleteFlavorUseCase {
        flavor_repo: state.flavor_repo(),
    };
    usecase.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

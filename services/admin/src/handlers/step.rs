use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::FlavorStep;
use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::step::{
    CreateStepUseCase, DeleteStepUseCase, ListStepsUseCase, UpdateStepUseCase,
};

#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub id: Uuid,
    pub flavor_id: Uuid,
    pub step_number: i32,
    pub instruction: String,
    #[serde(serialize_with = "capvote_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<FlavorStep> for StepResponse {
    fn from(step: FlavorStep) -> Self {
        Self {
            id: step.id,
            flavor_id: step.flavor_id,
            step_number: step.step_number,
            instruction: step.instruction,
            created_at: step.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateStepRequest {
    pub step_number: Option<i32>,
    pub instruction: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStepRequest {
    pub step_number: i32,
    pub instruction: String,
}

pub async fn list_steps(
    State(state): State<AppState>,
    Path(flavor_id): Path<Uuid>,
) -> Result<Json<Vec<StepResponse>>, AdminServiceError> {
    let usecase = ListStepsUseCase {
        flavor_repo: state.flavor_repo(),
        step_repo: state.step_repo(),
    };
    let steps = usecase.execute(flavor_id).await?;

    Ok(Json(steps.into_iter().map(Into::into).collect()))
}

pub async fn create_step(
    State(state): State<AppState>,
    Path(flavor_id): Path<Uuid>,
    Json(body): Json<CreateStepRequest>,
) -> Result<(StatusCode, Json<StepResponse>), AdminServiceError> {
    let usecase = CreateStepUseCase {
        flavor_repo: state.flavor_repo(),
        step_repo: state.step_repo(),
    };
    let step = usecase
        .execute(flavor_id, body.step_number, &body.instruction)
        .await?;

    Ok((StatusCode::CREATED, Json(step.into())))
}

pub async fn update_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStepRequest>,
) -> Result<StatusCode, AdminServiceError> {
    let usecase = UpdateStepUseCase {
        step_repo: state.step_repo(),
    };
    usecase
        .execute(id, body.step_number, &body.instruction)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_step(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AdminServiceError> {
    let usecase = DeleteStepUseCase {
        step_repo: state.step_repo(),
    };
    usecase.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{FlavorRepository, StepRepository};
use crate::domain::types::{FlavorStep, normalized_non_empty};
use crate::error::AdminServiceError;

fn validate_step_number(step_number: i32) -> Result<(), AdminServiceError> {
    if step_number < 1 {
        return Err(AdminServiceError::Validation("step number must be at least 1"));
    }
    Ok(())
}

/// Lists the steps of one flavor in sequence order.
pub struct ListStepsUseCase<F, S> {
    pub flavor_repo: F,
    pub step_repo: S,
}

impl<F: FlavorRepository, S: StepRepository> ListStepsUseCase<F, S> {
    pub async fn execute(&self, flavor_id: Uuid) -> Result<Vec<FlavorStep>, AdminServiceError> {
        if self.flavor_repo.find_by_id(flavor_id).await?.is_none() {
            return Err(AdminServiceError::FlavorNotFound);
        }

        self.step_repo.list_by_flavor(flavor_id).await
    }
}

/// Appends or inserts a step into a flavor's sequence.
///
/// When no step number is given the step goes to the end of the sequence,
/// one past the current count.
pub struct CreateStepUseCase<F, S> {
    pub flavor_repo: F,
    pub step_repo: S,
}

impl<F: FlavorRepository, S: StepRepository> CreateStepUseCase<F, S> {
    pub async fn execute(
        &self,
        flavor_id: Uuid,
        step_number: Option<i32>,
        instruction: &str,
    ) -> Result<FlavorStep, AdminServiceError> {
        if self.flavor_repo.find_by_id(flavor_id).await?.is_none() {
            return Err(AdminServiceError::FlavorNotFound);
        }

        let instruction = normalized_non_empty(instruction)
            .ok_or(AdminServiceError::Validation("step instruction must not be empty"))?;

        let step_number = match step_number {
            Some(n) => {
                validate_step_number(n)?;
                n
            }
            None => i32::try_from(self.step_repo.count_by_flavor(flavor_id).await? + 1)
                .map_err(|e| AdminServiceError::Internal(e.into()))?,
        };

        if self
            .step_repo
            .number_taken(flavor_id, step_number, None)
            .await?
        {
            return Err(AdminServiceError::StepNumberTaken);
        }

        let step = FlavorStep {
            id: Uuid::now_v7(),
            flavor_id,
            step_number,
            instruction,
            created_at: Utc::now(),
        };
        self.step_repo.insert(&step).await?;

        Ok(step)
    }
}

/// Rewrites a step's position and instruction.
pub struct UpdateStepUseCase<S> {
    pub step_repo: S,
}

impl<S: StepRepository> UpdateStepUseCase<S> {
    pub async fn execute(
        &self,
        id: Uuid,
        step_number: i32,
        instruction: &str,
    ) -> Result<(), AdminServiceError> {
        validate_step_number(step_number)?;

        let instruction = normalized_non_empty(instruction)
            .ok_or(AdminServiceError::Validation("step instruction must not be empty"))?;

        let Some(step) = self.step_repo.find_by_id(id).await? else {
            return Err(AdminServiceError::StepNotFound);
        };

        if self
            .step_repo
            .number_taken(step.flavor_id, step_number, Some(id))
            .await?
        {
            return Err(AdminServiceError::StepNumberTaken);
        }

        if !self.step_repo.update(id, step_number, &instruction).await? {
            return Err(AdminServiceError::StepNotFound);
        }

        Ok(())
    }
}

/// Removes a single step.
pub struct DeleteStepUseCase<S> {
    pub step_repo: S,
}

impl<S: StepRepository> DeleteStepUseCase<S> {
    pub async fn execute(&self, id: Uuid) -> Result<(), AdminServiceError> {
        if !self.step_repo.delete(id).await? {
            return Err(AdminServiceError::StepNotFound);
        }

        Ok(())
    }
}

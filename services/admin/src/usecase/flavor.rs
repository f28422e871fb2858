use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::FlavorRepository;
use crate::domain::types::{HumorFlavor, normalized_non_empty};
use crate::error::AdminServiceError;

/// Lists every flavor, ordered by name.
pub struct ListFlavorsUseCase<F> {
    pub flavor_repo: F,
}

impl<F: FlavorRepository> ListFlavorsUseCase<F> {
    pub async fn execute(&self) -> Result<Vec<HumorFlavor>, AdminServiceError> {
        self.flavor_repo.list().await
    }
}

/// Creates a flavor with a unique, non-empty name.
pub struct CreateFlavorUseCase<F> {
    pub flavor_repo: F,
}

impl<F: FlavorRepository> CreateFlavorUseCase<F> {
    pub async fn execute(
        &self,
        name: &str,
        description: &str,
    ) -> Result<HumorFlavor, AdminServiceError> {
        let name = normalized_non_empty(name)
            .ok_or(AdminServiceError::Validation("flavor name must not be empty"))?;

        if self.flavor_repo.name_taken(&name, None).await? {
            return Err(AdminServiceError::FlavorNameTaken);
        }

        let flavor = HumorFlavor {
            id: Uuid::now_v7(),
            name,
            description: description.trim().to_owned(),
            created_at: Utc::now(),
        };
        self.flavor_repo.insert(&flavor).await?;

        Ok(flavor)
    }
}

/// Renames a flavor and replaces its description.
pub struct UpdateFlavorUseCase<F> {
    pub flavor_repo: F,
}

impl<F: FlavorRepository> UpdateFlavorUseCase<F> {
    pub async fn execute(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<(), AdminServiceError> {
        let name = normalized_non_empty(name)
            .ok_or(AdminServiceError::Validation("flavor name must not be empty"))?;

        if self.flavor_repo.name_taken(&name, Some(id)).await? {
            return Err(AdminServiceError::FlavorNameTaken);
        }

        if !self
            .flavor_repo
            .update(id, &name, description.trim())
            .await?
        {
            return Err(AdminServiceError::FlavorNotFound);
        }

        Ok(())
    }
}

/// Removes a flavor and its steps atomically.
pub struct DeleteFlavorUseCase<F> {
    pub flavor_repo: F,
}

impl<F: FlavorRepository> DeleteFlavorUseCase<F> {
    pub async fn execute(&self, id: Uuid) -> Result<(), AdminServiceError> {
        if !self.flavor_repo.delete_with_steps(id).await? {
            return Err(AdminServiceError::FlavorNotFound);
        }

        Ok(())
    }
}

#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{FlavorStep, HumorFlavor, Profile, SessionUser};
use crate::error::AdminServiceError;

/// Read-only access to user profiles (owned by the identity service).
pub trait ProfileRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AdminServiceError>;
}

/// Repository for humor flavors.
pub trait FlavorRepository: Send + Sync {
    /// All flavors ordered by name ascending.
    async fn list(&self) -> Result<Vec<HumorFlavor>, AdminServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HumorFlavor>, AdminServiceError>;

    /// Whether `name` is already used by a flavor other than `exclude`.
    async fn name_taken(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AdminServiceError>;

    async fn insert(&self, flavor: &HumorFlavor) -> Result<(), AdminServiceError>;

    /// Update name and description. Returns `true` if a row was updated.
    async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<bool, AdminServiceError>;

    /// Delete the flavor and all of its steps in one transaction, steps
    /// first. Returns `true` if the flavor existed.
    async fn delete_with_steps(&self, id: Uuid) -> Result<bool, AdminServiceError>;
}

/// Repository for flavor steps.
pub trait StepRepository: Send + Sync {
    /// Steps of one flavor ordered by `step_number` ascending.
    async fn list_by_flavor(&self, flavor_id: Uuid)
    -> Result<Vec<FlavorStep>, AdminServiceError>;

    async fn count_by_flavor(&self, flavor_id: Uuid) -> Result<u64, AdminServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FlavorStep>, AdminServiceError>;

    /// Whether `step_number` is already used within `flavor_id` by a step
    /// other than `exclude`.
    async fn number_taken(
        &self,
        flavor_id: Uuid,
        step_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool, AdminServiceError>;

    async fn insert(&self, step: &FlavorStep) -> Result<(), AdminServiceError>;

    /// Update step number and instruction. Returns `true` if a row was updated.
    async fn update(
        &self,
        id: Uuid,
        step_number: i32,
        instruction: &str,
    ) -> Result<bool, AdminServiceError>;

    /// Delete a step. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AdminServiceError>;
}

/// Aggregate counters for the dashboard.
pub trait StatsRepository: Send + Sync {
    async fn count_profiles(&self) -> Result<u64, AdminServiceError>;
    async fn count_superadmins(&self) -> Result<u64, AdminServiceError>;
    async fn count_profiles_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AdminServiceError>;
    async fn count_images(&self) -> Result<u64, AdminServiceError>;
    async fn count_captions(&self) -> Result<u64, AdminServiceError>;
    async fn count_votes(&self) -> Result<u64, AdminServiceError>;
}

/// Port for the external identity/session service.
pub trait IdentityPort: Send + Sync {
    /// Resolve the user behind a session token. `None` means the session is
    /// absent or expired; transport failures are errors.
    async fn current_user(
        &self,
        session_token: &str,
    ) -> Result<Option<SessionUser>, AdminServiceError>;

    /// Invalidate a session token.
    async fn sign_out(&self, session_token: &str) -> Result<(), AdminServiceError>;
}

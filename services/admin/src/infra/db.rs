use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use capvote_admin_schema::{
    caption_votes, captions, humor_flavor_steps, humor_flavors, images, profiles,
};

use crate::domain::repository::{
    FlavorRepository, ProfileRepository, StatsRepository, StepRepository,
};
use crate::domain::types::{FlavorStep, HumorFlavor, Profile};
use crate::error::AdminServiceError;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Profile>, AdminServiceError> {
        let model = profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        Ok(model.map(profile_from_model))
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        id: model.id,
        email: model.email,
        is_superadmin: model.is_superadmin,
        created_at: model.created_at,
    }
}

// ── Flavor repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFlavorRepository {
    pub db: DatabaseConnection,
}

impl FlavorRepository for DbFlavorRepository {
    async fn list(&self) -> Result<Vec<HumorFlavor>, AdminServiceError> {
        let models = humor_flavors::Entity::find()
            .order_by_asc(humor_flavors::Column::Name)
            .all(&self.db)
            .await
            .context("list flavors")?;
        Ok(models.into_iter().map(flavor_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<HumorFlavor>, AdminServiceError> {
        let model = humor_flavors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find flavor by id")?;
        Ok(model.map(flavor_from_model))
    }

    async fn name_taken(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, AdminServiceError> {
        let mut query = humor_flavors::Entity::find().filter(humor_flavors::Column::Name.eq(name));
        if let Some(id) = exclude {
            query = query.filter(humor_flavors::Column::Id.ne(id));
        }
        let count = query
            .count(&self.db)
            .await
            .context("count flavors by name")?;
        Ok(count > 0)
    }

    async fn insert(&self, flavor: &HumorFlavor) -> Result<(), AdminServiceError> {
        humor_flavors::ActiveModel {
            id: Set(flavor.id),
            name: Set(flavor.name.clone()),
            description: Set(flavor.description.clone()),
            created_at: Set(flavor.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert flavor")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        name: &str,
        description: &str,
    ) -> Result<bool, AdminServiceError> {
        let result = humor_flavors::Entity::update_many()
            .filter(humor_flavors::Column::Id.eq(id))
            .col_expr(humor_flavors::Column::Name, Expr::value(name))
            .col_expr(humor_flavors::Column::Description, Expr::value(description))
            .exec(&self.db)
            .await
            .context("update flavor")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_with_steps(&self, id: Uuid) -> Result<bool, AdminServiceError> {
        let deleted = self
            .db
            .transaction::<_, bool, sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    humor_flavor_steps::Entity::delete_many()
                        .filter(humor_flavor_steps::Column::FlavorId.eq(id))
                        .exec(txn)
                        .await?;

                    let result = humor_flavors::Entity::delete_many()
                        .filter(humor_flavors::Column::Id.eq(id))
                        .exec(txn)
                        .await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete flavor with steps")?;
        Ok(deleted)
    }
}

fn flavor_from_model(model: humor_flavors::Model) -> HumorFlavor {
    HumorFlavor {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at,
    }
}

// ── Step repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStepRepository {
    pub db: DatabaseConnection,
}

impl StepRepository for DbStepRepository {
    async fn list_by_flavor(
        &self,
        flavor_id: Uuid,
    ) -> Result<Vec<FlavorStep>, AdminServiceError> {
        let models = humor_flavor_steps::Entity::find()
            .filter(humor_flavor_steps::Column::FlavorId.eq(flavor_id))
            .order_by_asc(humor_flavor_steps::Column::StepNumber)
            .all(&self.db)
            .await
            .context("list steps by flavor")?;
        Ok(models.into_iter().map(step_from_model).collect())
    }

    async fn count_by_flavor(&self, flavor_id: Uuid) -> Result<u64, AdminServiceError> {
        let count = humor_flavor_steps::Entity::find()
            .filter(humor_flavor_steps::Column::FlavorId.eq(flavor_id))
            .count(&self.db)
            .await
            .context("count steps by flavor")?;
        Ok(count)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FlavorStep>, AdminServiceError> {
        let model = humor_flavor_steps::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find step by id")?;
        Ok(model.map(step_from_model))
    }

    async fn number_taken(
        &self,
        flavor_id: Uuid,
        step_number: i32,
        exclude: Option<Uuid>,
    ) -> Result<bool, AdminServiceError> {
        let mut query = humor_flavor_steps::Entity::find()
            .filter(humor_flavor_steps::Column::FlavorId.eq(flavor_id))
            .filter(humor_flavor_steps::Column::StepNumber.eq(step_number));
        if let Some(id) = exclude {
            query = query.filter(humor_flavor_steps::Column::Id.ne(id));
        }
        let count = query
            .count(&self.db)
            .await
            .context("count steps by number")?;
        Ok(count > 0)
    }

    async fn insert(&self, step: &FlavorStep) -> Result<(), AdminServiceError> {
        humor_flavor_steps::ActiveModel {
            id: Set(step.id),
            flavor_id: Set(step.flavor_id),
            step_number: Set(step.step_number),
            instruction: Set(step.instruction.clone()),
            created_at: Set(step.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert step")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        step_number: i32,
        instruction: &str,
    ) -> Result<bool, AdminServiceError> {
        let result = humor_flavor_steps::Entity::update_many()
            .filter(humor_flavor_steps::Column::Id.eq(id))
            .col_expr(humor_flavor_steps::Column::StepNumber, Expr::value(step_number))
            .col_expr(humor_flavor_steps::Column::Instruction, Expr::value(instruction))
            .exec(&self.db)
            .await
            .context("update step")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AdminServiceError> {
        let result = humor_flavor_steps::Entity::delete_many()
            .filter(humor_flavor_steps::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete step")?;
        Ok(result.rows_affected > 0)
    }
}

fn step_from_model(model: humor_flavor_steps::Model) -> FlavorStep {
    FlavorStep {
        id: model.id,
        flavor_id: model.flavor_id,
        step_number: model.step_number,
        instruction: model.instruction,
        created_at: model.created_at,
    }
}

// ── Stats repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStatsRepository {
    pub db: DatabaseConnection,
}

impl StatsRepository for DbStatsRepository {
    async fn count_profiles(&self) -> Result<u64, AdminServiceError> {
        let count = profiles::Entity::find()
            .count(&self.db)
            .await
            .context("count profiles")?;
        Ok(count)
    }

    async fn count_superadmins(&self) -> Result<u64, AdminServiceError> {
        let count = profiles::Entity::find()
            .filter(profiles::Column::IsSuperadmin.eq(true))
            .count(&self.db)
            .await
            .context("count superadmins")?;
        Ok(count)
    }

    async fn count_profiles_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, AdminServiceError> {
        let count = profiles::Entity::find()
            .filter(profiles::Column::CreatedAt.gte(cutoff))
            .count(&self.db)
            .await
            .context("count recent profiles")?;
        Ok(count)
    }

    async fn count_images(&self) -> Result<u64, AdminServiceError> {
        let count = images::Entity::find()
            .count(&self.db)
            .await
            .context("count images")?;
        Ok(count)
    }

    async fn count_captions(&self) -> Result<u64, AdminServiceError> {
        let count = captions::Entity::find()
            .count(&self.db)
            .await
            .context("count captions")?;
        Ok(count)
    }

    async fn count_votes(&self) -> Result<u64, AdminServiceError> {
        let count = caption_votes::Entity::find()
            .count(&self.db)
            .await
            .context("count caption votes")?;
        Ok(count)
    }
}

use sea_orm::entity::prelude::*;

/// Registered user profile. Owned by the identity service; the admin service
/// reads it for the superadmin gate and the dashboard counts.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub is_superadmin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::images::Entity")]
    Images,
    #[sea_orm(has_many = "super::captions::Entity")]
    Captions,
    #[sea_orm(has_many = "super::caption_votes::Entity")]
    CaptionVotes,
}

impl Related<super::images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::captions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Captions.def()
    }
}

impl Related<super::caption_votes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CaptionVotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

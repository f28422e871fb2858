use sea_orm::entity::prelude::*;

/// One ordered instruction within a flavor's sequence.
///
/// `(flavor_id, step_number)` carries a unique index; see the migration.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "humor_flavor_steps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub flavor_id: Uuid,
    pub step_number: i32,
    #[sea_orm(column_type = "Text")]
    pub instruction: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::humor_flavors::Entity",
        from = "Column::FlavorId",
        to = "super::humor_flavors::Column::Id"
    )]
    Flavor,
}

impl Related<super::humor_flavors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Flavor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

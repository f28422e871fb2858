use sea_orm_migration::prelude::*;

mod m20260815_000001_create_profiles;
mod m20260815_000002_create_humor_flavors;
mod m20260815_000003_create_humor_flavor_steps;
mod m20260815_000004_create_images;
mod m20260815_000005_create_captions;
mod m20260815_000006_create_caption_votes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_profiles::Migration),
            Box::new(m20260815_000002_create_humor_flavors::Migration),
            Box::new(m20260815_000003_create_humor_flavor_steps::Migration),
            Box::new(m20260815_000004_create_images::Migration),
            Box::new(m20260815_000005_create_captions::Migration),
            Box::new(m20260815_000006_create_caption_votes::Migration),
        ]
    }
}

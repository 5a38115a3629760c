pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_member_table;
mod m20251001_000002_create_friend_table;
mod m20251008_000001_create_team_plan_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_member_table::Migration),
            Box::new(m20251001_000002_create_friend_table::Migration),
            Box::new(m20251008_000001_create_team_plan_tables::Migration),
        ]
    }
}

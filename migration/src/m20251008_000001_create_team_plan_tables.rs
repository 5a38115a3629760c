use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Member {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    Id,
    Name,
    HostId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Plan {
    Table,
    Id,
    TeamId,
    ManagerId,
    Title,
    Date,
    WastedTime,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // teams
        m.create_table(
            Table::create()
                .table(Team::Table)
                .if_not_exists()
                .col(ColumnDef::new(Team::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Team::Name).string().not_null())
                .col(ColumnDef::new(Team::HostId).uuid().not_null())
                .col(ColumnDef::new(Team::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Team::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_host")
                        .from(Team::Table, Team::HostId)
                        .to(Member::Table, Member::Id)
                        .on_delete(ForeignKeyAction::Restrict)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // plans
        m.create_table(
            Table::create()
                .table(Plan::Table)
                .if_not_exists()
                .col(ColumnDef::new(Plan::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Plan::TeamId).uuid().not_null())
                .col(ColumnDef::new(Plan::ManagerId).uuid().not_null())
                .col(ColumnDef::new(Plan::Title).string().not_null())
                .col(ColumnDef::new(Plan::Date).date().not_null())
                .col(ColumnDef::new(Plan::WastedTime).big_integer().not_null().default(0))
                .col(ColumnDef::new(Plan::Status).string_len(16).not_null())
                .col(ColumnDef::new(Plan::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Plan::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_plan_team")
                        .from(Plan::Table, Plan::TeamId)
                        .to(Team::Table, Team::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_plan_manager")
                        .from(Plan::Table, Plan::ManagerId)
                        .to(Member::Table, Member::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_plan_team_date")
                .table(Plan::Table)
                .col(Plan::TeamId)
                .col(Plan::Date)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_plan_manager_date")
                .table(Plan::Table)
                .col(Plan::ManagerId)
                .col(Plan::Date)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Plan::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Team::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

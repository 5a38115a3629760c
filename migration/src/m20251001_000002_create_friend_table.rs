use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Member {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Friend {
    Table,
    Id,
    ApplicantId,
    RespondentId,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline so the table also builds on sqlite
        m.create_table(
            Table::create()
                .table(Friend::Table)
                .if_not_exists()
                .col(ColumnDef::new(Friend::Id).uuid().not_null().primary_key())
                .col(ColumnDef::new(Friend::ApplicantId).uuid().not_null())
                .col(ColumnDef::new(Friend::RespondentId).uuid().not_null())
                .col(ColumnDef::new(Friend::Status).string_len(16).not_null())
                .col(ColumnDef::new(Friend::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Friend::UpdatedAt).timestamp_with_time_zone().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_friend_applicant")
                        .from(Friend::Table, Friend::ApplicantId)
                        .to(Member::Table, Member::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_friend_respondent")
                        .from(Friend::Table, Friend::RespondentId)
                        .to(Member::Table, Member::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        // duplicate checks and the pending-request lookup
        m.create_index(
            Index::create()
                .name("idx_friend_pair_status")
                .table(Friend::Table)
                .col(Friend::ApplicantId)
                .col(Friend::RespondentId)
                .col(Friend::Status)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_friend_respondent")
                .table(Friend::Table)
                .col(Friend::RespondentId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // indexes go with the table
        m.drop_table(Table::drop().table(Friend::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a friend request. `Wait` is the only state with outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum FriendStatus {
    #[sea_orm(string_value = "WAIT")]
    Wait,
    #[sea_orm(string_value = "ACTIVE")]
    Active,
    #[sea_orm(string_value = "DELETE")]
    Delete,
}

#[derive(Debug, Clone, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "friend")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub applicant_id: Uuid,   // FK -> member.id, who sent the request
    pub respondent_id: Uuid,  // FK -> member.id, who received it
    pub status: FriendStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::ApplicantId",
        to   = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Applicant,

    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::RespondentId",
        to   = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Respondent,
}

impl ActiveModelBehavior for ActiveModel {}

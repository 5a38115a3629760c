use crate::types::error::AppError;
use entity::member::{Column, Entity as Member, MemberStatus, Model as MemberModel};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

/// Active member by id, or `MemberNotFound`. Deleted members are invisible here.
pub(crate) async fn find_active<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> Result<MemberModel, AppError> {
    Member::find_by_id(id)
        .filter(Column::Status.eq(MemberStatus::Active))
        .one(conn)
        .await?
        .ok_or(AppError::MemberNotFound)
}

pub(crate) async fn find_many<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<Uuid>,
) -> Result<Vec<MemberModel>, AppError> {
    if ids.is_empty() {
        return Ok(vec![]);
    }
    Ok(Member::find()
        .filter(Column::Id.is_in(ids))
        .all(conn)
        .await?)
}

use std::collections::HashMap;

use crate::db::{database_service::DatabaseService, member};
use crate::types::{
    code::ResultCode,
    error::AppError,
    friend::{self, FriendResponse},
    member::MemberResponse,
};
use chrono::Utc;
use entity::friend::{ActiveModel as FriendActive, Column, Entity as Friend, FriendStatus, Model as FriendModel};
use entity::member::Model as MemberModel;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{info, warn};
use uuid::Uuid;

async fn exists_request<C: ConnectionTrait>(
    conn: &C,
    applicant_id: Uuid,
    respondent_id: Uuid,
    status: FriendStatus,
) -> Result<bool, AppError> {
    Ok(Friend::find()
        .filter(Column::ApplicantId.eq(applicant_id))
        .filter(Column::RespondentId.eq(respondent_id))
        .filter(Column::Status.eq(status))
        .count(conn)
        .await?
        > 0)
}

async fn find_wait_request<C: ConnectionTrait>(
    conn: &C,
    applicant_id: Uuid,
    respondent_id: Uuid,
) -> Result<Option<FriendModel>, AppError> {
    Ok(Friend::find()
        .filter(Column::ApplicantId.eq(applicant_id))
        .filter(Column::RespondentId.eq(respondent_id))
        .filter(Column::Status.eq(FriendStatus::Wait))
        .one(conn)
        .await?)
}

/// First match wins; the order decides which conflict the caller sees.
async fn check_friend_request<C: ConnectionTrait>(
    conn: &C,
    applicant: &MemberModel,
    respondent: &MemberModel,
) -> Result<(), AppError> {
    if exists_request(conn, applicant.id, respondent.id, FriendStatus::Wait).await? {
        return Err(AppError::UserAlreadyFriendRequest);
    }
    if exists_request(conn, respondent.id, applicant.id, FriendStatus::Wait).await? {
        return Err(AppError::UserAlreadyGetFriendRequest);
    }
    // an accepted pair is a friendship no matter who asked first
    if exists_request(conn, applicant.id, respondent.id, FriendStatus::Active).await?
        || exists_request(conn, respondent.id, applicant.id, FriendStatus::Active).await?
    {
        return Err(AppError::AlreadyOnFriend);
    }
    Ok(())
}

impl DatabaseService {
    pub async fn add_friend(
        &self,
        applicant_id: Uuid,
        respondent_id: Uuid,
    ) -> Result<FriendResponse, AppError> {
        let txn = self.database_connection.begin().await?;

        let applicant = member::find_active(&txn, applicant_id).await?;
        let respondent = member::find_active(&txn, respondent_id).await?;

        if applicant.id == respondent.id {
            txn.rollback().await?;
            return Err(AppError::BadRequest("Cannot send a friend request to yourself.".into()));
        }

        if let Err(err) = check_friend_request(&txn, &applicant, &respondent).await {
            warn!("Friend request {} -> {} rejected: {}", applicant.id, respondent.id, err);
            txn.rollback().await?;
            return Err(err);
        }

        let now = Utc::now();
        let created = FriendActive {
            id: Set(Uuid::new_v4()),
            applicant_id: Set(applicant.id),
            respondent_id: Set(respondent.id),
            status: Set(FriendStatus::Wait),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        info!("Friend request {} sent {} -> {}", created.id, applicant.id, respondent.id);

        Ok(FriendResponse::of(
            &created,
            MemberResponse::from(&applicant),
            MemberResponse::from(&respondent),
        ))
    }

    /// `actor_id` accepts the pending request that `opponent_id` sent them.
    pub async fn accept_friend(&self, actor_id: Uuid, opponent_id: Uuid) -> Result<ResultCode, AppError> {
        self.respond_to_request(actor_id, opponent_id, friend::accepted).await?;
        Ok(ResultCode::SuccessAcceptFriend)
    }

    /// `actor_id` refuses the pending request that `opponent_id` sent them.
    pub async fn refuse_friend(&self, actor_id: Uuid, opponent_id: Uuid) -> Result<ResultCode, AppError> {
        self.respond_to_request(actor_id, opponent_id, friend::refused).await?;
        Ok(ResultCode::SuccessRefuseFriend)
    }

    async fn respond_to_request(
        &self,
        actor_id: Uuid,
        opponent_id: Uuid,
        next: fn(FriendStatus) -> Result<FriendStatus, AppError>,
    ) -> Result<(), AppError> {
        let txn = self.database_connection.begin().await?;

        let actor = member::find_active(&txn, actor_id).await?;
        let request = match find_wait_request(&txn, opponent_id, actor.id).await? {
            Some(r) => r,
            None => {
                txn.rollback().await?;
                return Err(AppError::FriendNotFound);
            }
        };

        let status = match next(request.status) {
            Ok(s) => s,
            Err(err) => {
                txn.rollback().await?;
                return Err(err);
            }
        };

        let request_id = request.id;
        let mut am: FriendActive = request.into();
        am.status = Set(status);
        am.updated_at = Set(Utc::now());
        am.update(&txn).await?;

        txn.commit().await?;
        info!("Friend request {} is now {:?}", request_id, status);
        Ok(())
    }

    /// Accepted friends of `actor_id`, one entry per friendship, in creation order.
    pub async fn get_my_friends(&self, actor_id: Uuid) -> Result<Vec<MemberResponse>, AppError> {
        let actor = member::find_active(&self.database_connection, actor_id).await?;

        let friends = Friend::find()
            .filter(
                Condition::any()
                    .add(Column::ApplicantId.eq(actor.id))
                    .add(Column::RespondentId.eq(actor.id)),
            )
            .filter(Column::Status.eq(FriendStatus::Active))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.database_connection)
            .await?;

        let opponents: Vec<Uuid> = friends
            .iter()
            .filter_map(|f| opponent_of(f, actor.id))
            .collect();

        let members: HashMap<Uuid, MemberModel> = member::find_many(&self.database_connection, opponents.clone())
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        Ok(opponents
            .iter()
            .filter_map(|id| members.get(id))
            .map(MemberResponse::from)
            .collect())
    }

    pub async fn get_friend(&self, friend_id: Uuid) -> Result<FriendResponse, AppError> {
        let f = Friend::find_by_id(friend_id)
            .one(&self.database_connection)
            .await?
            .ok_or(AppError::FriendNotFound)?;

        let members = member::find_many(&self.database_connection, vec![f.applicant_id, f.respondent_id]).await?;
        let lookup = |id: Uuid| {
            members
                .iter()
                .find(|m| m.id == id)
                .map(MemberResponse::from)
                .ok_or(AppError::MemberNotFound)
        };

        Ok(FriendResponse::of(&f, lookup(f.applicant_id)?, lookup(f.respondent_id)?))
    }
}

/// The other side of a friendship, seen from `me`.
fn opponent_of(f: &FriendModel, me: Uuid) -> Option<Uuid> {
    if f.applicant_id == me {
        Some(f.respondent_id)
    } else if f.respondent_id == me {
        Some(f.applicant_id)
    } else {
        None
    }
}

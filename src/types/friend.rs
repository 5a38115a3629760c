use entity::friend::{FriendStatus, Model as FriendModel};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{error::AppError, member::MemberResponse};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FriendResponse {
    pub id: Uuid,
    pub applicant: MemberResponse,
    pub respondent: MemberResponse,
    pub status: FriendStatus,
}

impl FriendResponse {
    pub fn of(friend: &FriendModel, applicant: MemberResponse, respondent: MemberResponse) -> Self {
        Self {
            id: friend.id,
            applicant,
            respondent,
            status: friend.status,
        }
    }
}

/// Status after the respondent accepts. Only a pending request can move.
pub fn accepted(current: FriendStatus) -> Result<FriendStatus, AppError> {
    match current {
        FriendStatus::Wait => Ok(FriendStatus::Active),
        FriendStatus::Active => Err(AppError::AlreadyOnFriend),
        FriendStatus::Delete => Err(AppError::FriendNotFound),
    }
}

/// Status after the respondent refuses. Only a pending request can move.
pub fn refused(current: FriendStatus) -> Result<FriendStatus, AppError> {
    match current {
        FriendStatus::Wait => Ok(FriendStatus::Delete),
        FriendStatus::Active => Err(AppError::AlreadyOnFriend),
        FriendStatus::Delete => Err(AppError::FriendNotFound),
    }
}

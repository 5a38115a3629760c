use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use sea_orm::DbErr;

#[derive(Debug, Error)]
pub enum AppError {
    // not found
    #[error("member not found")]
    MemberNotFound,
    #[error("friend request not found")]
    FriendNotFound,
    #[error("not found")]
    NotFound,

    // conflicts on the friend request lifecycle
    #[error("friend request already sent to this member")]
    UserAlreadyFriendRequest,
    #[error("friend request already received from this member")]
    UserAlreadyGetFriendRequest,
    #[error("already friends")]
    AlreadyOnFriend,

    #[error("bad request: {0}")]
    BadRequest(String),

    // infra things
    #[error(transparent)]
    Db(sea_orm::DbErr),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::FriendNotFound => "FRIEND_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::UserAlreadyFriendRequest => "USER_ALREADY_FRIEND_REQUEST",
            Self::UserAlreadyGetFriendRequest => "USER_ALREADY_GET_FRIEND_REQUEST",
            Self::AlreadyOnFriend => "ALREADY_ON_FRIEND",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Db(_) => "DB_ERROR",
        }
    }

    fn from_db(err: DbErr) -> Self {
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MemberNotFound | Self::FriendNotFound | Self::NotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyFriendRequest
            | Self::UserAlreadyGetFriendRequest
            | Self::AlreadyOnFriend => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(ErrorBody { error: self.kind(), message: self.to_string() })
    }
}

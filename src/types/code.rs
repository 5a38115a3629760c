use serde::Serialize;

/// Outcome codes handed back by operations that have no payload of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    SuccessAcceptFriend,
    SuccessRefuseFriend,
}

impl ResultCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::SuccessAcceptFriend => "SUCCESS_ACCEPT_FRIEND",
            Self::SuccessRefuseFriend => "SUCCESS_REFUSE_FRIEND",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::SuccessAcceptFriend => "Friend request accepted.",
            Self::SuccessRefuseFriend => "Friend request refused.",
        }
    }
}

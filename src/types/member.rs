use entity::member::Model as MemberModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public profile of a member.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemberResponse {
    pub id: Uuid,
    pub email: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

impl From<&MemberModel> for MemberResponse {
    fn from(m: &MemberModel) -> Self {
        Self {
            id: m.id,
            email: m.email.clone(),
            nickname: m.nickname.clone(),
            profile_image: m.profile_image.clone(),
        }
    }
}

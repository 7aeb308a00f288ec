use crate::entities::users::User as UserEntity;
use serde::{Deserialize, Serialize};

/// How much of a leaderboard a viewer gets to see. Standard viewers only see
/// verified runs; admins see everything and may moderate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Standard,
    Admin,
}

impl Role {
    pub fn from_admin_flag(is_admin: bool) -> Role {
        if is_admin { Role::Admin } else { Role::Standard }
    }

    pub const fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserProfile {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub followers: i64,
    pub following: i64,
    pub total_runs: i64,
    pub world_records: i64,
}

impl UserProfile {
    pub fn role(&self) -> Role {
        Role::from_admin_flag(self.is_admin)
    }
}

impl From<UserEntity> for UserProfile {
    fn from(value: UserEntity) -> Self {
        Self {
            user_id: value.user_id,
            email: value.email,
            username: value.username,
            avatar: value.avatar,
            is_admin: value.is_admin,
            followers: value.followers,
            following: value.following,
            total_runs: value.total_runs,
            world_records: value.world_records,
        }
    }
}

/// Profile upsert payload; identity itself is resolved by the outer
/// authentication layer, this only mirrors it into storage.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUser {
    pub email: String,
    pub username: String,
    pub avatar: Option<String>,
    pub is_admin: bool,
}

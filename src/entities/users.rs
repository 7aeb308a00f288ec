use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub user_id: i64,
    pub email: String,
    pub username: String,
    #[sqlx(default)]
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub followers: i64,
    pub following: i64,
    pub total_runs: i64,
    pub world_records: i64,
}

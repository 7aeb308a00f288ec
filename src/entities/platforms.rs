use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Platform {
    pub platform_id: i64,
    pub platform_name: String,
}

use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Category {
    pub category_id: i64,
    pub category_name: String,
    pub description: String,
    pub icon_color: String,
}

use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct Game {
    pub game_id: i64,
    pub title: String,
    #[sqlx(default)]
    pub image_url: Option<String>,
    pub year: String,
    pub total_speedruns: i64,
    #[sqlx(default)]
    pub platforms: Option<String>,
    #[sqlx(default)]
    pub description: Option<String>,
}

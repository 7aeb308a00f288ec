use crate::entities::games::Game as GameEntity;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    #[serde(rename = "GameID")]
    pub game_id: i64,
    pub title: String,
    #[serde(rename = "ImageURL")]
    pub image_url: Option<String>,
    pub year: String,
    pub total_speedruns: i64,
    pub platforms: Option<String>,
    pub description: Option<String>,
}

impl From<GameEntity> for Game {
    fn from(value: GameEntity) -> Self {
        Self {
            game_id: value.game_id,
            title: value.title,
            image_url: value.image_url,
            year: value.year,
            total_speedruns: value.total_speedruns,
            platforms: value.platforms,
            description: value.description,
        }
    }
}

use crate::entities::categories::Category as CategoryEntity;
use crate::entities::platforms::Platform as PlatformEntity;
use serde::Serialize;

// Static reference rows, passed through untouched for the filter dropdowns.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Category {
    #[serde(rename = "CategoryID")]
    pub category_id: i64,
    pub category_name: String,
    pub description: String,
    pub icon_color: String,
}

impl From<CategoryEntity> for Category {
    fn from(value: CategoryEntity) -> Self {
        Self {
            category_id: value.category_id,
            category_name: value.category_name,
            description: value.description,
            icon_color: value.icon_color,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Platform {
    #[serde(rename = "PlatformID")]
    pub platform_id: i64,
    pub platform_name: String,
}

impl From<PlatformEntity> for Platform {
    fn from(value: PlatformEntity) -> Self {
        Self {
            platform_id: value.platform_id,
            platform_name: value.platform_name,
        }
    }
}

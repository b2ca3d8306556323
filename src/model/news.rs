use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsResponseDto {
    pub message: String,
    pub news: NewsDto,
}

/// Multipart news form, documented for OpenAPI only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct NewsForm {
    pub title: Option<String>,
    pub link: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

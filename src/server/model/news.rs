//! News domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::news::NewsDto, server::model::upload::UploadedFile};

/// Maximum number of characters in a news title.
pub const MAX_TITLE_LEN: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            link: entity.link,
            image_url: entity.image_url,
            likes: entity.likes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            link: self.link,
            image_url: self.image_url,
            likes: self.likes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Raw news form as received over multipart.
#[derive(Debug, Default)]
pub struct NewsForm {
    pub title: Option<String>,
    pub link: Option<String>,
    pub image: Option<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct CreateNewsParams {
    pub title: String,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

/// Partial news update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateNewsParams {
    pub title: Option<String>,
    pub link: Option<String>,
    pub image_url: Option<String>,
}

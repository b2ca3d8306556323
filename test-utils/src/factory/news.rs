//! News factory for creating test news entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news entries with customizable fields.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    link: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> NewsFactory<'a> {
    /// Creates a new NewsFactory with an auto-numbered title and no link.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Headline {}", id),
            link: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the external link.
    pub fn link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the news entity into the database.
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            link: ActiveValue::Set(self.link),
            image_url: ActiveValue::Set(None),
            likes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news entry with default values.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}

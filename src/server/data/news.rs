//! News article data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::news::{CreateNewsParams, News, UpdateNewsParams};

use entity::news::Column;

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNewsParams) -> Result<News, DbErr> {
        let entity = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            link: ActiveValue::Set(params.link),
            image_url: ActiveValue::Set(params.image_url),
            likes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(entity))
    }

    /// Gets every article, newest first.
    pub async fn get_all(&self) -> Result<Vec<News>, DbErr> {
        let entities = entity::prelude::News::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(News::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        Ok(entity::prelude::News::find_by_id(id)
            .one(self.db)
            .await?
            .map(News::from_entity))
    }

    /// Applies the provided fields and stamps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(News))` - The updated article
    /// - `Ok(None)` - No article with this id
    pub async fn update(&self, id: i32, params: UpdateNewsParams) -> Result<Option<News>, DbErr> {
        let Some(existing) = entity::prelude::News::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = existing.into_active_model();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(link) = params.link {
            active_model.link = ActiveValue::Set(Some(link));
        }
        if let Some(image_url) = params.image_url {
            active_model.image_url = ActiveValue::Set(Some(image_url));
        }
        active_model.updated_at = ActiveValue::Set(Some(Utc::now()));

        let entity = active_model.update(self.db).await?;

        Ok(Some(News::from_entity(entity)))
    }

    /// Deletes an article.
    ///
    /// # Returns
    /// - `Ok(true)` - The article was deleted
    /// - `Ok(false)` - No article with this id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::News::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected == 1)
    }
}

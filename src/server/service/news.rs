//! News article management.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::{
        news::{CreateNewsParams, News, NewsForm, UpdateNewsParams, MAX_TITLE_LEN},
        upload::UploadedFile,
    },
    provider::asset::{AssetKind, AssetStore},
    util::parse,
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    assets: &'a dyn AssetStore,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection, assets: &'a dyn AssetStore) -> Self {
        Self { db, assets }
    }

    /// Publishes an article.
    ///
    /// # Returns
    /// - `Ok(News)` - The created article
    /// - `Err(AppError::BadRequest)` - Title missing or too long, or the link is not
    ///   an absolute http(s) URL
    pub async fn create(&self, form: NewsForm) -> Result<News, AppError> {
        let title = parse::non_blank(form.title)
            .ok_or_else(|| AppError::BadRequest("Title is required.".to_string()))?;
        validate_title(&title)?;
        let link = parse::non_blank(form.link);
        if let Some(link) = &link {
            validate_link(link)?;
        }

        let image_url = self.store_image(form.image).await?;

        let news = NewsRepository::new(self.db)
            .create(CreateNewsParams {
                title,
                link,
                image_url,
            })
            .await?;

        tracing::info!("Published news {}", news.id);

        Ok(news)
    }

    pub async fn get_all(&self) -> Result<Vec<News>, AppError> {
        Ok(NewsRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<News>, AppError> {
        Ok(NewsRepository::new(self.db).find_by_id(id).await?)
    }

    /// Updates the fields present in the form; blank fields keep their stored value.
    pub async fn update(&self, id: i32, form: NewsForm) -> Result<News, AppError> {
        let repo = NewsRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("News item not found.".to_string()));
        }

        let title = parse::non_blank(form.title);
        if let Some(title) = &title {
            validate_title(title)?;
        }
        let link = parse::non_blank(form.link);
        if let Some(link) = &link {
            validate_link(link)?;
        }

        let params = UpdateNewsParams {
            title,
            link,
            image_url: self.store_image(form.image).await?,
        };

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("News item not found.".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NewsRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("News item not found.".to_string()));
        }

        Ok(())
    }

    async fn store_image(&self, image: Option<UploadedFile>) -> Result<Option<String>, AppError> {
        let Some(file) = image.filter(|file| !file.bytes.is_empty()) else {
            return Ok(None);
        };

        let url = self
            .assets
            .store(
                AssetKind::NewsImage,
                &file.unique_name(),
                file.bytes,
                file.content_type.as_deref(),
            )
            .await?;

        Ok(Some(url))
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {} characters.",
            MAX_TITLE_LEN
        )));
    }

    Ok(())
}

fn validate_link(link: &str) -> Result<(), AppError> {
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(AppError::BadRequest(format!("Invalid link '{}'.", link))),
    }
}

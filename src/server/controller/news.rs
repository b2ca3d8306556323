use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        news::{NewsDto, NewsForm as NewsFormSchema, NewsResponseDto},
    },
    server::{
        error::AppError,
        model::news::{News, NewsForm},
        service::news::NewsService,
        state::AppState,
        util::multipart::MultipartFields,
    },
};

/// Tag for grouping news endpoints in OpenAPI documentation
pub static NEWS_TAG: &str = "news";

async fn read_form(multipart: Multipart) -> Result<NewsForm, AppError> {
    let mut fields = MultipartFields::read(multipart).await?;

    Ok(NewsForm {
        title: fields.take_text("title"),
        link: fields.take_text("link"),
        image: fields.take_file("image"),
    })
}

/// List news articles, newest first.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All articles", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, state.assets.as_ref())
        .get_all()
        .await?;

    Ok(Json(news.into_iter().map(News::into_dto).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = NewsDto),
        (status = 404, description = "News item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_news_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let news = NewsService::new(&state.db, state.assets.as_ref())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("News item not found.".to_string()))?;

    Ok(Json(news.into_dto()))
}

/// Publish a news article.
///
/// # Arguments
/// - `state` - Application state
/// - `multipart` - `title`, optional `link` and optional `image` file
///
/// # Returns
/// - `201 Created` - Article published
/// - `400 Bad Request` - Missing or overlong title, or invalid link
/// - `500 Internal Server Error` - Upload or database error
#[utoipa::path(
    post,
    path = "/api/news/add",
    tag = NEWS_TAG,
    request_body(content = NewsFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Article published", body = NewsResponseDto),
        (status = 400, description = "Invalid article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_news(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_form(multipart).await?;

    let news = NewsService::new(&state.db, state.assets.as_ref())
        .create(form)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NewsResponseDto {
            message: "News added successfully.".to_string(),
            news: news.into_dto(),
        }),
    ))
}

/// Update the fields present in a multipart form.
#[utoipa::path(
    put,
    path = "/api/news/update/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article id")),
    request_body(content = NewsFormSchema, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Article updated", body = NewsResponseDto),
        (status = 400, description = "Invalid article", body = ErrorDto),
        (status = 404, description = "News item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let form = read_form(multipart).await?;

    let news = NewsService::new(&state.db, state.assets.as_ref())
        .update(id, form)
        .await?;

    Ok(Json(NewsResponseDto {
        message: "News updated successfully.".to_string(),
        news: news.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/news/delete/{id}",
    tag = NEWS_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted", body = MessageDto),
        (status = 404, description = "News item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_news(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    NewsService::new(&state.db, state.assets.as_ref())
        .delete(id)
        .await?;

    Ok(Json(MessageDto {
        message: "News deleted successfully.".to_string(),
    }))
}

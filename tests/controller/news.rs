use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use highlanders::{
    model::news::{NewsDto, NewsResponseDto},
    server::controller::news::{add_news, delete_news, get_news, get_news_item, update_news},
};
use test_utils::factory::news::NewsFactory;

use crate::util::{
    request::{json_body, multipart},
    setup::test_setup,
};

#[tokio::test]
/// Expect 201 for a titled article with a valid link
async fn adds_article() {
    let test = test_setup().await;

    let response = add_news(
        State(test.state.clone()),
        multipart(
            &[("title", "Season opener"), ("link", "https://highlanders.example/opener")],
            &[],
        )
        .await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: NewsResponseDto = json_body(response).await;
    assert_eq!(body.message, "News added successfully.");
    assert_eq!(body.news.title, "Season opener");
    assert_eq!(body.news.likes, 0);
    assert!(body.news.updated_at.is_none());
}

#[tokio::test]
/// Expect 400 for a missing title or a relative link
async fn rejects_invalid_article() {
    let test = test_setup().await;

    let missing_title = add_news(
        State(test.state.clone()),
        multipart(&[("link", "https://highlanders.example")], &[]).await,
    )
    .await
    .into_response();
    let relative_link = add_news(
        State(test.state.clone()),
        multipart(&[("title", "Tickets"), ("link", "/tickets")], &[]).await,
    )
    .await
    .into_response();

    assert_eq!(missing_title.status(), StatusCode::BAD_REQUEST);
    assert_eq!(relative_link.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect an update to keep unsubmitted fields and stamp updated_at
async fn updates_article() {
    let test = test_setup().await;
    let news = NewsFactory::new(test.db())
        .title("Squad announced")
        .link(Some("https://highlanders.example/squad".to_string()))
        .build()
        .await
        .unwrap();

    let response = update_news(
        State(test.state.clone()),
        Path(news.id),
        multipart(&[("title", "Final squad announced")], &[]).await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: NewsResponseDto = json_body(response).await;
    assert_eq!(body.message, "News updated successfully.");
    assert_eq!(body.news.title, "Final squad announced");
    assert_eq!(
        body.news.link.as_deref(),
        Some("https://highlanders.example/squad")
    );
    assert!(body.news.updated_at.is_some());
}

#[tokio::test]
/// Expect a deleted article to disappear from the listing
async fn deletes_article() {
    let test = test_setup().await;
    let news = NewsFactory::new(test.db()).build().await.unwrap();

    let response = delete_news(State(test.state.clone()), Path(news.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let listing: Vec<NewsDto> =
        json_body(get_news(State(test.state.clone())).await.into_response()).await;
    assert!(listing.is_empty());

    let fetched = get_news_item(State(test.state.clone()), Path(news.id))
        .await
        .into_response();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use highlanders::{
    model::product::ProductDto,
    server::controller::product::{delete_product, get_product, get_products},
};
use test_utils::factory::product::ProductFactory;

use crate::util::{request::json_body, setup::test_setup};

#[tokio::test]
/// Expect a deleted product to leave the listing but stay retrievable by id
async fn soft_deletes_product() {
    let test = test_setup().await;
    let kept = ProductFactory::new(test.db()).build().await.unwrap();
    let deleted = ProductFactory::new(test.db()).build().await.unwrap();

    let response = delete_product(State(test.state.clone()), Path(deleted.id))
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let listing: Vec<ProductDto> =
        json_body(get_products(State(test.state.clone())).await.into_response()).await;
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].id, kept.id);

    let fetched = get_product(State(test.state.clone()), Path(deleted.id))
        .await
        .into_response();
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched: ProductDto = json_body(fetched).await;
    assert!(!fetched.is_active);
}

#[tokio::test]
/// Expect 404 when deleting or fetching an unknown product
async fn returns_not_found_for_unknown_product() {
    let test = test_setup().await;

    let deleted = delete_product(State(test.state.clone()), Path(42))
        .await
        .into_response();
    let fetched = get_product(State(test.state.clone()), Path(42))
        .await
        .into_response();

    assert_eq!(deleted.status(), StatusCode::NOT_FOUND);
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

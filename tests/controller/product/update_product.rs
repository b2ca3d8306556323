use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use highlanders::{
    model::product::ProductResponseDto,
    server::{controller::product::update_product, data::product::ProductRepository},
};
use rust_decimal::Decimal;
use test_utils::factory::product::ProductFactory;

use crate::util::{
    request::{json_body, multipart},
    setup::test_setup,
};

#[tokio::test]
/// Expect only the submitted fields to change
async fn updates_submitted_fields() {
    let test = test_setup().await;
    let product = ProductFactory::new(test.db())
        .name("Away Jersey")
        .color("White")
        .price(30000)
        .build()
        .await
        .unwrap();

    let response = update_product(
        State(test.state.clone()),
        Path(product.id),
        multipart(&[("color", "Blue"), ("is_active", "false")], &[]).await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: ProductResponseDto = json_body(response).await;
    assert_eq!(body.message, "Product updated successfully.");
    assert_eq!(body.product.name, "Away Jersey");
    assert_eq!(body.product.color, "Blue");
    assert_eq!(body.product.price, Decimal::new(300, 0));
    assert!(!body.product.is_active);
}

#[tokio::test]
/// Expect 400 for an is_active value that is not a boolean
async fn rejects_invalid_active_flag() {
    let test = test_setup().await;
    let product = ProductFactory::new(test.db()).build().await.unwrap();

    let response = update_product(
        State(test.state.clone()),
        Path(product.id),
        multipart(&[("is_active", "maybe")], &[]).await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect 400 and an unchanged price when the submitted price is not a positive amount
async fn rejects_invalid_price() {
    let test = test_setup().await;
    let product = ProductFactory::new(test.db())
        .price(30000)
        .build()
        .await
        .unwrap();

    for price in ["abc", "-5", "0"] {
        let response = update_product(
            State(test.state.clone()),
            Path(product.id),
            multipart(&[("price", price)], &[]).await,
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "price {}", price);
    }

    let stored = ProductRepository::new(test.db())
        .find_by_id(product.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.price, 30000);
}

#[tokio::test]
/// Expect 404 for an unknown product
async fn returns_not_found_for_unknown_product() {
    let test = test_setup().await;

    let response = update_product(
        State(test.state.clone()),
        Path(7),
        multipart(&[("name", "Cap")], &[]).await,
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

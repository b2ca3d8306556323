use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use highlanders::{
    model::order::{CreateOrderDto, CreateOrderItemDto, CreateOrderResponseDto},
    server::{controller::order::initiate_payment, data::order::OrderRepository},
};
use test_utils::factory::product::ProductFactory;

use crate::util::{request::json_body, setup::test_setup};

fn order_payload(items: Vec<CreateOrderItemDto>) -> Json<CreateOrderDto> {
    Json(CreateOrderDto {
        customer_full_name: "Lindiwe Nxumalo".to_string(),
        customer_email: "lindiwe@example.com".to_string(),
        customer_phone: None,
        shipping_address: "12 Gwamile Street, Mbabane".to_string(),
        items,
    })
}

fn line(product_id: i32, quantity: i32) -> CreateOrderItemDto {
    CreateOrderItemDto {
        product_id,
        color: None,
        size: None,
        quantity,
    }
}

#[tokio::test]
/// Expect 201 with an 8-character code and a total summed over the lines
async fn creates_order_with_total() {
    let test = test_setup().await;
    let jersey = ProductFactory::new(test.db())
        .price(25000)
        .color("Red")
        .build()
        .await
        .unwrap();
    let scarf = ProductFactory::new(test.db())
        .price(8050)
        .build()
        .await
        .unwrap();

    let response = initiate_payment(
        State(test.state.clone()),
        order_payload(vec![line(jersey.id, 2), line(scarf.id, 1)]),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: CreateOrderResponseDto = json_body(response).await;
    assert_eq!(body.message, "Order created. Redirect to PayFast.");
    assert_eq!(body.order_code.len(), 8);
    assert!(body
        .order_code
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    assert!(body.redirect_url.contains(&body.order_code));

    let order = OrderRepository::new(test.db())
        .find_by_id(body.order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(order.total_amount, 58050);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].color, "Red");
    assert_eq!(order.items[0].size, "M");
    assert_eq!(order.items[0].line_total, 50000);
}

#[tokio::test]
/// Expect 400 for an order with no lines
async fn rejects_empty_order() {
    let test = test_setup().await;

    let response = initiate_payment(State(test.state.clone()), order_payload(Vec::new()))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect 400 when a line names an inactive product
async fn rejects_inactive_product() {
    let test = test_setup().await;
    let retired = ProductFactory::new(test.db())
        .active(false)
        .build()
        .await
        .unwrap();

    let response = initiate_payment(
        State(test.state.clone()),
        order_payload(vec![line(retired.id, 1)]),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(OrderRepository::new(test.db())
        .get_all()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
/// Expect 400 for a quantity below one
async fn rejects_zero_quantity() {
    let test = test_setup().await;
    let product = ProductFactory::new(test.db()).build().await.unwrap();

    let response = initiate_payment(
        State(test.state.clone()),
        order_payload(vec![line(product.id, 0)]),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect 400 and no order when a line or the order total overflows
async fn rejects_overflowing_totals() {
    let test = test_setup().await;
    let costly = ProductFactory::new(test.db())
        .price(i64::MAX / 2 + 1)
        .build()
        .await
        .unwrap();
    let also_costly = ProductFactory::new(test.db())
        .price(i64::MAX / 2 + 1)
        .build()
        .await
        .unwrap();

    let line_overflow = initiate_payment(
        State(test.state.clone()),
        order_payload(vec![line(costly.id, 2)]),
    )
    .await
    .into_response();
    let total_overflow = initiate_payment(
        State(test.state.clone()),
        order_payload(vec![line(costly.id, 1), line(also_costly.id, 1)]),
    )
    .await
    .into_response();

    assert_eq!(line_overflow.status(), StatusCode::BAD_REQUEST);
    assert_eq!(total_overflow.status(), StatusCode::BAD_REQUEST);
    assert!(OrderRepository::new(test.db())
        .get_all()
        .await
        .unwrap()
        .is_empty());
}

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use highlanders::server::{
    controller::order::order_payment_notification,
    data::order::OrderRepository,
    model::{fulfilment::FulfilmentStage, order::OrderStatus},
};
use test_utils::factory::{order::OrderFactory, product::ProductFactory};

use crate::util::{request::notification, setup::test_setup};

#[tokio::test]
/// Expect a complete notification to mark the order paid and send the confirmation once
async fn fulfils_order_on_complete_payment() {
    let test = test_setup().await;
    let product = ProductFactory::new(test.db()).build().await.unwrap();
    let (order, _) = OrderFactory::new(test.db())
        .order_code("ABCD1234")
        .item(&product, 2)
        .build()
        .await
        .unwrap();

    for _ in 0..2 {
        let response = order_payment_notification(
            State(test.state.clone()),
            notification("Order ABCD1234", "COMPLETE"),
        )
        .await
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    let stored = OrderRepository::new(test.db())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Paid);
    assert_eq!(stored.fulfilment_stage, FulfilmentStage::NotificationSent);

    let sent = test.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, order.customer_email);
    assert!(sent[0].subject.contains("ABCD1234"));
}

#[tokio::test]
/// Expect 400 when item_name carries no order code
async fn rejects_missing_code() {
    let test = test_setup().await;

    let response = order_payment_notification(
        State(test.state.clone()),
        notification("Order ", "COMPLETE"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect 404 for a code no order holds
async fn rejects_unknown_code() {
    let test = test_setup().await;

    let response = order_payment_notification(
        State(test.state.clone()),
        notification("Order FFFF0000", "COMPLETE"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
/// Expect a cancelled order to stay cancelled when a payment arrives
async fn refuses_cancelled_order() {
    let test = test_setup().await;
    let (order, _) = OrderFactory::new(test.db())
        .order_code("0A0B0C0D")
        .status("Cancelled")
        .build()
        .await
        .unwrap();

    let response = order_payment_notification(
        State(test.state.clone()),
        notification("Order 0A0B0C0D", "COMPLETE"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let stored = OrderRepository::new(test.db())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Cancelled);
    assert!(test.notifier.sent().is_empty());
}

#[tokio::test]
/// Expect a pending payment status to leave the order untouched
async fn acknowledges_incomplete_payment() {
    let test = test_setup().await;
    let (order, _) = OrderFactory::new(test.db())
        .order_code("11112222")
        .build()
        .await
        .unwrap();

    let response = order_payment_notification(
        State(test.state.clone()),
        notification("Order 11112222", "PENDING"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let stored = OrderRepository::new(test.db())
        .find_by_id(order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, OrderStatus::Pending);
    assert_eq!(stored.fulfilment_stage, FulfilmentStage::Pending);
}

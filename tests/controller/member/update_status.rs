use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use highlanders::{
    model::{api::UpdateStatusDto, member::MemberStatusResponseDto},
    server::controller::member::update_member_status,
};
use test_utils::factory::member::MemberFactory;

use crate::util::{request::json_body, setup::test_setup};

fn status(value: &str) -> Json<UpdateStatusDto> {
    Json(UpdateStatusDto {
        status: value.to_string(),
    })
}

#[tokio::test]
/// Expect accepting a member to render the card and email it
async fn accepts_member() {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db()).build().await.unwrap();

    let response = update_member_status(
        State(test.state.clone()),
        Path(member.id.clone()),
        status("Accepted"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: MemberStatusResponseDto = json_body(response).await;
    assert_eq!(body.message, "Payment status updated to Accepted.");
    assert_eq!(body.member.fulfilment_stage, "notification_sent");
    assert!(body.member.card_url.is_some());
    assert_eq!(test.notifier.sent().len(), 1);
}

#[tokio::test]
/// Expect rejecting a member to send nothing
async fn rejects_member() {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db()).build().await.unwrap();

    let response = update_member_status(
        State(test.state.clone()),
        Path(member.id.clone()),
        status("rejected"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let body: MemberStatusResponseDto = json_body(response).await;
    assert_eq!(body.member.payment_status, "Rejected");
    assert!(test.notifier.sent().is_empty());
}

#[tokio::test]
/// Expect 400 for a status outside the enumeration
async fn rejects_unknown_status() {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db()).build().await.unwrap();

    let response = update_member_status(
        State(test.state.clone()),
        Path(member.id.clone()),
        status("Paid"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect 400 when accepting a member that was already rejected
async fn rejects_accepting_rejected_member() {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db())
        .payment_status("Rejected")
        .build()
        .await
        .unwrap();

    let response = update_member_status(
        State(test.state.clone()),
        Path(member.id.clone()),
        status("Accepted"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(test.notifier.sent().is_empty());
}

#[tokio::test]
/// Expect 404 for an unknown member id
async fn returns_not_found_for_unknown_member() {
    let test = test_setup().await;

    let response = update_member_status(
        State(test.state.clone()),
        Path("00000000-0000-0000-0000-000000000000".to_string()),
        status("Accepted"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

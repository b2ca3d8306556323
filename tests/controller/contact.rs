use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use highlanders::{
    model::contact::{ContactDto, SaveContactDto},
    server::controller::contact::{
        create_contact, delete_contact, get_contact, get_contacts, update_contact,
    },
};
use test_utils::factory::contact::ContactFactory;

use crate::util::{request::json_body, setup::test_setup};

fn payload(message: &str, is_resolved: bool) -> Json<SaveContactDto> {
    Json(SaveContactDto {
        full_name: "Nomsa Simelane".to_string(),
        email: "nomsa@example.com".to_string(),
        phone_number: String::new(),
        inquiry_type: "Tickets".to_string(),
        subject: "Season tickets".to_string(),
        message: message.to_string(),
        is_resolved,
    })
}

#[tokio::test]
/// Expect 201 with the stored submission
async fn creates_contact() {
    let test = test_setup().await;

    let response = create_contact(
        State(test.state.clone()),
        payload("Are season tickets on sale?", false),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: ContactDto = json_body(response).await;
    assert_eq!(body.full_name, "Nomsa Simelane");
    assert!(!body.is_resolved);
}

#[tokio::test]
/// Expect 400 when the message is blank
async fn rejects_blank_message() {
    let test = test_setup().await;

    let response = create_contact(State(test.state.clone()), payload("  ", false))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect 204 for an update that marks the submission resolved
async fn resolves_contact() {
    let test = test_setup().await;
    let contact = ContactFactory::new(test.db()).build().await.unwrap();

    let response = update_contact(
        State(test.state.clone()),
        Path(contact.id),
        payload("Answered by phone", true),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched: ContactDto = json_body(
        get_contact(State(test.state.clone()), Path(contact.id))
            .await
            .into_response(),
    )
    .await;
    assert!(fetched.is_resolved);
    assert_eq!(fetched.message, "Answered by phone");
}

#[tokio::test]
/// Expect a deleted submission to leave the listing, and a second delete to answer 404
async fn deletes_contact() {
    let test = test_setup().await;
    let contact = ContactFactory::new(test.db()).build().await.unwrap();

    let deleted = delete_contact(State(test.state.clone()), Path(contact.id))
        .await
        .into_response();
    let again = delete_contact(State(test.state.clone()), Path(contact.id))
        .await
        .into_response();

    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let listing: Vec<ContactDto> =
        json_body(get_contacts(State(test.state.clone())).await.into_response()).await;
    assert!(listing.is_empty());
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        contact::{ContactDto, SaveContactDto},
    },
    server::{
        error::AppError,
        model::contact::{Contact, SaveContactParams},
        service::contact::ContactService,
        state::AppState,
    },
};

/// Tag for grouping contact endpoints in OpenAPI documentation
pub static CONTACT_TAG: &str = "contact";

/// List contact-form submissions, newest first.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    responses(
        (status = 200, description = "All submissions", body = Vec<ContactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let contacts = ContactService::new(&state.db).get_all().await?;

    Ok(Json(
        contacts
            .into_iter()
            .map(Contact::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    responses(
        (status = 200, description = "The submission", body = ContactDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact not found.".to_string()))?;

    Ok(Json(contact.into_dto()))
}

/// Submit the public contact form.
///
/// # Returns
/// - `201 Created` - The stored submission
/// - `400 Bad Request` - Name, email or message is blank
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = CONTACT_TAG,
    request_body = SaveContactDto,
    responses(
        (status = 201, description = "Submission stored", body = ContactDto),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_contact(
    State(state): State<AppState>,
    Json(payload): Json<SaveContactDto>,
) -> Result<impl IntoResponse, AppError> {
    let contact = ContactService::new(&state.db)
        .create(SaveContactParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(contact.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    request_body = SaveContactDto,
    responses(
        (status = 204, description = "Submission updated"),
        (status = 400, description = "Invalid submission", body = ErrorDto),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveContactDto>,
) -> Result<impl IntoResponse, AppError> {
    ContactService::new(&state.db)
        .update(id, SaveContactParams::from_dto(payload))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = CONTACT_TAG,
    params(("id" = i32, Path, description = "Submission id")),
    responses(
        (status = 204, description = "Submission deleted"),
        (status = 404, description = "Contact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ContactService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

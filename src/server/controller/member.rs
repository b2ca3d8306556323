use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::{ErrorDto, UpdateStatusDto},
        member::{
            MemberDto, MemberStatusResponseDto, RegisterMemberForm, RegisterMemberResponseDto,
        },
    },
    server::{
        error::AppError,
        model::{
            member::{Member, RegistrationForm},
            payment::{PaymentNotification, PaymentSubject},
        },
        service::{member::MemberService, reconcile::ReconciliationService},
        state::AppState,
        util::multipart::MultipartFields,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Register a new club member.
///
/// Accepts the public multipart registration form, stores the optional proof of
/// payment, allocates the next member code and returns the PayFast checkout URL for
/// the membership fee.
///
/// # Arguments
/// - `state` - Application state
/// - `multipart` - Registration form fields and optional `proof_of_payment` file
///
/// # Returns
/// - `201 Created` - Member registered under review, with checkout URL
/// - `400 Bad Request` - Missing name or email, or invalid membership tier
/// - `500 Internal Server Error` - Upload or database error
#[utoipa::path(
    post,
    path = "/api/members",
    tag = MEMBER_TAG,
    request_body(content = RegisterMemberForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Member registered", body = RegisterMemberResponseDto),
        (status = 400, description = "Invalid registration form", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_member(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut fields = MultipartFields::read(multipart).await?;
    let form = RegistrationForm {
        full_name: fields.take_text("full_name"),
        email: fields.take_text("email"),
        phone_number: fields.take_text("phone_number"),
        branch: fields.take_text("branch"),
        membership_tier: fields.take_text("membership_tier"),
        proof_of_payment: fields.take_file("proof_of_payment"),
    };

    let registration = MemberService::new(&state).register(form).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterMemberResponseDto {
            message: "Member registered successfully.".to_string(),
            member: registration.member.into_dto(),
            redirect_url: registration.redirect_url,
        }),
    ))
}

/// List all members, most recently joined first.
///
/// # Returns
/// - `200 OK` - All members
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "All members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state).get_all().await?;

    Ok(Json(
        members
            .into_iter()
            .map(Member::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Get a member by id.
///
/// # Returns
/// - `200 OK` - The member
/// - `404 Not Found` - No member with this id
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = String, Path, description = "Member id")),
    responses(
        (status = 200, description = "The member", body = MemberDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state)
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Member not found.".to_string()))?;

    Ok(Json(member.into_dto()))
}

/// Accept or reject a member's payment.
///
/// Accepting renders and stores the membership card and emails it to the member;
/// re-accepting resumes a fulfilment that stopped part-way.
///
/// # Arguments
/// - `state` - Application state
/// - `id` - Member id
/// - `payload` - Requested status: `Accepted` or `Rejected`
///
/// # Returns
/// - `200 OK` - Status applied, with the updated member
/// - `400 Bad Request` - Unknown status or disallowed transition
/// - `404 Not Found` - No member with this id
/// - `500 Internal Server Error` - Card, storage, email or database error
#[utoipa::path(
    put,
    path = "/api/members/{id}/status",
    tag = MEMBER_TAG,
    params(("id" = String, Path, description = "Member id")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MemberStatusResponseDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_member_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state)
        .update_status(&id, &payload.status)
        .await?;

    Ok(Json(MemberStatusResponseDto {
        message: format!("Payment status updated to {}.", member.payment_status),
        member: member.into_dto(),
    }))
}

/// PayFast instant payment notification for membership fees.
///
/// Always answers `200 OK` once the member is found, including for notifications
/// that are unverified, not complete, or for rejected members, so the gateway stops
/// retrying them.
///
/// # Returns
/// - `200 OK` - Notification processed
/// - `400 Bad Request` - `item_name` carries no member code
/// - `404 Not Found` - No member has the code
/// - `500 Internal Server Error` - Fulfilment failed; a retry resumes it
#[utoipa::path(
    post,
    path = "/api/members/notify",
    tag = MEMBER_TAG,
    request_body(content = String, content_type = "application/x-www-form-urlencoded",
        description = "PayFast notification fields, including item_name and payment_status"),
    responses(
        (status = 200, description = "Notification processed"),
        (status = 400, description = "Missing member code", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn member_payment_notification(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let notification = PaymentNotification::new(fields);

    let outcome = ReconciliationService::new(&state)
        .handle_notification(PaymentSubject::Member, &notification)
        .await?;

    tracing::debug!(
        "Member payment notification for '{}': {:?}",
        notification.item_name(),
        outcome
    );

    Ok(StatusCode::OK)
}

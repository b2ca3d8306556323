use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        fixture::{FixtureDto, FixtureResponseDto, SaveFixtureDto},
    },
    server::{
        error::AppError,
        model::fixture::{Fixture, SaveFixtureParams},
        service::fixture::FixtureService,
        state::AppState,
    },
};

/// Tag for grouping fixture endpoints in OpenAPI documentation
pub static FIXTURE_TAG: &str = "fixture";

/// List fixtures ordered by date, then kick-off time.
#[utoipa::path(
    get,
    path = "/api/fixtures",
    tag = FIXTURE_TAG,
    responses(
        (status = 200, description = "All fixtures", body = Vec<FixtureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fixtures(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let fixtures = FixtureService::new(&state.db).get_all().await?;

    Ok(Json(
        fixtures
            .into_iter()
            .map(Fixture::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/fixtures/{id}",
    tag = FIXTURE_TAG,
    params(("id" = i32, Path, description = "Fixture id")),
    responses(
        (status = 200, description = "The fixture", body = FixtureDto),
        (status = 404, description = "Fixture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fixture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = FixtureService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Fixture not found.".to_string()))?;

    Ok(Json(fixture.into_dto()))
}

/// Schedule a fixture.
///
/// # Returns
/// - `201 Created` - The created fixture
/// - `400 Bad Request` - Missing team names
#[utoipa::path(
    post,
    path = "/api/fixtures",
    tag = FIXTURE_TAG,
    request_body = SaveFixtureDto,
    responses(
        (status = 201, description = "Fixture created", body = FixtureDto),
        (status = 400, description = "Invalid fixture", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fixture(
    State(state): State<AppState>,
    Json(payload): Json<SaveFixtureDto>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = FixtureService::new(&state.db)
        .create(SaveFixtureParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(fixture.into_dto())))
}

/// Replace a fixture's date, time, teams and stadium.
#[utoipa::path(
    put,
    path = "/api/fixtures/update-fixture/{id}",
    tag = FIXTURE_TAG,
    params(("id" = i32, Path, description = "Fixture id")),
    request_body = SaveFixtureDto,
    responses(
        (status = 200, description = "Fixture updated", body = FixtureResponseDto),
        (status = 400, description = "Invalid fixture", body = ErrorDto),
        (status = 404, description = "Fixture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fixture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveFixtureDto>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = FixtureService::new(&state.db)
        .update(id, SaveFixtureParams::from_dto(payload))
        .await?;

    Ok(Json(FixtureResponseDto {
        message: "Fixture updated successfully.".to_string(),
        fixture: fixture.into_dto(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/fixtures/{id}",
    tag = FIXTURE_TAG,
    params(("id" = i32, Path, description = "Fixture id")),
    responses(
        (status = 204, description = "Fixture deleted"),
        (status = 404, description = "Fixture not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fixture(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    FixtureService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

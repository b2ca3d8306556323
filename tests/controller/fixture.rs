use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, NaiveTime};
use highlanders::{
    model::fixture::{FixtureDto, FixtureResponseDto, SaveFixtureDto},
    server::controller::fixture::{
        create_fixture, delete_fixture, get_fixture, get_fixtures, update_fixture,
    },
};
use test_utils::factory::fixture::FixtureFactory;

use crate::util::{request::json_body, setup::test_setup};

fn payload(home_team: &str, away_team: &str) -> Json<SaveFixtureDto> {
    Json(SaveFixtureDto {
        date: NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
        time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        stadium: Some("Somhlolo National Stadium".to_string()),
    })
}

#[tokio::test]
/// Expect 201 with the kick-off time formatted as HH:MM
async fn creates_fixture() {
    let test = test_setup().await;

    let response = create_fixture(
        State(test.state.clone()),
        payload("Mbabane Highlanders", "Young Buffaloes"),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: FixtureDto = json_body(response).await;
    assert_eq!(body.time, "15:30");
    assert_eq!(body.away_team, "Young Buffaloes");
}

#[tokio::test]
/// Expect 400 when a team name is blank
async fn rejects_blank_team() {
    let test = test_setup().await;

    let response = create_fixture(State(test.state.clone()), payload("Mbabane Highlanders", " "))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
/// Expect fixtures ordered by date, then kick-off time
async fn lists_fixtures_chronologically() {
    let test = test_setup().await;
    let day = NaiveDate::from_ymd_opt(2026, 5, 2).unwrap();
    let late = FixtureFactory::new(test.db())
        .date(day)
        .time(NaiveTime::from_hms_opt(18, 0, 0).unwrap())
        .build()
        .await
        .unwrap();
    let early = FixtureFactory::new(test.db())
        .date(day)
        .time(NaiveTime::from_hms_opt(13, 0, 0).unwrap())
        .build()
        .await
        .unwrap();
    let first = FixtureFactory::new(test.db())
        .date(NaiveDate::from_ymd_opt(2026, 4, 25).unwrap())
        .build()
        .await
        .unwrap();

    let listing: Vec<FixtureDto> =
        json_body(get_fixtures(State(test.state.clone())).await.into_response()).await;

    let ids: Vec<i32> = listing.iter().map(|fixture| fixture.id).collect();
    assert_eq!(ids, vec![first.id, early.id, late.id]);
}

#[tokio::test]
/// Expect an update to replace the fixture and a delete to answer 204
async fn updates_and_deletes_fixture() {
    let test = test_setup().await;
    let fixture = FixtureFactory::new(test.db()).build().await.unwrap();

    let updated = update_fixture(
        State(test.state.clone()),
        Path(fixture.id),
        payload("Mbabane Highlanders", "Royal Leopards"),
    )
    .await
    .into_response();
    assert_eq!(updated.status(), StatusCode::OK);
    let body: FixtureResponseDto = json_body(updated).await;
    assert_eq!(body.message, "Fixture updated successfully.");
    assert_eq!(body.fixture.away_team, "Royal Leopards");

    let deleted = delete_fixture(State(test.state.clone()), Path(fixture.id))
        .await
        .into_response();
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let fetched = get_fixture(State(test.state.clone()), Path(fixture.id))
        .await
        .into_response();
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

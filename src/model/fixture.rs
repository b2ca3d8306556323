use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FixtureDto {
    pub id: i32,
    pub date: NaiveDate,
    /// Kick-off time formatted `HH:MM`.
    pub time: String,
    pub home_team: String,
    pub away_team: String,
    pub stadium: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveFixtureDto {
    pub date: NaiveDate,
    /// Kick-off time as `HH:MM` or `HH:MM:SS`.
    #[schema(value_type = String, example = "15:00")]
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub stadium: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FixtureResponseDto {
    pub message: String,
    pub fixture: FixtureDto,
}

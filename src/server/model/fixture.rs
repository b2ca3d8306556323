//! Match fixture domain models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::model::fixture::{FixtureDto, SaveFixtureDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Fixture {
    pub id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub stadium: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Fixture {
    pub fn from_entity(entity: entity::fixture::Model) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            time: entity.time,
            home_team: entity.home_team,
            away_team: entity.away_team,
            stadium: entity.stadium,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FixtureDto {
        FixtureDto {
            id: self.id,
            date: self.date,
            time: self.time.format("%H:%M").to_string(),
            home_team: self.home_team,
            away_team: self.away_team,
            stadium: self.stadium,
            created_at: self.created_at,
        }
    }
}

/// Values for creating or fully replacing a fixture.
#[derive(Debug, Clone)]
pub struct SaveFixtureParams {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub home_team: String,
    pub away_team: String,
    pub stadium: Option<String>,
}

impl SaveFixtureParams {
    pub fn from_dto(dto: SaveFixtureDto) -> Self {
        Self {
            date: dto.date,
            time: dto.time,
            home_team: dto.home_team.trim().to_string(),
            away_team: dto.away_team.trim().to_string(),
            stadium: dto.stadium.filter(|s| !s.trim().is_empty()),
        }
    }
}

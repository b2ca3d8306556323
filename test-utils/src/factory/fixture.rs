//! Fixture factory for creating test match fixtures.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test fixtures with customizable fields.
pub struct FixtureFactory<'a> {
    db: &'a DatabaseConnection,
    date: NaiveDate,
    time: NaiveTime,
    home_team: String,
    away_team: String,
    stadium: Option<String>,
}

impl<'a> FixtureFactory<'a> {
    /// Creates a new FixtureFactory defaulting to a 15:00 kick-off on 2026-03-01.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default(),
            time: NaiveTime::from_hms_opt(15, 0, 0).unwrap_or_default(),
            home_team: "Mbabane Highlanders".to_string(),
            away_team: format!("Opponent {}", id),
            stadium: Some("Somhlolo National Stadium".to_string()),
        }
    }

    /// Sets the match date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the kick-off time.
    pub fn time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Sets the away team.
    pub fn away_team(mut self, away_team: impl Into<String>) -> Self {
        self.away_team = away_team.into();
        self
    }

    /// Builds and inserts the fixture entity into the database.
    pub async fn build(self) -> Result<entity::fixture::Model, DbErr> {
        entity::fixture::ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            home_team: ActiveValue::Set(self.home_team),
            away_team: ActiveValue::Set(self.away_team),
            stadium: ActiveValue::Set(self.stadium),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fixture with default values.
pub async fn create_fixture(db: &DatabaseConnection) -> Result<entity::fixture::Model, DbErr> {
    FixtureFactory::new(db).build().await
}

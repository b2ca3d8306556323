//! Match fixture management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::fixture::FixtureRepository,
    error::AppError,
    model::fixture::{Fixture, SaveFixtureParams},
};

pub struct FixtureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveFixtureParams) -> Result<Fixture, AppError> {
        validate(&params)?;

        Ok(FixtureRepository::new(self.db).create(params).await?)
    }

    /// Gets every fixture ordered by date, then kick-off time.
    pub async fn get_all(&self) -> Result<Vec<Fixture>, AppError> {
        Ok(FixtureRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Fixture>, AppError> {
        Ok(FixtureRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn update(&self, id: i32, params: SaveFixtureParams) -> Result<Fixture, AppError> {
        validate(&params)?;

        FixtureRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Fixture not found.".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !FixtureRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Fixture not found.".to_string()));
        }

        Ok(())
    }
}

fn validate(params: &SaveFixtureParams) -> Result<(), AppError> {
    if params.home_team.is_empty() || params.away_team.is_empty() {
        return Err(AppError::BadRequest(
            "Home and away teams are required.".to_string(),
        ));
    }

    Ok(())
}

//! Match fixture data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::fixture::{Fixture, SaveFixtureParams};

use entity::fixture::Column;

pub struct FixtureRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveFixtureParams) -> Result<Fixture, DbErr> {
        let entity = entity::fixture::ActiveModel {
            date: ActiveValue::Set(params.date),
            time: ActiveValue::Set(params.time),
            home_team: ActiveValue::Set(params.home_team),
            away_team: ActiveValue::Set(params.away_team),
            stadium: ActiveValue::Set(params.stadium),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Fixture::from_entity(entity))
    }

    /// Gets every fixture in kick-off order.
    pub async fn get_all(&self) -> Result<Vec<Fixture>, DbErr> {
        let entities = entity::prelude::Fixture::find()
            .order_by_asc(Column::Date)
            .order_by_asc(Column::Time)
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Fixture::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Fixture>, DbErr> {
        Ok(entity::prelude::Fixture::find_by_id(id)
            .one(self.db)
            .await?
            .map(Fixture::from_entity))
    }

    /// Replaces every editable field of a fixture.
    ///
    /// # Returns
    /// - `Ok(Some(Fixture))` - The updated fixture
    /// - `Ok(None)` - No fixture with this id
    pub async fn update(
        &self,
        id: i32,
        params: SaveFixtureParams,
    ) -> Result<Option<Fixture>, DbErr> {
        let Some(existing) = entity::prelude::Fixture::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model = existing.into_active_model();
        active_model.date = ActiveValue::Set(params.date);
        active_model.time = ActiveValue::Set(params.time);
        active_model.home_team = ActiveValue::Set(params.home_team);
        active_model.away_team = ActiveValue::Set(params.away_team);
        active_model.stadium = ActiveValue::Set(params.stadium);

        let entity = active_model.update(self.db).await?;

        Ok(Some(Fixture::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Fixture::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

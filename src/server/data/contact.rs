//! Contact submission data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::contact::{Contact, SaveContactParams};

use entity::contact::Column;

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveContactParams) -> Result<Contact, DbErr> {
        let entity = entity::contact::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            inquiry_type: ActiveValue::Set(params.inquiry_type),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            is_resolved: ActiveValue::Set(params.is_resolved),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Contact::from_entity(entity))
    }

    /// Gets every submission, newest first.
    pub async fn get_all(&self) -> Result<Vec<Contact>, DbErr> {
        let entities = entity::prelude::Contact::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Contact::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Contact>, DbErr> {
        Ok(entity::prelude::Contact::find_by_id(id)
            .one(self.db)
            .await?
            .map(Contact::from_entity))
    }

    /// Replaces every editable field of a submission.
    ///
    /// # Returns
    /// - `Ok(true)` - The submission was updated
    /// - `Ok(false)` - No submission with this id
    pub async fn update(&self, id: i32, params: SaveContactParams) -> Result<bool, DbErr> {
        let Some(existing) = entity::prelude::Contact::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active_model = existing.into_active_model();
        active_model.full_name = ActiveValue::Set(params.full_name);
        active_model.email = ActiveValue::Set(params.email);
        active_model.phone_number = ActiveValue::Set(params.phone_number);
        active_model.inquiry_type = ActiveValue::Set(params.inquiry_type);
        active_model.subject = ActiveValue::Set(params.subject);
        active_model.message = ActiveValue::Set(params.message);
        active_model.is_resolved = ActiveValue::Set(params.is_resolved);
        active_model.update(self.db).await?;

        Ok(true)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contact::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }
}

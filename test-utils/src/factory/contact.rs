//! Contact factory for creating test contact-form submissions.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contacts.
pub struct ContactFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    email: String,
    subject: String,
    is_resolved: bool,
}

impl<'a> ContactFactory<'a> {
    /// Creates a new ContactFactory with an unresolved general inquiry.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("Fan {}", id),
            email: format!("fan{}@example.com", id),
            subject: format!("Question {}", id),
            is_resolved: false,
        }
    }

    /// Sets the subject line.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets whether the inquiry has been resolved.
    pub fn resolved(mut self, is_resolved: bool) -> Self {
        self.is_resolved = is_resolved;
        self
    }

    /// Builds and inserts the contact entity into the database.
    pub async fn build(self) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            id: ActiveValue::NotSet,
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set("76111111".to_string()),
            inquiry_type: ActiveValue::Set("General".to_string()),
            subject: ActiveValue::Set(self.subject),
            message: ActiveValue::Set("When is the next home game?".to_string()),
            is_resolved: ActiveValue::Set(self.is_resolved),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unresolved contact with default values.
pub async fn create_contact(db: &DatabaseConnection) -> Result<entity::contact::Model, DbErr> {
    ContactFactory::new(db).build().await
}

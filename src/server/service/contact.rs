//! Contact-form submissions.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::contact::ContactRepository,
    error::AppError,
    model::contact::{Contact, SaveContactParams},
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a submission from the public contact form.
    ///
    /// # Returns
    /// - `Ok(Contact)` - The stored submission
    /// - `Err(AppError::BadRequest)` - Name, email or message is blank
    pub async fn create(&self, params: SaveContactParams) -> Result<Contact, AppError> {
        validate(&params)?;

        let contact = ContactRepository::new(self.db).create(params).await?;

        tracing::info!("Received contact submission {}", contact.id);

        Ok(contact)
    }

    pub async fn get_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Contact>, AppError> {
        Ok(ContactRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn update(&self, id: i32, params: SaveContactParams) -> Result<(), AppError> {
        validate(&params)?;

        if !ContactRepository::new(self.db).update(id, params).await? {
            return Err(AppError::NotFound("Contact not found.".to_string()));
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ContactRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Contact not found.".to_string()));
        }

        Ok(())
    }
}

fn validate(params: &SaveContactParams) -> Result<(), AppError> {
    let required = [&params.full_name, &params.email, &params.message];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(AppError::BadRequest(
            "Missing required contact information.".to_string(),
        ));
    }

    Ok(())
}

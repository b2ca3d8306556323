//! Product factory for creating test product entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    color: String,
    price: i64,
    image_url: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Jersey {n}"` where n is auto-incremented
    /// - color: `"Black"`, price: 25000 minor units, active
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Jersey {}", id),
            color: "Black".to_string(),
            price: 25000,
            image_url: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the product color.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the price in minor units.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets whether the product is listed.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            color: ActiveValue::Set(self.color),
            price: ActiveValue::Set(self.price),
            image_url: ActiveValue::Set(self.image_url),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

//! Product domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::product::ProductDto, server::model::upload::UploadedFile, server::util::money};

/// Merchandise item. Products are never physically deleted, only deactivated.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub color: String,
    /// Price in minor units.
    pub price: i64,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            color: entity.color,
            price: entity.price,
            image_url: entity.image_url,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            id: self.id,
            name: self.name,
            color: self.color,
            price: money::to_decimal(self.price),
            image_url: self.image_url,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Raw product form as received over multipart. Every field is optional so the same
/// shape serves both creation and partial update.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub color: Option<String>,
    pub price: Option<String>,
    pub is_active: Option<String>,
    pub image: Option<UploadedFile>,
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub name: String,
    pub color: String,
    pub price: i64,
    pub image_url: Option<String>,
}

/// Partial product update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub name: Option<String>,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub is_active: Option<bool>,
    pub image_url: Option<String>,
}

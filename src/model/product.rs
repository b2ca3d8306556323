use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub color: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductResponseDto {
    pub message: String,
    pub product: ProductDto,
}

/// Multipart product form, documented for OpenAPI only. Every field is optional on update.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ProductForm {
    pub name: Option<String>,
    pub color: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub price: Option<String>,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

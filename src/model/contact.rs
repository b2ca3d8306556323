use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
    pub is_resolved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SaveContactDto {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub inquiry_type: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub is_resolved: bool,
}

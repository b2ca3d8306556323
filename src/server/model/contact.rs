//! Contact-form submission domain models.

use chrono::{DateTime, Utc};

use crate::model::contact::{ContactDto, SaveContactDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
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

impl Contact {
    pub fn from_entity(entity: entity::contact::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            phone_number: entity.phone_number,
            inquiry_type: entity.inquiry_type,
            subject: entity.subject,
            message: entity.message,
            is_resolved: entity.is_resolved,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            phone_number: self.phone_number,
            inquiry_type: self.inquiry_type,
            subject: self.subject,
            message: self.message,
            is_resolved: self.is_resolved,
            created_at: self.created_at,
        }
    }
}

/// Values for creating or fully replacing a contact submission.
#[derive(Debug, Clone)]
pub struct SaveContactParams {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub inquiry_type: String,
    pub subject: String,
    pub message: String,
    pub is_resolved: bool,
}

impl SaveContactParams {
    pub fn from_dto(dto: SaveContactDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            phone_number: dto.phone_number,
            inquiry_type: dto.inquiry_type,
            subject: dto.subject,
            message: dto.message,
            is_resolved: dto.is_resolved,
        }
    }
}

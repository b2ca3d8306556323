//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Enumerated columns are parsed into closed enums here, so an unknown stored value is
//! caught at the boundary instead of leaking into business logic.

pub mod contact;
pub mod fixture;
pub mod fulfilment;
pub mod member;
pub mod news;
pub mod order;
pub mod payment;
pub mod product;
pub mod upload;

//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating repository calls with the asset store, notifier and
//!   payment gateway
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod contact;
pub mod fixture;
pub mod member;
pub mod news;
pub mod order;
pub mod product;
pub mod reconcile;

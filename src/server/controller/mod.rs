//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs into server parameter models, call
//! the matching service and convert the resulting domain models back into DTOs. Each
//! handler carries a `utoipa::path` annotation collected by the router.

pub mod contact;
pub mod fixture;
pub mod member;
pub mod news;
pub mod order;
pub mod product;

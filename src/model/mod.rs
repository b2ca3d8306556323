//! API data transfer objects.
//!
//! Request and response bodies exchanged with HTTP clients. These types carry serde
//! and OpenAPI schema derives only; conversion to and from server domain models lives
//! in `server::model`.

pub mod api;
pub mod contact;
pub mod fixture;
pub mod member;
pub mod news;
pub mod order;
pub mod product;

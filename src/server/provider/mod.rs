//! External collaborators: asset storage, email delivery and the payment gateway.
//!
//! Each collaborator is an `async_trait` trait object held in `AppState`, with one
//! production implementation. Services only see the traits, so tests substitute
//! in-memory implementations.

pub mod asset;
pub mod email;
pub mod payment;

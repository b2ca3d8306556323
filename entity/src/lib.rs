//! SeaORM entity models for the club database.
//!
//! One module per table. Enumerated columns (`payment_status`, `status`,
//! `fulfilment_stage`, `membership_tier`) are stored as plain strings and parsed
//! into domain enums at the repository boundary. Money columns hold integer
//! minor units.

pub mod prelude;

pub mod code_sequence;
pub mod contact;
pub mod fixture;
pub mod member;
pub mod news;
pub mod order;
pub mod order_item;
pub mod product;

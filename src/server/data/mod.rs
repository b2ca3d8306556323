//! Data access layer.
//!
//! One repository per table. Repositories borrow a database connection, run SeaORM
//! queries, and convert entity models into server domain models at the boundary.
//! Fulfilment stage changes are conditional updates guarded on the stage the caller
//! expects the row to be in, and report whether the row actually moved.

pub mod code_sequence;
pub mod contact;
pub mod fixture;
pub mod member;
pub mod news;
pub mod order;
pub mod product;

#[cfg(test)]
mod test;

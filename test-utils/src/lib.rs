//! Highlanders Test Utils
//!
//! Shared testing utilities for the club backend. Provides a builder for test contexts
//! backed by in-memory SQLite databases and entity factories that insert rows with
//! sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Member;
//!
//! #[tokio::test]
//! async fn test_member_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Member)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;

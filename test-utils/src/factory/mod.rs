//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let product = factory::create_product(&db).await?;
//! let (order, items) = factory::order::OrderFactory::new(&db)
//!     .item(&product, 2)
//!     .build()
//!     .await?;
//!
//! let member = factory::member::MemberFactory::new(&db)
//!     .member_code("MBH-007")
//!     .build()
//!     .await?;
//! ```

pub mod contact;
pub mod fixture;
pub mod helpers;
pub mod member;
pub mod news;
pub mod order;
pub mod product;

pub use contact::create_contact;
pub use fixture::create_fixture;
pub use member::create_member;
pub use news::create_news;
pub use order::create_order;
pub use product::create_product;

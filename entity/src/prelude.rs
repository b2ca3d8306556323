pub use super::code_sequence::Entity as CodeSequence;
pub use super::contact::Entity as Contact;
pub use super::fixture::Entity as Fixture;
pub use super::member::Entity as Member;
pub use super::news::Entity as News;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;

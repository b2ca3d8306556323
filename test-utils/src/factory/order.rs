//! Order factory for creating test orders together with their items.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// Items are snapshotted from the given product rows, and the order total is the sum
/// of the item line totals.
///
/// # Example
///
/// ```rust,ignore
/// let (order, items) = OrderFactory::new(&db)
///     .order_code("ABCD1234")
///     .item(&product, 2)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    order_code: String,
    customer_full_name: String,
    customer_email: String,
    status: String,
    fulfilment_stage: String,
    items: Vec<(entity::product::Model, i32)>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_code: `"T{n:07X}"` where n is auto-incremented
    /// - status: `"Pending"`, fulfilment_stage: `"pending"`, no items
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entities
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            order_code: format!("T{:07X}", id),
            customer_full_name: format!("Customer {}", id),
            customer_email: format!("customer{}@example.com", id),
            status: "Pending".to_string(),
            fulfilment_stage: "pending".to_string(),
            items: Vec::new(),
        }
    }

    /// Sets the order code.
    pub fn order_code(mut self, order_code: impl Into<String>) -> Self {
        self.order_code = order_code.into();
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the stored fulfilment stage string.
    pub fn fulfilment_stage(mut self, fulfilment_stage: impl Into<String>) -> Self {
        self.fulfilment_stage = fulfilment_stage.into();
        self
    }

    /// Adds an item for `product` with the given quantity.
    pub fn item(mut self, product: &entity::product::Model, quantity: i32) -> Self {
        self.items.push((product.clone(), quantity));
        self
    }

    /// Builds and inserts the order and its items.
    ///
    /// # Returns
    /// - `Ok((order, items))` - Created order entity and its item entities
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
        let total: i64 = self
            .items
            .iter()
            .map(|(product, quantity)| product.price * i64::from(*quantity))
            .sum();

        let order = entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            order_code: ActiveValue::Set(self.order_code),
            customer_full_name: ActiveValue::Set(self.customer_full_name),
            customer_email: ActiveValue::Set(self.customer_email),
            customer_phone: ActiveValue::Set(None),
            shipping_address: ActiveValue::Set("1 Stadium Road, Mbabane".to_string()),
            status: ActiveValue::Set(self.status),
            total_amount: ActiveValue::Set(total),
            fulfilment_stage: ActiveValue::Set(self.fulfilment_stage),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (product, quantity) in self.items {
            let item = entity::order_item::ActiveModel {
                id: ActiveValue::NotSet,
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product.id),
                product_name: ActiveValue::Set(product.name.clone()),
                color: ActiveValue::Set(product.color.clone()),
                size: ActiveValue::Set("M".to_string()),
                quantity: ActiveValue::Set(quantity),
                unit_price: ActiveValue::Set(product.price),
                line_total: ActiveValue::Set(product.price * i64::from(quantity)),
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok((order, items))
    }
}

/// Creates a pending order without items.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    let (order, _) = OrderFactory::new(db).build().await?;
    Ok(order)
}

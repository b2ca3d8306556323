//! Order data repository.
//!
//! Orders are always loaded together with their items. Creation inserts the order
//! and its items in one transaction so a partially written order is never visible.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::{
    error::AppError,
    model::{
        fulfilment::FulfilmentStage,
        order::{CreateOrderParams, Order, OrderStatus},
    },
};

use entity::order::Column;

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a pending order and all of its items in a single transaction.
    ///
    /// # Arguments
    /// - `params` - Priced order with its generated order code
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order with its items
    /// - `Err(AppError::BadRequest)` - The order total overflows
    /// - `Err(AppError::DbErr)` - Any insert failed; nothing is kept
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        let total_amount = params
            .total_amount()
            .ok_or_else(|| AppError::BadRequest("Order total is too large.".to_string()))?;
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            order_code: ActiveValue::Set(params.order_code),
            customer_full_name: ActiveValue::Set(params.customer_full_name),
            customer_email: ActiveValue::Set(params.customer_email),
            customer_phone: ActiveValue::Set(params.customer_phone),
            shipping_address: ActiveValue::Set(params.shipping_address),
            status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            total_amount: ActiveValue::Set(total_amount),
            fulfilment_stage: ActiveValue::Set(FulfilmentStage::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut items = Vec::with_capacity(params.items.len());
        for item in params.items {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(item.product_id),
                product_name: ActiveValue::Set(item.product_name),
                color: ActiveValue::Set(item.color),
                size: ActiveValue::Set(item.size),
                quantity: ActiveValue::Set(item.quantity),
                unit_price: ActiveValue::Set(item.unit_price),
                line_total: ActiveValue::Set(item.line_total),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            items.push(item);
        }

        txn.commit().await?;

        Order::from_entity(order, items)
    }

    /// Gets every order with its items, newest first.
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        let orders = entity::prelude::Order::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(self.db)
            .await?;

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        for item in entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.is_in(order_ids))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?
        {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                Order::from_entity(order, items)
            })
            .collect()
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        self.with_items(order).await.map(Some)
    }

    /// Finds an order by its 8-character business code. Matching is exact.
    pub async fn find_by_code(&self, order_code: &str) -> Result<Option<Order>, AppError> {
        let Some(order) = entity::prelude::Order::find()
            .filter(Column::OrderCode.eq(order_code))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        self.with_items(order).await.map(Some)
    }

    /// Marks a pending order as cancelled.
    ///
    /// # Returns
    /// - `Ok(true)` - Order was pending and is now cancelled
    /// - `Ok(false)` - Order was not pending; nothing changed
    pub async fn cancel(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(Column::Status, Expr::value(OrderStatus::Cancelled.as_str()))
            .filter(Column::Id.eq(id))
            .filter(Column::Status.eq(OrderStatus::Pending.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Commits the paid status, moving the order from `pending` to `status_committed`.
    ///
    /// Cancelled orders are never marked paid by this update.
    pub async fn commit_paid(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(Column::Status, Expr::value(OrderStatus::Paid.as_str()))
            .col_expr(
                Column::FulfilmentStage,
                Expr::value(FulfilmentStage::StatusCommitted.as_str()),
            )
            .filter(Column::Id.eq(id))
            .filter(Column::FulfilmentStage.eq(FulfilmentStage::Pending.as_str()))
            .filter(Column::Status.ne(OrderStatus::Cancelled.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Moves an order from stage `from` to stage `to` if it is still at `from`.
    pub async fn advance_stage(
        &self,
        id: i32,
        from: FulfilmentStage,
        to: FulfilmentStage,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::update_many()
            .col_expr(Column::FulfilmentStage, Expr::value(to.as_str()))
            .filter(Column::Id.eq(id))
            .filter(Column::FulfilmentStage.eq(from.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Paid orders whose fulfilment has not reached `notification_sent`.
    pub async fn get_incomplete_fulfilments(&self) -> Result<Vec<Order>, AppError> {
        let orders = entity::prelude::Order::find()
            .filter(Column::Status.eq(OrderStatus::Paid.as_str()))
            .filter(Column::FulfilmentStage.ne(FulfilmentStage::NotificationSent.as_str()))
            .order_by_asc(Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            result.push(self.with_items(order).await?);
        }

        Ok(result)
    }

    async fn with_items(&self, order: entity::order::Model) -> Result<Order, AppError> {
        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order.id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await?;

        Order::from_entity(order, items)
    }
}

//! Order domain models and placement parameters.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::order::{CreateOrderDto, OrderDto, OrderItemDto},
    server::{
        error::{internal::InternalError, AppError},
        model::fulfilment::FulfilmentStage,
        util::money,
    },
};

/// Size recorded when an order line does not name one.
pub const DEFAULT_SIZE: &str = "M";

/// Payment state of a merchandise order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
}

impl OrderStatus {
    /// Parses a status name case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "paid" => Some(Self::Paid),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether an order in this status may be moved to `next`.
    ///
    /// Pending orders may be paid or cancelled; re-applying the current status is allowed.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self == next || (self == Self::Pending && next != Self::Pending)
    }

    fn from_stored(value: &str) -> Result<Self, InternalError> {
        Self::parse(value).ok_or_else(|| InternalError::UnknownStoredValue {
            column: "status",
            value: value.to_string(),
        })
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line of an order with the product details captured at purchase time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: i32,
    pub product_name: String,
    pub color: String,
    pub size: String,
    pub quantity: i32,
    /// Unit price in minor units.
    pub unit_price: i64,
    /// `unit_price × quantity` in minor units.
    pub line_total: i64,
}

impl OrderItem {
    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            product_id: entity.product_id,
            product_name: entity.product_name,
            color: entity.color,
            size: entity.size,
            quantity: entity.quantity,
            unit_price: entity.unit_price,
            line_total: entity.line_total,
        }
    }

    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            product_id: self.product_id,
            product_name: self.product_name,
            color: self.color,
            size: self.size,
            quantity: self.quantity,
            unit_price: money::to_decimal(self.unit_price),
            line_total: money::to_decimal(self.line_total),
        }
    }
}

/// Merchandise order with its items.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    /// 8-character uppercase hex business code.
    pub order_code: String,
    pub customer_full_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    pub status: OrderStatus,
    /// Sum of item line totals in minor units.
    pub total_amount: i64,
    pub fulfilment_stage: FulfilmentStage,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Converts an order entity and its item entities into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The order entity from the database
    /// - `items` - Item entities belonging to the order, in insertion order
    ///
    /// # Returns
    /// - `Ok(Order)` - Successfully converted domain model
    /// - `Err(AppError::InternalErr)` - The stored status or stage is unknown
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            status: OrderStatus::from_stored(&entity.status)?,
            fulfilment_stage: FulfilmentStage::from_stored(&entity.fulfilment_stage)?,
            id: entity.id,
            order_code: entity.order_code,
            customer_full_name: entity.customer_full_name,
            customer_email: entity.customer_email,
            customer_phone: entity.customer_phone,
            shipping_address: entity.shipping_address,
            total_amount: entity.total_amount,
            created_at: entity.created_at,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
        })
    }

    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_code: self.order_code,
            customer_full_name: self.customer_full_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            shipping_address: self.shipping_address,
            status: self.status.as_str().to_string(),
            total_amount: money::to_decimal(self.total_amount),
            fulfilment_stage: self.fulfilment_stage.as_str().to_string(),
            created_at: self.created_at,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }
}

/// Requested order line before it is priced against the catalogue.
#[derive(Debug, Clone)]
pub struct OrderLineRequest {
    pub product_id: i32,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: i32,
}

/// Customer request to place an order.
#[derive(Debug, Clone)]
pub struct PlaceOrderParams {
    pub customer_full_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    pub lines: Vec<OrderLineRequest>,
}

impl PlaceOrderParams {
    pub fn from_dto(dto: CreateOrderDto) -> Self {
        Self {
            customer_full_name: dto.customer_full_name,
            customer_email: dto.customer_email,
            customer_phone: dto.customer_phone.filter(|phone| !phone.trim().is_empty()),
            shipping_address: dto.shipping_address,
            lines: dto
                .items
                .into_iter()
                .map(|item| OrderLineRequest {
                    product_id: item.product_id,
                    color: item.color,
                    size: item.size,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

/// Priced order ready to be inserted.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub order_code: String,
    pub customer_full_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    pub items: Vec<OrderItem>,
}

impl CreateOrderParams {
    /// Order total in minor units: the sum of every item's line total.
    ///
    /// # Returns
    /// - `Some(i64)` - The total
    /// - `None` - The sum does not fit in an `i64`
    pub fn total_amount(&self) -> Option<i64> {
        self.items
            .iter()
            .try_fold(0i64, |total, item| total.checked_add(item.line_total))
    }
}

/// Order together with the checkout URL issued at placement.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub redirect_url: String,
}

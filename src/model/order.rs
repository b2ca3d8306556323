use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderItemDto {
    pub product_id: i32,
    /// Defaults to the product's own color.
    #[serde(default)]
    pub color: Option<String>,
    /// Defaults to `M`.
    #[serde(default)]
    pub size: Option<String>,
    pub quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    pub customer_full_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    #[serde(default)]
    pub items: Vec<CreateOrderItemDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderResponseDto {
    pub message: String,
    pub order_id: i32,
    pub order_code: String,
    pub redirect_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub product_id: i32,
    pub product_name: String,
    pub color: String,
    pub size: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub order_code: String,
    pub customer_full_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    pub status: String,
    pub total_amount: Decimal,
    pub fulfilment_stage: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusResponseDto {
    pub message: String,
    pub order_id: i32,
    pub new_status: String,
}

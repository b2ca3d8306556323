use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Form, Json,
};

use crate::{
    model::{
        api::{ErrorDto, UpdateStatusDto},
        order::{CreateOrderDto, CreateOrderResponseDto, OrderDto, OrderStatusResponseDto},
    },
    server::{
        error::AppError,
        model::{
            order::{Order, PlaceOrderParams},
            payment::{PaymentNotification, PaymentSubject},
        },
        service::{order::OrderService, reconcile::ReconciliationService},
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Place a merchandise order and start its payment.
///
/// Prices every line from the catalogue, stores the order with its items and
/// returns the PayFast checkout URL for the order total.
///
/// # Arguments
/// - `state` - Application state
/// - `payload` - Customer details and order lines
///
/// # Returns
/// - `201 Created` - Order created, with checkout URL
/// - `400 Bad Request` - No items, invalid quantity or unavailable product
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders/initiate-payment",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order created", body = CreateOrderResponseDto),
        (status = 400, description = "Invalid order payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn initiate_payment(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = PlaceOrderParams::from_dto(payload);

    let placed = OrderService::new(&state).place(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponseDto {
            message: "Order created. Redirect to PayFast.".to_string(),
            order_id: placed.order.id,
            order_code: placed.order.order_code,
            redirect_url: placed.redirect_url,
        }),
    ))
}

/// PayFast instant payment notification for orders.
///
/// # Returns
/// - `200 OK` - Notification processed, including ignored notifications
/// - `400 Bad Request` - `item_name` carries no order code
/// - `404 Not Found` - No order has the code
/// - `500 Internal Server Error` - Fulfilment failed; a retry resumes it
#[utoipa::path(
    post,
    path = "/api/orders/payfast-notify",
    tag = ORDER_TAG,
    request_body(content = String, content_type = "application/x-www-form-urlencoded",
        description = "PayFast notification fields, including item_name and payment_status"),
    responses(
        (status = 200, description = "Notification processed"),
        (status = 400, description = "Missing order code", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn order_payment_notification(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let notification = PaymentNotification::new(fields);

    let outcome = ReconciliationService::new(&state)
        .handle_notification(PaymentSubject::Order, &notification)
        .await?;

    tracing::debug!(
        "Order payment notification for '{}': {:?}",
        notification.item_name(),
        outcome
    );

    Ok(StatusCode::OK)
}

/// List all orders with their items, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "All orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::new(&state).get_all().await?;

    Ok(Json(
        orders.into_iter().map(Order::into_dto).collect::<Vec<_>>(),
    ))
}

/// Mark an order paid or cancelled.
///
/// Marking an order paid emails the order confirmation.
///
/// # Returns
/// - `200 OK` - Status applied
/// - `400 Bad Request` - Unknown status or disallowed transition
/// - `404 Not Found` - No order with this id
/// - `500 Internal Server Error` - Email or database error
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order id")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Status updated", body = OrderStatusResponseDto),
        (status = 400, description = "Invalid status", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let order = OrderService::new(&state)
        .update_status(id, &payload.status)
        .await?;

    Ok(Json(OrderStatusResponseDto {
        message: format!("Order status updated to {}", order.status),
        order_id: order.id,
        new_status: order.status.to_string(),
    }))
}

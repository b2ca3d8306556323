//! Merchandise order placement and status management.

use std::collections::HashMap;

use crate::server::{
    data::{order::OrderRepository, product::ProductRepository},
    error::AppError,
    model::{
        order::{
            CreateOrderParams, Order, OrderItem, OrderStatus, PlaceOrderParams, PlacedOrder,
            DEFAULT_SIZE,
        },
        payment::{CheckoutRequest, PaymentSubject},
        product::Product,
    },
    service::reconcile::ReconciliationService,
    state::AppState,
    util::{code, parse},
};

pub struct OrderService<'a> {
    state: &'a AppState,
}

impl<'a> OrderService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Prices an order against the catalogue, stores it, and prepares its payment.
    ///
    /// Each line takes the product's current name and price; a missing color falls
    /// back to the product's color and a missing size to `M`.
    ///
    /// # Arguments
    /// - `params` - Customer details and requested lines
    ///
    /// # Returns
    /// - `Ok(PlacedOrder)` - Created order and the PayFast checkout URL
    /// - `Err(AppError::BadRequest)` - No lines, a quantity below one, a product
    ///   that does not exist or is inactive, or a total that overflows
    pub async fn place(&self, params: PlaceOrderParams) -> Result<PlacedOrder, AppError> {
        if params.lines.is_empty() {
            return Err(AppError::BadRequest("Invalid order payload.".to_string()));
        }

        let product_repo = ProductRepository::new(&self.state.db);
        let mut products: HashMap<i32, Product> = HashMap::new();
        let mut items = Vec::with_capacity(params.lines.len());

        for line in params.lines {
            if line.quantity < 1 {
                return Err(AppError::BadRequest(format!(
                    "Invalid quantity for product {}.",
                    line.product_id
                )));
            }

            let product = match products.get(&line.product_id) {
                Some(product) => product.clone(),
                None => {
                    let product = product_repo
                        .find_by_id(line.product_id)
                        .await?
                        .filter(|product| product.is_active)
                        .ok_or_else(|| {
                            AppError::BadRequest(format!(
                                "Product {} is not available.",
                                line.product_id
                            ))
                        })?;
                    products.insert(product.id, product.clone());
                    product
                }
            };

            let line_total = product
                .price
                .checked_mul(i64::from(line.quantity))
                .ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Order line for product {} is too large.",
                        line.product_id
                    ))
                })?;

            items.push(OrderItem {
                product_id: product.id,
                product_name: product.name,
                color: parse::non_blank(line.color).unwrap_or(product.color),
                size: parse::non_blank(line.size).unwrap_or_else(|| DEFAULT_SIZE.to_string()),
                quantity: line.quantity,
                unit_price: product.price,
                line_total,
            });
        }

        let order = OrderRepository::new(&self.state.db)
            .create(CreateOrderParams {
                order_code: code::generate_order_code(),
                customer_full_name: params.customer_full_name,
                customer_email: params.customer_email,
                customer_phone: params.customer_phone,
                shipping_address: params.shipping_address,
                items,
            })
            .await?;

        let redirect_url = self.state.gateway.checkout_url(&CheckoutRequest {
            subject: PaymentSubject::Order,
            item_name: PaymentSubject::Order.item_name(&order.order_code),
            amount: order.total_amount,
            name_first: None,
            email_address: order.customer_email.clone(),
        })?;

        tracing::info!(
            "Placed order {} with {} item(s)",
            order.order_code,
            order.items.len()
        );

        Ok(PlacedOrder {
            order,
            redirect_url,
        })
    }

    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(&self.state.db).get_all().await
    }

    /// Applies an admin status change to an order.
    ///
    /// Marking an order paid runs fulfilment, which emails the confirmation.
    /// Re-applying `Paid` resumes an interrupted fulfilment.
    ///
    /// # Returns
    /// - `Ok(Order)` - The order after the change
    /// - `Err(AppError::BadRequest)` - Unknown status or disallowed transition
    /// - `Err(AppError::NotFound)` - No order with this id
    pub async fn update_status(&self, id: i32, status: &str) -> Result<Order, AppError> {
        let next = OrderStatus::parse(status)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid order status '{}'.", status)))?;

        let repo = OrderRepository::new(&self.state.db);
        let order = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))?;

        if !order.status.can_transition_to(next) {
            return Err(AppError::BadRequest(format!(
                "Invalid status transition from {} to {}.",
                order.status, next
            )));
        }

        match next {
            OrderStatus::Paid => ReconciliationService::new(self.state).pay_order(order.id).await,
            OrderStatus::Cancelled => {
                if repo.cancel(order.id).await? {
                    tracing::info!("Cancelled order {}", order.order_code);
                }
                repo.find_by_id(order.id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Order not found.".to_string()))
            }
            OrderStatus::Pending => Ok(order),
        }
    }
}

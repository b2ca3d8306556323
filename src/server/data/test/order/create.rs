use super::*;

fn line(product: &entity::product::Model, size: &str, quantity: i32) -> OrderItem {
    OrderItem {
        product_id: product.id,
        product_name: product.name.clone(),
        color: product.color.clone(),
        size: size.to_string(),
        quantity,
        unit_price: product.price,
        line_total: product.price * i64::from(quantity),
    }
}

/// Tests creating an order with items.
///
/// Verifies that the order starts pending with its total equal to the sum of the
/// line totals and that every item is stored in order.
///
/// Expected: Ok with the created order and its items
#[tokio::test]
async fn creates_order_with_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jersey = factory::product::ProductFactory::new(db)
        .name("Home Jersey")
        .price(25_000)
        .build()
        .await?;
    let scarf = factory::product::ProductFactory::new(db)
        .name("Scarf")
        .price(8_050)
        .build()
        .await?;

    let order = OrderRepository::new(db)
        .create(CreateOrderParams {
            order_code: "1A2B3C4D".to_string(),
            customer_full_name: "Sipho Nkosi".to_string(),
            customer_email: "sipho@example.com".to_string(),
            customer_phone: None,
            shipping_address: "Plot 4, Manzini".to_string(),
            items: vec![line(&jersey, "L", 2), line(&scarf, "M", 1)],
        })
        .await?;

    assert_eq!(order.order_code, "1A2B3C4D");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.fulfilment_stage, FulfilmentStage::Pending);
    assert_eq!(order.total_amount, 58_050);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].product_name, "Home Jersey");
    assert_eq!(order.items[0].size, "L");
    assert_eq!(order.items[1].line_total, 8_050);

    Ok(())
}

/// Tests that a failing item insert leaves no order behind.
///
/// Uses an item referencing a missing product so the foreign key rejects it.
///
/// Expected: Err and no rows in either table
#[tokio::test]
async fn rolls_back_when_an_item_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let jersey = factory::create_product(db).await?;
    let mut missing = line(&jersey, "M", 1);
    missing.product_id = jersey.id + 100;

    let result = OrderRepository::new(db)
        .create(CreateOrderParams {
            order_code: "DEADBEEF".to_string(),
            customer_full_name: "Sipho Nkosi".to_string(),
            customer_email: "sipho@example.com".to_string(),
            customer_phone: None,
            shipping_address: "Plot 4, Manzini".to_string(),
            items: vec![line(&jersey, "M", 1), missing],
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Order::find().count(db).await?, 0);
    assert_eq!(entity::prelude::OrderItem::find().count(db).await?, 0);

    Ok(())
}

use super::*;

/// Tests listing orders with their items.
///
/// Expected: Ok with the newest order first, each carrying only its own items
#[tokio::test]
async fn lists_orders_with_their_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    let (first, _) = factory::order::OrderFactory::new(db)
        .item(&product, 1)
        .build()
        .await?;
    let (second, _) = factory::order::OrderFactory::new(db)
        .item(&product, 2)
        .item(&product, 3)
        .build()
        .await?;

    let orders = OrderRepository::new(db).get_all().await?;

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].id, second.id);
    assert_eq!(orders[0].items.len(), 2);
    assert_eq!(orders[1].id, first.id);
    assert_eq!(orders[1].items.len(), 1);

    Ok(())
}

/// Tests looking up an order by business code.
///
/// Expected: Ok(Some) with items for a known code, Ok(None) otherwise
#[tokio::test]
async fn finds_order_by_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::create_product(db).await?;
    factory::order::OrderFactory::new(db)
        .order_code("CAFEBABE")
        .item(&product, 4)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let found = repo.find_by_code("CAFEBABE").await?.unwrap();

    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].quantity, 4);
    assert!(repo.find_by_code("FFFFFFFF").await?.is_none());

    Ok(())
}

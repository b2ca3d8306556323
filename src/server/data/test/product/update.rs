use super::*;

/// Tests a partial product update.
///
/// Expected: Ok(Some) with only the provided fields changed
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Product).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::product::ProductFactory::new(db)
        .name("Cap")
        .color("Black")
        .price(9_000)
        .build()
        .await?;

    let updated = ProductRepository::new(db)
        .update(
            created.id,
            UpdateProductParams {
                price: Some(7_500),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 7_500);
    assert_eq!(updated.name, "Cap");
    assert_eq!(updated.color, "Black");

    Ok(())
}

/// Tests updating an unknown product.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Product).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProductRepository::new(db)
        .update(7, UpdateProductParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}

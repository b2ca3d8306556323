use super::*;

/// Tests creating a product.
///
/// Expected: Ok with an active product carrying the given price
#[tokio::test]
async fn creates_active_product() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::Product).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let product = ProductRepository::new(db)
        .create(CreateProductParams {
            name: "Away Jersey".to_string(),
            color: "White".to_string(),
            price: 27_550,
            image_url: None,
        })
        .await?;

    assert!(product.is_active);
    assert_eq!(product.price, 27_550);
    assert_eq!(product.name, "Away Jersey");

    Ok(())
}

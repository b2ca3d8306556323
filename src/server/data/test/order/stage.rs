use super::*;

/// Tests committing the paid status.
///
/// Expected: Ok(true) once, then Ok(false) for the repeated commit
#[tokio::test]
async fn commits_paid_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_order(db).await?;
    let repo = OrderRepository::new(db);

    assert!(repo.commit_paid(created.id).await?);
    assert!(!repo.commit_paid(created.id).await?);

    let order = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
    assert_eq!(order.fulfilment_stage, FulfilmentStage::StatusCommitted);

    Ok(())
}

/// Tests that a cancelled order cannot be paid.
///
/// Expected: Ok(false) from commit_paid and the order stays cancelled
#[tokio::test]
async fn refuses_to_pay_cancelled_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_order(db).await?;
    let repo = OrderRepository::new(db);

    assert!(repo.cancel(created.id).await?);
    assert!(!repo.commit_paid(created.id).await?);

    let order = repo.find_by_id(created.id).await?.unwrap();
    assert_eq!(order.status, OrderStatus::Cancelled);
    assert_eq!(order.fulfilment_stage, FulfilmentStage::Pending);

    Ok(())
}

/// Tests selecting paid orders that were never confirmed by email.
///
/// Expected: Ok with only the paid order stuck before `notification_sent`
#[tokio::test]
async fn lists_incomplete_fulfilments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (stuck, _) = factory::order::OrderFactory::new(db)
        .status("Paid")
        .fulfilment_stage("artifact_ready")
        .build()
        .await?;
    factory::order::OrderFactory::new(db)
        .status("Paid")
        .fulfilment_stage("notification_sent")
        .build()
        .await?;
    factory::create_order(db).await?;

    let incomplete = OrderRepository::new(db).get_incomplete_fulfilments().await?;

    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, stuck.id);

    Ok(())
}

use highlanders::server::{
    data::{member::MemberRepository, order::OrderRepository},
    error::AppError,
    model::{fulfilment::FulfilmentStage, member::PaymentStatus},
    service::reconcile::ReconciliationService,
};
use test_utils::factory::{member::MemberFactory, order::OrderFactory};

use crate::util::setup::test_setup;

/// Tests resuming records that stopped between stages.
///
/// Expected: Ok(2) with both records at notification_sent and one email each
#[tokio::test]
async fn resumes_interrupted_fulfilment() -> Result<(), AppError> {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db())
        .payment_status("Accepted")
        .fulfilment_stage("status_committed")
        .build()
        .await?;
    let (order, _) = OrderFactory::new(test.db())
        .status("Paid")
        .fulfilment_stage("artifact_ready")
        .build()
        .await?;

    let resumed = ReconciliationService::new(&test.state)
        .resume_incomplete()
        .await?;

    assert_eq!(resumed, 2);
    let member = MemberRepository::new(test.db())
        .find_by_id(&member.id)
        .await?
        .unwrap();
    assert_eq!(member.fulfilment_stage, FulfilmentStage::NotificationSent);
    assert!(member.card_url.is_some());
    let order = OrderRepository::new(test.db())
        .find_by_id(order.id)
        .await?
        .unwrap();
    assert_eq!(order.fulfilment_stage, FulfilmentStage::NotificationSent);
    assert_eq!(test.notifier.sent().len(), 2);

    Ok(())
}

/// Tests that records awaiting payment or already fulfilled are left alone.
///
/// Expected: Ok(0) and no email
#[tokio::test]
async fn skips_pending_and_fulfilled_records() -> Result<(), AppError> {
    let test = test_setup().await;
    MemberFactory::new(test.db()).build().await?;
    MemberFactory::new(test.db())
        .payment_status("Accepted")
        .card_url(Some("https://assets.test/cards/Card_1.png".to_string()))
        .fulfilment_stage("notification_sent")
        .build()
        .await?;
    OrderFactory::new(test.db()).build().await?;

    let resumed = ReconciliationService::new(&test.state)
        .resume_incomplete()
        .await?;

    assert_eq!(resumed, 0);
    assert!(test.notifier.sent().is_empty());

    Ok(())
}

/// Tests that a provider failure on one record does not stop the sweep.
///
/// Expected: Ok(0) while email fails, records left at artifact_ready, then Ok(2)
#[tokio::test]
async fn continues_past_failed_records() -> Result<(), AppError> {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db())
        .payment_status("Accepted")
        .card_url(Some("https://assets.test/cards/Card_x.png".to_string()))
        .fulfilment_stage("artifact_ready")
        .build()
        .await?;
    OrderFactory::new(test.db())
        .status("Paid")
        .fulfilment_stage("status_committed")
        .build()
        .await?;

    test.notifier.set_failing(true);
    let resumed = ReconciliationService::new(&test.state)
        .resume_incomplete()
        .await?;

    assert_eq!(resumed, 0);
    let stored = MemberRepository::new(test.db())
        .find_by_id(&member.id)
        .await?
        .unwrap();
    assert_eq!(stored.payment_status, PaymentStatus::Accepted);
    assert_eq!(stored.fulfilment_stage, FulfilmentStage::ArtifactReady);

    test.notifier.set_failing(false);
    let resumed = ReconciliationService::new(&test.state)
        .resume_incomplete()
        .await?;

    assert_eq!(resumed, 2);
    assert_eq!(test.notifier.sent().len(), 2);

    Ok(())
}

/// Tests that the sweep finishes a member whose card upload failed during a notification.
///
/// Expected: Err on the notification, then Ok(1) from the sweep with one email
#[tokio::test]
async fn sweep_recovers_failed_card_upload() -> Result<(), AppError> {
    let test = test_setup().await;
    let member = MemberFactory::new(test.db())
        .member_code("MBH-010")
        .build()
        .await?;

    test.assets.set_failing(true);
    let accepted = ReconciliationService::new(&test.state)
        .accept_member(&member.id)
        .await;
    assert!(matches!(accepted, Err(AppError::ProviderErr(_))));

    let stalled = MemberRepository::new(test.db())
        .find_by_id(&member.id)
        .await?
        .unwrap();
    assert_eq!(stalled.payment_status, PaymentStatus::Accepted);
    assert_eq!(stalled.fulfilment_stage, FulfilmentStage::StatusCommitted);
    assert!(stalled.card_url.is_none());
    assert!(test.notifier.sent().is_empty());

    test.assets.set_failing(false);
    let resumed = ReconciliationService::new(&test.state)
        .resume_incomplete()
        .await?;

    assert_eq!(resumed, 1);
    let member = MemberRepository::new(test.db())
        .find_by_id(&member.id)
        .await?
        .unwrap();
    assert_eq!(member.fulfilment_stage, FulfilmentStage::NotificationSent);
    assert!(member.card_url.is_some());
    assert_eq!(test.notifier.sent().len(), 1);

    Ok(())
}

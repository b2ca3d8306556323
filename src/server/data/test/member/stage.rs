use super::*;

/// Tests the full forward walk of a member's fulfilment stages.
///
/// Verifies that each conditional update succeeds exactly once when applied in order.
///
/// Expected: Ok with the member at `notification_sent` holding the card URL
#[tokio::test]
async fn advances_through_every_stage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);

    assert!(repo.commit_accepted(&created.id).await?);
    assert!(repo.attach_card(&created.id, "https://cdn/cards/Card_1.png").await?);
    assert!(
        repo.advance_stage(
            &created.id,
            FulfilmentStage::ArtifactReady,
            FulfilmentStage::NotificationSent
        )
        .await?
    );

    let member = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(member.payment_status, PaymentStatus::Accepted);
    assert_eq!(member.fulfilment_stage, FulfilmentStage::NotificationSent);
    assert_eq!(member.card_url.as_deref(), Some("https://cdn/cards/Card_1.png"));

    Ok(())
}

/// Tests that stage updates only apply from the expected stage.
///
/// Expected: Ok(false) for every update applied out of order or repeated
#[tokio::test]
async fn ignores_updates_from_wrong_stage() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);

    assert!(!repo.attach_card(&created.id, "https://cdn/card.png").await?);
    assert!(repo.commit_accepted(&created.id).await?);
    assert!(!repo.commit_accepted(&created.id).await?);
    assert!(
        !repo
            .advance_stage(
                &created.id,
                FulfilmentStage::ArtifactReady,
                FulfilmentStage::NotificationSent
            )
            .await?
    );

    let member = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(member.fulfilment_stage, FulfilmentStage::StatusCommitted);
    assert!(member.card_url.is_none());

    Ok(())
}

/// Tests that a rejected member is never accepted.
///
/// Expected: Ok(false) from commit_accepted and the status remains rejected
#[tokio::test]
async fn refuses_to_accept_rejected_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;
    let repo = MemberRepository::new(db);

    assert!(repo.reject(&created.id).await?);
    assert!(!repo.reject(&created.id).await?);
    assert!(!repo.commit_accepted(&created.id).await?);

    let member = repo.find_by_id(&created.id).await?.unwrap();
    assert_eq!(member.payment_status, PaymentStatus::Rejected);
    assert_eq!(member.fulfilment_stage, FulfilmentStage::Pending);

    Ok(())
}

/// Tests selecting members whose fulfilment stopped part-way.
///
/// Expected: Ok with only accepted members that have not been notified
#[tokio::test]
async fn lists_incomplete_fulfilments() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let stuck = factory::member::MemberFactory::new(db)
        .payment_status("Accepted")
        .fulfilment_stage("status_committed")
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .payment_status("Accepted")
        .fulfilment_stage("notification_sent")
        .build()
        .await?;
    factory::create_member(db).await?;

    let incomplete = MemberRepository::new(db).get_incomplete_fulfilments().await?;

    assert_eq!(incomplete.len(), 1);
    assert_eq!(incomplete[0].id, stuck.id);

    Ok(())
}

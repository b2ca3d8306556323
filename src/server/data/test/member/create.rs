use super::*;

fn params(member_code: &str) -> CreateMemberParams {
    CreateMemberParams {
        member_code: member_code.to_string(),
        full_name: "Thandi Dlamini".to_string(),
        email: "thandi@example.com".to_string(),
        phone_number: "76123456".to_string(),
        branch: "Mbabane".to_string(),
        tier: MembershipTier::Premium,
        proof_of_payment_url: Some("https://assets.example.com/proofs/a.pdf".to_string()),
    }
}

/// Tests creating a member.
///
/// Verifies that the member is stored under review at the `pending` stage with the
/// fee of the chosen tier.
///
/// Expected: Ok with the created member
#[tokio::test]
async fn creates_member_under_review() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo.create(params("MBH-001")).await?;

    assert_eq!(member.member_code, "MBH-001");
    assert_eq!(member.tier, MembershipTier::Premium);
    assert_eq!(member.fee, 10_000);
    assert_eq!(member.payment_status, PaymentStatus::UnderReview);
    assert_eq!(member.fulfilment_stage, FulfilmentStage::Pending);
    assert!(member.card_url.is_none());
    assert!(uuid::Uuid::parse_str(&member.id).is_ok());

    Ok(())
}

/// Tests the unique member code constraint.
///
/// Expected: Err when the same code is inserted twice
#[tokio::test]
async fn rejects_duplicate_member_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    repo.create(params("MBH-001")).await?;
    let result = repo.create(params("MBH-001")).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

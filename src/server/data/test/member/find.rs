use super::*;
use chrono::{Duration, Utc};

/// Tests looking up a member by business code.
///
/// Expected: Ok(Some) for an exact match, Ok(None) otherwise
#[tokio::test]
async fn finds_member_by_exact_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .member_code("MBH-007")
        .build()
        .await?;

    let repo = MemberRepository::new(db);
    let found = repo.find_by_code("MBH-007").await?;
    let missing = repo.find_by_code("mbh-007").await?;

    assert_eq!(found.map(|m| m.id), Some(created.id));
    assert!(missing.is_none());

    Ok(())
}

/// Tests looking up a member by id.
///
/// Expected: Ok(Some) for a stored id, Ok(None) for an unknown id
#[tokio::test]
async fn finds_member_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_member(db).await?;

    let repo = MemberRepository::new(db);

    assert!(repo.find_by_id(&created.id).await?.is_some());
    assert!(repo.find_by_id("not-a-member").await?.is_none());

    Ok(())
}

/// Tests listing members.
///
/// Expected: Ok with the most recently joined member first
#[tokio::test]
async fn lists_newest_members_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::member::MemberFactory::new(db)
        .member_code("MBH-001")
        .joined_at(now - Duration::days(2))
        .build()
        .await?;
    factory::member::MemberFactory::new(db)
        .member_code("MBH-002")
        .joined_at(now)
        .build()
        .await?;

    let members = MemberRepository::new(db).get_all().await?;
    let codes: Vec<_> = members.iter().map(|m| m.member_code.as_str()).collect();

    assert_eq!(codes, vec!["MBH-002", "MBH-001"]);

    Ok(())
}

/// Tests that stored values outside the known tiers surface as errors.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_tier() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::member::MemberFactory::new(db)
        .tier("Platinum", 99_000)
        .build()
        .await?;

    let result = MemberRepository::new(db).find_by_id(&created.id).await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}

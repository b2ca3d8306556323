use super::*;

/// Tests that codes are ranked by their numeric suffix.
///
/// Verifies that `MBH-1000` outranks `MBH-999` and that codes under other prefixes
/// or with non-numeric suffixes are ignored.
///
/// Expected: Ok(Some(1000))
#[tokio::test]
async fn ranks_codes_numerically() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for code in ["MBH-999", "MBH-1000", "MBH-042", "JNR-5000", "MBH-ABC"] {
        factory::member::MemberFactory::new(db)
            .member_code(code)
            .build()
            .await?;
    }

    let highest = MemberRepository::new(db).highest_code_number("MBH").await?;

    assert_eq!(highest, Some(1000));

    Ok(())
}

/// Tests the result when no member uses the prefix.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_codes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_member_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .member_code("JNR-001")
        .build()
        .await?;

    let highest = MemberRepository::new(db).highest_code_number("MBH").await?;

    assert_eq!(highest, None);

    Ok(())
}

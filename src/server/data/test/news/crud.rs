use super::*;

/// Tests creating an article.
///
/// Expected: Ok with zero likes and no update timestamp
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let news = NewsRepository::new(db)
        .create(CreateNewsParams {
            title: "Highlanders win derby".to_string(),
            link: Some("https://news.example.com/derby".to_string()),
            image_url: None,
        })
        .await?;

    assert_eq!(news.likes, 0);
    assert!(news.updated_at.is_none());

    Ok(())
}

/// Tests listing articles.
///
/// Expected: Ok with the newest article first
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::news::NewsFactory::new(db)
        .title("Older")
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::news::NewsFactory::new(db).title("Newer").build().await?;

    let titles: Vec<_> = NewsRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|n| n.title)
        .collect();

    assert_eq!(titles, vec!["Newer", "Older"]);

    Ok(())
}

/// Tests updating an article.
///
/// Expected: Ok(Some) with the new title and a stamped `updated_at`
#[tokio::test]
async fn updates_and_stamps_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_news(db).await?;

    let updated = NewsRepository::new(db)
        .update(
            created.id,
            UpdateNewsParams {
                title: Some("Season tickets on sale".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.title, "Season tickets on sale");
    assert_eq!(updated.link, created.link);
    assert!(updated.updated_at.is_some());

    Ok(())
}

/// Tests deleting an article.
///
/// Expected: Ok(true) the first time and Ok(false) once it is gone
#[tokio::test]
async fn deletes_article() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_news(db).await?;
    let repo = NewsRepository::new(db);

    assert!(repo.delete(created.id).await?);
    assert!(!repo.delete(created.id).await?);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

use super::*;

/// Tests listing with the unknown `start` key.
///
/// The key has no column, so projects come back in creation order.
///
/// Expected: Ok(Vec) in ascending id order
#[tokio::test]
async fn ignores_unknown_sort_field() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::project::ProjectFactory::new(db).name("B").build().await?;
    let second = factory::project::ProjectFactory::new(db).name("A").build().await?;

    let repo = ProjectRepository::new(db);
    let projects = repo.get_all(&SortKey::parse("-start")).await?;

    let ids: Vec<String> = projects.iter().map(|p| p.id.to_hex()).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests listing sorted descending by a known field.
///
/// Expected: Ok(Vec) ordered by name descending
#[tokio::test]
async fn sorts_by_known_field_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Beta", "Alpha", "Gamma"] {
        factory::project::ProjectFactory::new(db).name(name).build().await?;
    }

    let repo = ProjectRepository::new(db);
    let projects = repo.get_all(&SortKey::parse("-name")).await?;

    let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Gamma", "Beta", "Alpha"]);

    Ok(())
}

/// Tests listing an empty collection.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_empty_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let projects = repo.get_all(&SortKey::parse("-start")).await?;

    assert!(projects.is_empty());

    Ok(())
}

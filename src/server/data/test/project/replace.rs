use super::*;

/// Tests replacing every field of a stored project.
///
/// Verifies that name, description and the whole task list are replaced rather
/// than merged.
///
/// Expected: Ok(Some(ProjectParam)) with the new fields and the same id
#[tokio::test]
async fn replaces_whole_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let id = ObjectId::new();
    repo.create(id, crm_fields()).await?;

    let replacement = ProjectFields {
        name: "BLOG".to_string(),
        description: "Description Project alter".to_string(),
        tasks: vec![task("GO", &["BACK"])],
    };
    let replaced = repo.replace(id, replacement.clone()).await?.unwrap();

    assert_eq!(replaced.id, id);
    assert_eq!(replaced.name, "BLOG");

    let stored = repo.get_by_id(id).await?.unwrap();
    assert_eq!(stored.name, "BLOG");
    assert_eq!(stored.description, "Description Project alter");
    assert_eq!(stored.tasks, replacement.tasks);

    Ok(())
}

/// Tests replacing an id that was never stored.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn returns_none_for_missing_project() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let result = repo
        .replace(fixture::project::MISSING_ID.parse().unwrap(), crm_fields())
        .await?;

    assert!(result.is_none());
    assert_eq!(entity::prelude::Project::find().count(db).await?, 0);

    Ok(())
}

/// Tests that replacing one project leaves others untouched.
///
/// Expected: the other project keeps its fields
#[tokio::test]
async fn leaves_other_projects_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_project(db).await?;
    let other = factory::project::ProjectFactory::new(db)
        .name("Other")
        .build()
        .await?;

    let repo = ProjectRepository::new(db);
    repo.replace(target.id.parse().unwrap(), crm_fields()).await?;

    let stored = repo.get_by_id(other.id.parse().unwrap()).await?.unwrap();
    assert_eq!(stored.name, "Other");

    Ok(())
}

use super::*;

/// Tests inserting a project with nested tasks.
///
/// Verifies that the repository stores the document under the given id and
/// returns it with tasks and tags in submitted order.
///
/// Expected: Ok(ProjectParam) matching the input
#[tokio::test]
async fn creates_project_with_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let id = ObjectId::new();
    let project = repo.create(id, crm_fields()).await?;

    assert_eq!(project.id, id);
    assert_eq!(project.name, "CRM");
    assert_eq!(project.tasks, crm_fields().tasks);

    let stored = entity::prelude::Project::find_by_id(id.to_hex())
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.description, "Description Project");
    assert_eq!(stored.tasks[2]["tags"][0], "FRONTEND");

    Ok(())
}

/// Tests inserting a project without tasks.
///
/// Expected: Ok with an empty task list stored as an empty JSON array
#[tokio::test]
async fn creates_project_without_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let project = repo
        .create(
            ObjectId::new(),
            ProjectFields {
                name: "Empty".to_string(),
                description: String::new(),
                tasks: vec![],
            },
        )
        .await?;

    assert!(project.tasks.is_empty());

    Ok(())
}

/// Tests that tag duplicates and order survive storage.
///
/// Expected: tags read back exactly as submitted
#[tokio::test]
async fn preserves_duplicate_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let id = ObjectId::new();
    repo.create(
        id,
        ProjectFields {
            name: "Tags".to_string(),
            description: String::new(),
            tasks: vec![task("Mixed", &["Z", "A", "Z"])],
        },
    )
    .await?;

    let project = repo.get_by_id(id).await?.unwrap();
    assert_eq!(project.tasks[0].tags, vec!["Z", "A", "Z"]);

    Ok(())
}

/// Tests that a second insert under an existing id fails.
///
/// Expected: Err(DbErr) from the primary key constraint
#[tokio::test]
async fn fails_for_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_project_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProjectRepository::new(db);
    let id = ObjectId::new();
    repo.create(id, crm_fields()).await?;

    let result = repo.create(id, crm_fields()).await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Project::find().count(db).await?, 1);

    Ok(())
}

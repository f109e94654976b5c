use super::*;

/// Tests the create then read round trip.
///
/// Expected: 200 with the submitted project plus the assigned id
#[tokio::test]
async fn reads_created_project() -> Result<(), TestError> {
    let (app, _test) = test_app().await?;

    let id = create_crm(&app).await;

    let (status, body) = send(&app, Method::GET, &format!("/projects/{}", id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id.as_str());
    assert_eq!(without_id(body), fixture::crm_body());

    Ok(())
}

/// Tests reading a well formed id that is not stored.
///
/// Expected: 500 with `{"message":"not found"}`
#[tokio::test]
async fn reports_missing_project() -> Result<(), TestError> {
    let (app, _test) = test_app().await?;

    let uri = format!("/projects/{}", fixture::project::MISSING_ID);
    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "not found" }));

    Ok(())
}

/// Tests reading a malformed id.
///
/// Expected: 500 with a message naming the invalid id
#[tokio::test]
async fn reports_malformed_id() -> Result<(), TestError> {
    let (app, _test) = test_app().await?;

    let (status, body) = send(&app, Method::GET, "/projects/xyz", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("invalid object id 'xyz'"));

    Ok(())
}

/// Tests reading an id that does not decode to UTF-8.
///
/// Expected: 500 with a JSON invalid id message
#[tokio::test]
async fn reports_undecodable_id() -> Result<(), TestError> {
    let (app, _test) = test_app().await?;

    let (status, body) = send(&app, Method::GET, "/projects/%FF%FE", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("invalid object id"));

    Ok(())
}

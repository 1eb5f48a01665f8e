use axum::http::StatusCode;
use serde_json::json;

use crate::common::{TestClient, seed_course, seed_user, try_test_state, unique};

async fn seed_topic(client: &TestClient, author_id: i64, course_id: i64) -> i64 {
    let created = client
        .post_json(
            "/topics",
            &json!({
                "title": unique("title"),
                "message": unique("message"),
                "author_id": author_id,
                "course_id": course_id,
            }),
        )
        .await;
    created.assert_status(StatusCode::CREATED);
    created.json()["id"].as_i64().expect("topic id")
}

#[tokio::test]
async fn create_reply_returns_created_with_location() {
    let Some(state) = try_test_state().await else {
        return;
    };
    let author_id = seed_user(&state.pool).await;
    let (course_id, _) = seed_course(&state.pool, "BackEnd").await;
    let client = TestClient::new(fh_api::router::router().with_state(state));
    let topic_id = seed_topic(&client, author_id, course_id).await;

    let message = unique("reply");
    let response = client
        .post_json(
            "/replies",
            &json!({
                "message": message,
                "topic_id": topic_id,
                "author_id": author_id,
            }),
        )
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json();
    let id = body["id"].as_i64().expect("reply id");
    assert_eq!(
        response.header("location"),
        Some(format!("/replies/{id}").as_str())
    );
    assert_eq!(body["message"], message);
    assert_eq!(body["solution"], false);
}

#[tokio::test]
async fn create_reply_requires_existing_topic_and_author() {
    let Some(state) = try_test_state().await else {
        return;
    };
    let author_id = seed_user(&state.pool).await;
    let (course_id, _) = seed_course(&state.pool, "BackEnd").await;
    let client = TestClient::new(fh_api::router::router().with_state(state));
    let topic_id = seed_topic(&client, author_id, course_id).await;

    client
        .post_json(
            "/replies",
            &json!({
                "message": unique("reply"),
                "topic_id": i64::MAX,
                "author_id": author_id,
            }),
        )
        .await
        .assert_status(StatusCode::NOT_FOUND);

    client
        .post_json(
            "/replies",
            &json!({
                "message": unique("reply"),
                "topic_id": topic_id,
                "author_id": i64::MAX,
            }),
        )
        .await
        .assert_status(StatusCode::NOT_FOUND);

    client
        .post_json(
            "/replies",
            &json!({
                "message": "   ",
                "topic_id": topic_id,
                "author_id": author_id,
            }),
        )
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn reply_can_attach_to_soft_deleted_topic() {
    let Some(state) = try_test_state().await else {
        return;
    };
    let author_id = seed_user(&state.pool).await;
    let (course_id, _) = seed_course(&state.pool, "BackEnd").await;
    let client = TestClient::new(fh_api::router::router().with_state(state));
    let topic_id = seed_topic(&client, author_id, course_id).await;

    client
        .delete(&format!("/topics/{topic_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // The attachment check only requires the row to exist, active or not.
    client
        .post_json(
            "/replies",
            &json!({
                "message": unique("reply"),
                "topic_id": topic_id,
                "author_id": author_id,
            }),
        )
        .await
        .assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn update_reply_keeps_solution_flag_when_omitted() {
    let Some(state) = try_test_state().await else {
        return;
    };
    let author_id = seed_user(&state.pool).await;
    let (course_id, _) = seed_course(&state.pool, "BackEnd").await;
    let client = TestClient::new(fh_api::router::router().with_state(state));
    let topic_id = seed_topic(&client, author_id, course_id).await;

    let created = client
        .post_json(
            "/replies",
            &json!({
                "message": unique("reply"),
                "topic_id": topic_id,
                "author_id": author_id,
            }),
        )
        .await;
    created.assert_status(StatusCode::CREATED);
    let reply_id = created.json()["id"].as_i64().expect("reply id");

    // Mark as solution.
    let updated = client
        .put_json(
            &format!("/replies/{reply_id}"),
            &json!({ "message": unique("reply"), "solution": true }),
        )
        .await;
    updated.assert_status(StatusCode::OK);
    assert_eq!(updated.json()["solution"], true);

    // Omitting the flag leaves it untouched while the message changes.
    let message = unique("reply");
    let updated = client
        .put_json(
            &format!("/replies/{reply_id}"),
            &json!({ "message": message }),
        )
        .await;
    updated.assert_status(StatusCode::OK);
    let body = updated.json();
    assert_eq!(body["message"], message);
    assert_eq!(body["solution"], true);
}

#[tokio::test]
async fn solution_reply_does_not_change_topic_status() {
    let Some(state) = try_test_state().await else {
        return;
    };
    let author_id = seed_user(&state.pool).await;
    let (course_id, _) = seed_course(&state.pool, "BackEnd").await;
    let client = TestClient::new(fh_api::router::router().with_state(state));
    let topic_id = seed_topic(&client, author_id, course_id).await;

    let created = client
        .post_json(
            "/replies",
            &json!({
                "message": unique("reply"),
                "topic_id": topic_id,
                "author_id": author_id,
            }),
        )
        .await;
    created.assert_status(StatusCode::CREATED);
    let reply_id = created.json()["id"].as_i64().expect("reply id");

    client
        .put_json(
            &format!("/replies/{reply_id}"),
            &json!({ "message": unique("reply"), "solution": true }),
        )
        .await
        .assert_status(StatusCode::OK);

    // No automatic status transition happens on the owning topic.
    let topic = client.get(&format!("/topics/{topic_id}")).await;
    topic.assert_status(StatusCode::OK);
    assert_eq!(topic.json()["status"], "UNANSWERED");
}

#[tokio::test]
async fn delete_reply_removes_the_row() {
    let Some(state) = try_test_state().await else {
        return;
    };
    let author_id = seed_user(&state.pool).await;
    let (course_id, _) = seed_course(&state.pool, "BackEnd").await;
    let client = TestClient::new(fh_api::router::router().with_state(state));
    let topic_id = seed_topic(&client, author_id, course_id).await;

    let created = client
        .post_json(
            "/replies",
            &json!({
                "message": unique("reply"),
                "topic_id": topic_id,
                "author_id": author_id,
            }),
        )
        .await;
    created.assert_status(StatusCode::CREATED);
    let reply_id = created.json()["id"].as_i64().expect("reply id");

    client
        .delete(&format!("/replies/{reply_id}"))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    client
        .get(&format!("/replies/{reply_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    client
        .delete(&format!("/replies/{reply_id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

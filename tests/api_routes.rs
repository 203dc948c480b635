use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Method, Request, StatusCode, header},
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde_json::{Value, json};
use tower::ServiceExt;

use todo_anywhere::{
    db::entities::{prelude::TodoItem, todo_item},
    state::AppState,
    test_helpers::{test_router, test_state},
};

async fn app_state() -> Arc<AppState> {
    test_state().await.expect("build sqlite test state")
}

fn form_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_response(state: &Arc<AppState>, request: Request<Body>) -> (StatusCode, Value) {
    let response = test_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn create_list(state: &Arc<AppState>, name: &str) -> i64 {
    let (_, body) = json_response(
        state,
        form_request(Method::POST, "/api/list/", &format!("name={name}")),
    )
    .await;
    assert_eq!(body["success"], true, "list creation failed: {body}");
    body["content"]["list_created"].as_i64().unwrap()
}

async fn create_item(state: &Arc<AppState>, list_id: i64, description: &str) -> i64 {
    let (_, body) = json_response(
        state,
        form_request(
            Method::POST,
            &format!("/api/list/{list_id}/item/"),
            &format!("description={description}"),
        ),
    )
    .await;
    assert_eq!(body["success"], true, "item creation failed: {body}");
    body["content"]["item_id"].as_i64().unwrap()
}

#[tokio::test]
async fn list_lifecycle_through_the_envelope() {
    let state = app_state().await;

    let list_id = create_list(&state, "Groceries").await;
    let item_id = create_item(&state, list_id, "Milk").await;

    let (status, body) =
        json_response(&state, empty_request(Method::GET, &format!("/api/list/{list_id}/"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "content": {
                "name": "Groceries",
                "items": [{"id": item_id, "description": "Milk"}]
            }
        })
    );

    let (_, body) = json_response(
        &state,
        empty_request(Method::DELETE, &format!("/api/list/{list_id}/")),
    )
    .await;
    assert_eq!(
        body,
        json!({"success": true, "content": {"list_id_deleted": list_id}})
    );

    let (status, body) =
        json_response(&state, empty_request(Method::GET, &format!("/api/list/{list_id}/"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": false, "message": "Todo list not found"}));
}

#[tokio::test]
async fn list_index_returns_every_list() {
    let state = app_state().await;

    let (_, body) = json_response(&state, empty_request(Method::GET, "/api/list/")).await;
    assert_eq!(body, json!({"success": true, "content": {"todo_lists": []}}));

    let chores = create_list(&state, "Chores").await;
    let books = create_list(&state, "Books").await;

    let (_, body) = json_response(&state, empty_request(Method::GET, "/api/list/")).await;
    let mut lists = body["content"]["todo_lists"].as_array().unwrap().clone();
    lists.sort_by_key(|list| list["id"].as_i64());
    assert_eq!(
        lists,
        vec![
            json!({"id": chores, "name": "Chores"}),
            json!({"id": books, "name": "Books"}),
        ]
    );
}

#[tokio::test]
async fn missing_or_empty_fields_are_invalid_params() {
    let state = app_state().await;

    for body in ["", "name=", "other=value"] {
        let (status, json) =
            json_response(&state, form_request(Method::POST, "/api/list/", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({"success": false, "message": "Invalid params"}));
    }

    let (_, json) = json_response(&state, empty_request(Method::GET, "/api/list/")).await;
    assert_eq!(json["content"]["todo_lists"], json!([]));

    let list_id = create_list(&state, "Groceries").await;
    let (_, json) = json_response(
        &state,
        form_request(Method::POST, &format!("/api/list/{list_id}/item/"), "description="),
    )
    .await;
    assert_eq!(json["message"], "Invalid params");

    let (_, json) = json_response(
        &state,
        form_request(Method::PUT, &format!("/api/list/{list_id}/"), ""),
    )
    .await;
    assert_eq!(json["message"], "Invalid params");
}

#[tokio::test]
async fn overlong_values_are_invalid_params() {
    let state = app_state().await;
    let name = "a".repeat(251);

    let (_, json) = json_response(
        &state,
        form_request(Method::POST, "/api/list/", &format!("name={name}")),
    )
    .await;
    assert_eq!(json["message"], "Invalid params");
}

#[tokio::test]
async fn editing_updates_names_and_descriptions() {
    let state = app_state().await;
    let list_id = create_list(&state, "Groceries").await;
    let item_id = create_item(&state, list_id, "Milk").await;

    let (_, body) = json_response(
        &state,
        form_request(Method::PUT, &format!("/api/list/{list_id}/"), "name=Market"),
    )
    .await;
    assert_eq!(body, json!({"success": true}));

    let (_, body) = json_response(
        &state,
        form_request(
            Method::PUT,
            &format!("/api/list/{list_id}/item/{item_id}/"),
            "description=Oat+milk",
        ),
    )
    .await;
    assert_eq!(body, json!({"success": true, "content": {"item_id": item_id}}));

    let (_, body) = json_response(
        &state,
        empty_request(Method::GET, &format!("/api/list/{list_id}/item/{item_id}/")),
    )
    .await;
    assert_eq!(
        body,
        json!({"success": true, "content": {"id": item_id, "description": "Oat milk"}})
    );

    let (_, body) =
        json_response(&state, empty_request(Method::GET, &format!("/api/list/{list_id}/"))).await;
    assert_eq!(body["content"]["name"], "Market");
}

#[tokio::test]
async fn item_routes_report_the_list_before_the_item() {
    let state = app_state().await;

    let (_, body) = json_response(&state, empty_request(Method::GET, "/api/list/77/item/1/")).await;
    assert_eq!(body["message"], "Todo list not found");

    let (_, body) = json_response(
        &state,
        form_request(Method::POST, "/api/list/77/item/", "description=Milk"),
    )
    .await;
    assert_eq!(body["message"], "Todo list not found");

    let list_id = create_list(&state, "Groceries").await;
    for method in [Method::GET, Method::DELETE] {
        let (_, body) = json_response(
            &state,
            empty_request(method, &format!("/api/list/{list_id}/item/999/")),
        )
        .await;
        assert_eq!(body, json!({"success": false, "message": "Todo item not found"}));
    }
    let (_, body) = json_response(
        &state,
        form_request(
            Method::PUT,
            &format!("/api/list/{list_id}/item/999/"),
            "description=Eggs",
        ),
    )
    .await;
    assert_eq!(body["message"], "Todo item not found");
}

#[tokio::test]
async fn items_are_scoped_to_their_list() {
    let state = app_state().await;
    let groceries = create_list(&state, "Groceries").await;
    let chores = create_list(&state, "Chores").await;
    let milk = create_item(&state, groceries, "Milk").await;

    let (_, body) = json_response(
        &state,
        empty_request(Method::GET, &format!("/api/list/{chores}/item/{milk}/")),
    )
    .await;
    assert_eq!(body["message"], "Todo item not found");

    let (_, body) = json_response(
        &state,
        empty_request(Method::DELETE, &format!("/api/list/{groceries}/item/{milk}/")),
    )
    .await;
    assert_eq!(body, json!({"success": true, "content": {"item_id": milk}}));

    let (_, body) = json_response(
        &state,
        empty_request(Method::GET, &format!("/api/list/{groceries}/")),
    )
    .await;
    assert_eq!(body["content"]["items"], json!([]));
}

#[tokio::test]
async fn deleting_a_list_removes_its_items() {
    let state = app_state().await;
    let list_id = create_list(&state, "Groceries").await;
    let milk = create_item(&state, list_id, "Milk").await;
    let eggs = create_item(&state, list_id, "Eggs").await;
    let kept_list = create_list(&state, "Chores").await;
    let kept_item = create_item(&state, kept_list, "Laundry").await;

    let (_, body) = json_response(
        &state,
        empty_request(Method::DELETE, &format!("/api/list/{list_id}/")),
    )
    .await;
    assert_eq!(body["success"], true);

    let orphans = TodoItem::find()
        .filter(todo_item::Column::ListId.eq(list_id as i32))
        .all(&state.db)
        .await
        .unwrap();
    assert!(orphans.is_empty(), "items left behind: {orphans:?}");
    for item_id in [milk, eggs] {
        let row = TodoItem::find_by_id(item_id as i32)
            .one(&state.db)
            .await
            .unwrap();
        assert!(row.is_none(), "item {item_id} survived");
    }

    let remaining = TodoItem::find().all(&state.db).await.unwrap();
    assert_eq!(
        remaining.iter().map(|item| i64::from(item.id)).collect::<Vec<_>>(),
        vec![kept_item]
    );

    let (_, body) = json_response(
        &state,
        empty_request(Method::DELETE, &format!("/api/list/{list_id}/")),
    )
    .await;
    assert_eq!(body, json!({"success": false, "message": "Todo list not found"}));
}

#[tokio::test]
async fn malformed_path_ids_get_a_failure_envelope() {
    let state = app_state().await;

    let (status, body) =
        json_response(&state, empty_request(Method::GET, "/api/list/abc/")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().is_some_and(|message| !message.is_empty()));
}

#[tokio::test]
async fn unknown_api_routes_get_a_failure_envelope() {
    let state = app_state().await;

    for uri in ["/api/nope/", "/api/list", "/api/list/1/item"] {
        let (status, body) = json_response(&state, empty_request(Method::GET, uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"success": false, "message": "Not Found"}), "{uri}");
    }
}

#[tokio::test]
async fn unsupported_methods_get_a_failure_envelope() {
    let state = app_state().await;

    let (status, body) = json_response(&state, empty_request(Method::PATCH, "/api/list/")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
}

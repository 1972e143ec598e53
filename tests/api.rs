mod common;

use axum::http::{Method, StatusCode};
use common::{memory_app, send};
use product_crud::Product;
use serde_json::json;

#[tokio::test]
async fn home_is_plain_greeting() {
    let app = memory_app::<Product>();
    let reply = send(&app, Method::GET, "/", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.text(), "Welcome to the homepage");

    let reply = send(&app, Method::POST, "/", None).await;
    assert_eq!(reply.status, StatusCode::OK);
}

#[tokio::test]
async fn create_assigns_id_and_echoes_fields() {
    let app = memory_app::<Product>();
    let reply = send(
        &app,
        Method::POST,
        "/api/products",
        Some(r#"{"name":"Widget","price":"9.99","amount":3}"#),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    let body = reply.json();
    assert_eq!(body["code"], 200);
    assert_eq!(body["message"], "Product created successfully");
    assert!(body["data"]["id"].as_i64().unwrap() > 0);
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["price"], "9.99");
    assert_eq!(body["data"]["amount"], 3);
    assert_eq!(body["data"]["description"], "");
}

#[tokio::test]
async fn prices_are_stored_with_two_digits() {
    let app = memory_app::<Product>();
    let body = send(&app, Method::POST, "/api/products", Some(r#"{"price":"9.999"}"#)).await.json();
    assert_eq!(body["data"]["price"], "10.00");

    let body = send(&app, Method::POST, "/api/products", Some(r#"{"price":3}"#)).await.json();
    assert_eq!(body["data"]["price"], "3.00");
    let id = body["data"]["id"].as_i64().unwrap();

    let body = send(&app, Method::PUT, &format!("/api/products/{}", id), Some(r#"{"price":"1.005"}"#))
        .await
        .json();
    assert_eq!(body["data"]["price"], "1.01");
}

#[tokio::test]
async fn create_then_show_round_trips() {
    let app = memory_app::<Product>();
    let created = send(
        &app,
        Method::POST,
        "/api/products",
        Some(r#"{"name":"Lamp","description":"desk","price":"24.50","amount":7}"#),
    )
    .await
    .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let shown = send(&app, Method::GET, &format!("/api/products/{}", id), None).await;
    assert_eq!(shown.status, StatusCode::OK);
    let body = shown.json();
    assert_eq!(body["message"], "Product showed successfully");
    assert_eq!(body["data"], created["data"]);
}

#[tokio::test]
async fn list_contains_every_created_product() {
    let app = memory_app::<Product>();
    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let body = send(&app, Method::POST, "/api/products", Some(&json!({ "name": name }).to_string()))
            .await
            .json();
        ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let reply = send(&app, Method::GET, "/api/products", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["message"], "Products indexed successfully");
    let listed: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert!(listed.len() >= 3);
    for id in ids {
        assert!(listed.contains(&id));
    }
}

#[tokio::test]
async fn empty_list_is_an_empty_array() {
    let app = memory_app::<Product>();
    let body = send(&app, Method::GET, "/api/products", None).await.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn update_overwrites_only_supplied_fields() {
    let app = memory_app::<Product>();
    let created = send(
        &app,
        Method::POST,
        "/api/products",
        Some(r#"{"name":"Widget","description":"blue","price":"9.99","amount":3}"#),
    )
    .await
    .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let reply = send(
        &app,
        Method::PUT,
        &format!("/api/products/{}", id),
        Some(r#"{"price":"12.00","amount":5}"#),
    )
    .await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(
        body["data"],
        json!({"id": id, "name": "Widget", "description": "blue", "price": "12.00", "amount": 5})
    );

    let shown = send(&app, Method::GET, &format!("/api/products/{}", id), None).await.json();
    assert_eq!(shown["data"], body["data"]);
}

#[tokio::test]
async fn update_cannot_change_id() {
    let app = memory_app::<Product>();
    let created = send(&app, Method::POST, "/api/products", Some(r#"{"name":"Widget"}"#)).await.json();
    let id = created["data"]["id"].as_i64().unwrap();
    let body = send(&app, Method::PUT, &format!("/api/products/{}", id), Some(r#"{"id":999}"#))
        .await
        .json();
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Widget");
}

#[tokio::test]
async fn update_of_missing_product_returns_zero_based_merge() {
    let app = memory_app::<Product>();
    let reply = send(&app, Method::PUT, "/api/products/41", Some(r#"{"name":"Ghost"}"#)).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["data"]["id"], 0);
    assert_eq!(body["data"]["name"], "Ghost");

    let listed = send(&app, Method::GET, "/api/products", None).await.json();
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn delete_then_show_yields_zero_value() {
    let app = memory_app::<Product>();
    let created = send(&app, Method::POST, "/api/products", Some(r#"{"name":"Widget","amount":2}"#))
        .await
        .json();
    let id = created["data"]["id"].as_i64().unwrap();

    let reply = send(&app, Method::DELETE, &format!("/api/products/{}", id), None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(
        reply.json(),
        json!({"code": 200, "data": null, "message": "Product deleted successfully"})
    );

    let shown = send(&app, Method::GET, &format!("/api/products/{}", id), None).await;
    assert_eq!(shown.status, StatusCode::OK);
    assert_eq!(
        shown.json()["data"],
        json!({"id": 0, "name": "", "description": "", "price": "0", "amount": 0})
    );
}

#[tokio::test]
async fn delete_of_missing_product_still_succeeds() {
    let app = memory_app::<Product>();
    let reply = send(&app, Method::DELETE, "/api/products/12345", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["message"], "Product deleted successfully");
}

#[tokio::test]
async fn malformed_create_body_persists_zero_value() {
    let app = memory_app::<Product>();
    let reply = send(&app, Method::POST, "/api/products", Some("{\"name\": ")).await;
    assert_eq!(reply.status, StatusCode::OK);
    let body = reply.json();
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "");
}

#[tokio::test]
async fn undefined_path_is_structured_404() {
    let app = memory_app::<Product>();
    let reply = send(&app, Method::GET, "/api/orders", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    assert_eq!(reply.text(), r#"{"code":404,"data":null,"message":"Method not found"}"#);
}

#[tokio::test]
async fn unregistered_method_is_405_with_code_403() {
    let app = memory_app::<Product>();
    let reply = send(&app, Method::PATCH, "/api/products", None).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(reply.text(), r#"{"code":403,"data":null,"message":"Method not allowed"}"#);

    let reply = send(&app, Method::POST, "/api/products/1", None).await;
    assert_eq!(reply.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn trailing_slash_routes_the_same() {
    let app = memory_app::<Product>();
    send(&app, Method::POST, "/api/products/", Some(r#"{"name":"Widget"}"#)).await;
    let reply = send(&app, Method::GET, "/api/products/", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["data"].as_array().unwrap().len(), 1);

    let reply = send(&app, Method::GET, "/api/products/1/", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.json()["data"]["name"], "Widget");
}

#[tokio::test]
async fn non_numeric_id_is_not_routed() {
    let app = memory_app::<Product>();
    for uri in ["/api/products/abc", "/api/products/-3", "/api/products/1.5"] {
        let reply = send(&app, Method::GET, uri, None).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(reply.json()["message"], "Method not found");
    }
}

#[tokio::test]
async fn non_numeric_id_wins_over_method_check() {
    let app = memory_app::<Product>();
    for method in [Method::PATCH, Method::POST] {
        let reply = send(&app, method.clone(), "/api/products/abc", Some("{}")).await;
        assert_eq!(reply.status, StatusCode::NOT_FOUND, "{}", method);
        assert_eq!(reply.text(), r#"{"code":404,"data":null,"message":"Method not found"}"#);
    }

    let reply = send(&app, Method::GET, "/api/products/%FF", None).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
    assert_eq!(reply.json()["code"], 404);
}

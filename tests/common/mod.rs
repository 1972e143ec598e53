#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use product_crud::{app, AppState, Entity, MemoryGateway};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

pub type App = NormalizePath<Router>;

pub fn memory_app<E: Entity>() -> App {
    app(AppState::<E>::new(Arc::new(MemoryGateway::<E>::new())), 1024 * 1024)
}

pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is UTF-8")
    }
}

pub async fn send(app: &App, method: Method, uri: &str, body: Option<&str>) -> Reply {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap().to_vec();
    Reply {
        status,
        content_type,
        body,
    }
}

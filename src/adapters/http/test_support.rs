//! Helpers for driving routers through `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use crate::adapters::auth::MockAccessTokenValidator;
use crate::adapters::http::middleware::{auth_middleware, AuthState};
use crate::domain::foundation::{AuthenticatedUser, TenantId};

pub(crate) const TOKEN: &str = "tenant-a-token";

/// Mounts `routes` under `prefix` behind the auth middleware, with one
/// caller whose bearer token is [`TOKEN`].
pub(crate) fn authed(prefix: &str, routes: Router) -> (Router, AuthenticatedUser) {
    let (validator, user) =
        MockAccessTokenValidator::new().with_tenant_user(TOKEN, TenantId::new());
    let state: AuthState = Arc::new(validator);
    let app = Router::new()
        .nest(prefix, routes)
        .layer(axum::middleware::from_fn_with_state(state, auth_middleware));
    (app, user)
}

/// Sends an authenticated request and returns the status and JSON body
/// (`Value::Null` when the body is empty).
pub(crate) async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

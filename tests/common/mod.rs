//! Shared harness: the full router over in-memory repositories, with real
//! HS256 tokens for any number of tenants.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use lifedesk::adapters::auth::JwtAccessTokenValidator;
use lifedesk::adapters::events::InMemoryEventBus;
use lifedesk::adapters::http::{build_router, AppPorts};
use lifedesk::config::ServerConfig;
use lifedesk::domain::foundation::{AuthenticatedUser, TenantId, UserId};

const SECRET: &[u8] = b"integration-test-signing-key-0123456789";
const ISSUER: &str = "lifedesk";
const AUDIENCE: &str = "lifedesk-api";

pub struct TestApp {
    pub router: Router,
    pub bus: Arc<InMemoryEventBus>,
    validator: JwtAccessTokenValidator,
}

/// A caller with a signed bearer token.
pub struct Caller {
    pub user: AuthenticatedUser,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_bus(InMemoryEventBus::new())
    }

    pub fn with_bus(bus: InMemoryEventBus) -> Self {
        let bus = Arc::new(bus);
        let ports = AppPorts::in_memory(
            bus.clone(),
            Arc::new(JwtAccessTokenValidator::new(SECRET, ISSUER, AUDIENCE)),
        );
        Self {
            router: build_router(&ports, &ServerConfig::default()),
            bus,
            validator: JwtAccessTokenValidator::new(SECRET, ISSUER, AUDIENCE),
        }
    }

    /// A new user in a new tenant.
    pub fn caller(&self) -> Caller {
        self.caller_in(TenantId::new())
    }

    pub fn caller_in(&self, tenant_id: TenantId) -> Caller {
        let user_id = UserId::new();
        let user = AuthenticatedUser::new(
            user_id,
            tenant_id,
            format!("{}@example.com", user_id),
            Some("Test User".to_string()),
        );
        let token = self.validator.issue(&user, 3600).unwrap();
        Caller { user, token }
    }

    pub async fn send(
        &self,
        caller: &Caller,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", caller.token));
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
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

    pub async fn post(&self, caller: &Caller, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(caller, Method::POST, uri, Some(body)).await
    }

    pub async fn get(&self, caller: &Caller, uri: &str) -> (StatusCode, Value) {
        self.send(caller, Method::GET, uri, None).await
    }

    /// Creates a record and returns its body, asserting 201.
    pub async fn create(&self, caller: &Caller, collection: &str, body: Value) -> Value {
        let (status, created) = self.post(caller, collection, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {}: {}", collection, created);
        created
    }
}

pub fn id_of(record: &Value) -> &str {
    record["id"].as_str().unwrap()
}

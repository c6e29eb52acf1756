//! Request extractors that answer malformed input with the standard 400 body.

use std::str::FromStr;

use async_trait::async_trait;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body extractor. Unlike `axum::Json`, every rejection (bad syntax,
/// wrong shape, missing content type) becomes a 400 `ErrorResponse`.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::bad_request(format!("Invalid request body: {}", rejection.body_text()))
}

/// Query-string extractor with the same 400 body as `ApiJson`.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

fn query_rejection(rejection: QueryRejection) -> ApiError {
    ApiError::bad_request(format!("Invalid query string: {}", rejection.body_text()))
}

/// Parses a path segment into a typed id, or a 400 naming the resource.
pub fn parse_id<T: FromStr>(raw: &str, resource: &str) -> Result<T, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid {} ID", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    use crate::domain::foundation::BillId;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_body_is_extracted() {
        let ApiJson(payload) = ApiJson::<Payload>::from_request(json_request(r#"{"name":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(payload.name, "x");
    }

    #[tokio::test]
    async fn syntax_error_is_400() {
        let err = ApiJson::<Payload>::from_request(json_request("{not json"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn wrong_shape_is_400_not_422() {
        let err = ApiJson::<Payload>::from_request(json_request(r#"{"name":5}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[derive(Debug, Deserialize)]
    struct Filter {
        completed: Option<bool>,
        from: Option<chrono::NaiveDate>,
    }

    async fn query(uri: &str) -> Result<ApiQuery<Filter>, ApiError> {
        let (mut parts, _) = axum::http::Request::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        ApiQuery::<Filter>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn query_filters_are_extracted() {
        let ApiQuery(filter) = query("/?completed=true&from=2025-01-15").await.unwrap();
        assert_eq!(filter.completed, Some(true));
        assert_eq!(filter.from, chrono::NaiveDate::from_ymd_opt(2025, 1, 15));
    }

    #[tokio::test]
    async fn bad_query_filter_is_400_error_response() {
        for uri in ["/?completed=maybe", "/?from=notadate"] {
            let err = query(uri).await.unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST, "{}", uri);
            assert!(err.body().message.starts_with("Invalid query string"), "{}", uri);
        }
    }

    #[test]
    fn parse_id_accepts_uuid() {
        let id = BillId::new();
        let parsed: BillId = parse_id(&id.to_string(), "bill").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id::<BillId>("not-a-uuid", "bill").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body().message, "Invalid bill ID");
    }
}

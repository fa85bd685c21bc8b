//! JSON extractor that reports every body rejection in the contact response shape

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like [`axum::Json`], but a malformed, oversized or wrongly typed body is
/// turned into `400 {"ok":false,"error":"Invalid request"}`.
pub struct ContactJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ContactJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ContactJson(value)),
            Err(rejection) => Err(AppError::InvalidRequest(describe_rejection(&rejection))),
        }
    }
}

fn describe_rejection(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("unexpected field value: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("malformed JSON: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => "missing application/json content type".to_string(),
        JsonRejection::BytesRejection(err) => format!("unreadable body: {}", err.body_text()),
        other => other.body_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        name: Option<String>,
    }

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = HttpRequest::builder().method("POST").uri("/api/contact");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracts() {
        let ContactJson(probe) = ContactJson::<Probe>::from_request(
            request(Some("application/json"), r#"{"name":"Jane"}"#),
            &(),
        )
        .await
        .unwrap();
        assert_eq!(probe.name.as_deref(), Some("Jane"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_request() {
        let result = ContactJson::<Probe>::from_request(
            request(Some("application/json"), r#"{"name":"#),
            &(),
        )
        .await;
        assert!(matches!(result, Err(AppError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_invalid_request() {
        let result = ContactJson::<Probe>::from_request(request(None, r#"{"name":"Jane"}"#), &()).await;
        match result {
            Err(AppError::InvalidRequest(detail)) => assert!(detail.contains("content type")),
            _ => panic!("expected invalid request"),
        }
    }
}

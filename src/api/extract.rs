//! Request body extractor accepting JSON and urlencoded forms.

use axum::Form;
use axum::extract::{FromRequest, Json, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::GatewayError;

/// Deserializes the request body as JSON or as an
/// `application/x-www-form-urlencoded` form, selected by the
/// `Content-Type` header. Rejections are rendered through the
/// standard [`GatewayError`] envelope.
#[derive(Debug, Clone, Copy)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
            return Ok(Self(value));
        }

        Err(GatewayError::InvalidRequest(format!(
            "unsupported content type: {content_type:?}"
        )))
    }
}

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    Json,
};
use serde_json::{json, Value};

use crate::{models::auth::TeacherCredential, services::auth::AuthService};

/// Extension type to carry the JWT secret through request extensions.
#[derive(Clone)]
pub struct JwtSecret(pub String);

/// A request without an `Authorization` header yields an empty credential and
/// is rejected later by the service. A header that is present but unusable is
/// rejected here.
impl<S> FromRequestParts<S> for TeacherCredential
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get("Authorization") else {
            return Ok(TeacherCredential(None));
        };

        let token = auth_header
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or_else(|| unauthorized("Invalid Authorization header format"))?;

        let secret = parts.extensions.get::<JwtSecret>().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "JWT secret not configured" })),
        ))?;

        let username = AuthService::decode_access_token(token, &secret.0)
            .map_err(|_| unauthorized("Invalid teacher credentials"))?;

        Ok(TeacherCredential(Some(username)))
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": message })))
}

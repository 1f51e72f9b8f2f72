//! HTTP plumbing for frontend-backend communication.
//!
//! `ApiClient` is the single chokepoint: it attaches the bearer token from the
//! injected [`Session`], decodes failure bodies into the [`ApiError`] union,
//! and invalidates the session on a 401.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::context::Session;

/// Get the base URL for API requests.
///
/// Constructs the backend origin from the current window location, using
/// port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// One backend-reported field violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Field name when the backend supplied one.
    pub property: Option<String>,
    pub message: String,
}

/// Everything a backend call can fail with, decoded at the client boundary.
/// Raw response bodies never reach the UI layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Sessão expirada")]
    Unauthorized,
    #[error("{0}")]
    Conflict(String),
    #[error("Validação rejeitada pelo servidor")]
    Validation(Vec<FieldViolation>),
    #[error("{0}")]
    Message(String),
    #[error("Falha de rede: {0}")]
    Network(String),
    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),
}

/// Decodes a non-2xx response body defensively.
///
/// The original backend answers in several shapes: a class-validator array of
/// `{property, constraints}` objects, a NestJS `{message: [..]}` array, or a
/// plain `{message: ".."}`. Anything else degrades to a generic message.
pub fn decode_error(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }

    let fallback = || {
        if status == 409 {
            ApiError::Conflict("Conflito ao salvar os dados".to_string())
        } else {
            ApiError::Message(format!("Falha na requisição ({status})"))
        }
    };

    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return fallback(),
    };

    if let Some(entries) = value.as_array() {
        let violations = constraint_violations(entries);
        if !violations.is_empty() {
            return ApiError::Validation(violations);
        }
        return fallback();
    }

    match value.get("message") {
        Some(serde_json::Value::String(message)) => {
            if status == 409 {
                ApiError::Conflict(message.clone())
            } else {
                ApiError::Message(message.clone())
            }
        }
        Some(serde_json::Value::Array(messages)) => {
            let violations: Vec<FieldViolation> = messages
                .iter()
                .filter_map(|m| m.as_str())
                .map(|m| FieldViolation {
                    property: None,
                    message: m.to_string(),
                })
                .collect();
            if violations.is_empty() {
                fallback()
            } else {
                ApiError::Validation(violations)
            }
        }
        _ => fallback(),
    }
}

fn constraint_violations(entries: &[serde_json::Value]) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    for entry in entries {
        match entry {
            serde_json::Value::String(message) => violations.push(FieldViolation {
                property: None,
                message: message.clone(),
            }),
            serde_json::Value::Object(fields) => {
                let property = fields.get("property").and_then(|p| p.as_str());
                let constraints = fields.get("constraints").and_then(|c| c.as_object());
                match constraints {
                    Some(constraints) => {
                        for message in constraints.values().filter_map(|m| m.as_str()) {
                            violations.push(FieldViolation {
                                property: property.map(str::to_string),
                                message: message.to_string(),
                            });
                        }
                    }
                    None => {
                        if let Some(property) = property {
                            violations.push(FieldViolation {
                                property: Some(property.to_string()),
                                message: "valor inválido".to_string(),
                            });
                        }
                    }
                }
            }
            _ => {}
        }
    }
    violations
}

/// Authenticated HTTP client. `Copy` so async call sites can move it freely.
#[derive(Clone, Copy)]
pub struct ApiClient {
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.parse(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::post(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.parse(response).await
    }

    /// POST without a body (the calculate-total trigger).
    pub async fn post_empty<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.parse(response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorize(Request::patch(&api_url(path)))
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.parse(response).await
    }

    pub async fn delete(self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&api_url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.check(response).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(self, response: Response) -> Result<T, ApiError> {
        let response = self.check(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn check(self, response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let error = decode_error(status, &body);
        if matches!(error, ApiError::Unauthorized) {
            self.session.invalidate();
        }
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_wins_over_any_body() {
        assert_eq!(decode_error(401, "whatever"), ApiError::Unauthorized);
        assert_eq!(
            decode_error(401, r#"{"message": "Unauthorized"}"#),
            ApiError::Unauthorized
        );
    }

    #[test]
    fn single_message_object() {
        assert_eq!(
            decode_error(400, r#"{"message": "Pedido inválido"}"#),
            ApiError::Message("Pedido inválido".to_string())
        );
    }

    #[test]
    fn conflict_uses_backend_message_when_present() {
        assert_eq!(
            decode_error(409, r#"{"message": "email already registered"}"#),
            ApiError::Conflict("email already registered".to_string())
        );
        assert_eq!(
            decode_error(409, "not json"),
            ApiError::Conflict("Conflito ao salvar os dados".to_string())
        );
    }

    #[test]
    fn class_validator_array_becomes_field_violations() {
        let body = r#"[
            {"property": "clientName", "constraints": {"minLength": "clientName must be longer"}},
            {"property": "items", "constraints": {"arrayMinSize": "items must contain at least 1 elements"}}
        ]"#;
        match decode_error(400, body) {
            ApiError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations[0].property.as_deref(), Some("clientName"));
                assert_eq!(violations[0].message, "clientName must be longer");
                assert_eq!(violations[1].property.as_deref(), Some("items"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn nest_message_array_becomes_violations_without_property() {
        let body = r#"{"statusCode": 400, "message": ["number should not be empty", "clientDocument must be longer"], "error": "Bad Request"}"#;
        match decode_error(400, body) {
            ApiError::Validation(violations) => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations[0].property, None);
                assert_eq!(violations[0].message, "number should not be empty");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn garbage_degrades_to_generic_message() {
        assert_eq!(
            decode_error(500, "<html>oops</html>"),
            ApiError::Message("Falha na requisição (500)".to_string())
        );
        assert_eq!(
            decode_error(400, "[]"),
            ApiError::Message("Falha na requisição (400)".to_string())
        );
    }
}

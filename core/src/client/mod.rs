//! Stateless HTTP request builder and response parser for the gestiondestock
//! API.
//!
//! # Design
//! `GestockClient` holds only the parsed base URL and carries no mutable state
//! between calls. Every endpoint has a `build_*` method producing an
//! `HttpRequest`; responses go through one of a handful of shape-generic
//! `parse_*` methods. The caller (or a `Transport`) executes the actual HTTP
//! round-trip, keeping this layer deterministic and free of I/O.
//!
//! Builders are grouped by resource in the submodules. Path parameters are
//! pushed as individual URL segments, so a code such as `A/B` is sent as
//! `A%2FB` instead of being split into two segments. Dot-only values are
//! escaped as well (`..` becomes `%2E%2E`), otherwise URL normalization
//! would drop them and change the route.

mod catalog;
mod orders;
mod parties;
mod stock;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::{Position, Url};

use crate::error::ApiError;
use crate::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};

/// Bytes escaped inside a single path segment. A superset of what URL
/// parsing escapes on its own, so a built URL survives re-parsing unchanged.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Synchronous, stateless client for the gestiondestock API.
#[derive(Debug, Clone)]
pub struct GestockClient {
    base_url: Url,
}

impl GestockClient {
    /// Parse `base_url` (e.g. `http://localhost:8080/gestiondestock/v1`).
    /// A trailing slash is ignored.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let url = Url::parse(base_url)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(format!(
                "{base_url}: cannot carry path segments"
            )));
        }
        Ok(Self { base_url: url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Absolute URL for the given route segments, each percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url[..Position::AfterPath].trim_end_matches('/').to_string();
        for segment in segments {
            url.push('/');
            url.push_str(&encode_segment(segment));
        }
        url
    }

    fn get(&self, segments: &[&str]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint(segments),
            headers: Vec::new(),
            body: None,
        }
    }

    fn delete(&self, segments: &[&str]) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: self.endpoint(segments),
            headers: Vec::new(),
            body: None,
        }
    }

    fn post_json<B: Serialize>(&self, segments: &[&str], input: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(json_request(HttpMethod::Post, self.endpoint(segments), body))
    }

    /// Targeted updates carry every argument in the path and an empty JSON
    /// object as body.
    fn patch(&self, segments: &[&str]) -> HttpRequest {
        json_request(HttpMethod::Patch, self.endpoint(segments), "{}".to_string())
    }

    /// Parse a single JSON entity from a 2xx response.
    pub fn parse_entity<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Parse a JSON array from a 2xx response. The order is the server's.
    pub fn parse_list<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Vec<T>, ApiError> {
        self.parse_entity(response)
    }

    /// Accept any 2xx response and discard its body.
    pub fn parse_empty(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }

    /// Parse the bare number returned by the stock-level route.
    pub fn parse_stock_level(&self, response: HttpResponse) -> Result<Decimal, ApiError> {
        self.parse_entity(response)
    }

    /// Parse an untyped JSON answer. An empty 2xx body yields `Value::Null`.
    pub fn parse_value(&self, response: HttpResponse) -> Result<Value, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

fn encode_segment(segment: &str) -> String {
    match segment {
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => utf8_percent_encode(segment, PATH_SEGMENT).to_string(),
    }
}

fn json_request(method: HttpMethod, url: String, body: String) -> HttpRequest {
    HttpRequest {
        method,
        url,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(HttpBody::Json(body)),
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound {
            body: response.body.clone(),
        });
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn client() -> GestockClient {
        GestockClient::new("http://localhost:8080/gestiondestock/v1").unwrap()
    }

    pub(crate) fn json_body(req: &HttpRequest) -> Value {
        let text = req.body.as_ref().and_then(HttpBody::as_json).unwrap();
        serde_json::from_str(text).unwrap()
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = GestockClient::new("http://localhost:8080/gestiondestock/v1/").unwrap();
        assert_eq!(
            client.endpoint(&["articles", "all"]),
            "http://localhost:8080/gestiondestock/v1/articles/all"
        );
    }

    #[test]
    fn bare_host_base_url() {
        let client = GestockClient::new("http://localhost:3000").unwrap();
        assert_eq!(client.endpoint(&["ventes", "all"]), "http://localhost:3000/ventes/all");
    }

    #[test]
    fn segments_are_percent_encoded() {
        assert_eq!(
            client().endpoint(&["articles", "filter", "A/B 1"]),
            "http://localhost:8080/gestiondestock/v1/articles/filter/A%2FB%201"
        );
    }

    #[test]
    fn dot_segments_are_kept() {
        assert_eq!(
            client().build_find_article_by_code("..").url,
            "http://localhost:8080/gestiondestock/v1/articles/filter/%2E%2E"
        );
        assert_eq!(
            client().endpoint(&["categories", "filter", "."]),
            "http://localhost:8080/gestiondestock/v1/categories/filter/%2E"
        );
        assert_eq!(
            client().endpoint(&["articles", "filter", "..."]),
            "http://localhost:8080/gestiondestock/v1/articles/filter/..."
        );
    }

    #[test]
    fn reserved_characters_stay_inside_their_segment() {
        assert_eq!(
            client().endpoint(&["utilisateurs", "find", "a?b#c%d\\e"]),
            "http://localhost:8080/gestiondestock/v1/utilisateurs/find/a%3Fb%23c%25d%5Ce"
        );
    }

    #[test]
    fn invalid_base_urls_are_rejected() {
        assert!(matches!(
            GestockClient::new("not a url"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            GestockClient::new("mailto:stock@example.com"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn patch_requests_carry_an_empty_object() {
        let req = client().patch(&["commandesclients", "update", "etat", "1", "LIVREE"]);
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(json_body(&req), serde_json::json!({}));
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn parse_entity_accepts_any_2xx() {
        let value: Value = client().parse_entity(response(201, r#"{"id":1}"#)).unwrap();
        assert_eq!(value["id"], 1);
    }

    #[test]
    fn parse_entity_not_found() {
        let err = client().parse_entity::<Value>(response(404, "missing")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound { ref body } if body == "missing"));
    }

    #[test]
    fn parse_entity_wrong_status() {
        let err = client().parse_entity::<Value>(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_bad_json() {
        let err = client().parse_list::<Value>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_keeps_server_order() {
        let ids: Vec<i64> = client().parse_list(response(200, "[3,1,2]")).unwrap();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn parse_empty_ignores_body() {
        assert!(client().parse_empty(response(200, "")).is_ok());
        assert!(client().parse_empty(response(204, "whatever")).is_ok());
        assert!(matches!(
            client().parse_empty(response(404, "")),
            Err(ApiError::NotFound { .. })
        ));
    }

    #[test]
    fn parse_stock_level_reads_bare_number() {
        let level = client().parse_stock_level(response(200, "42.5")).unwrap();
        assert_eq!(level.to_string(), "42.5");
    }

    #[test]
    fn parse_value_handles_empty_body() {
        assert_eq!(client().parse_value(response(200, "")).unwrap(), Value::Null);
        let value = client().parse_value(response(200, r#"{"ok":true}"#)).unwrap();
        assert_eq!(value["ok"], true);
    }
}

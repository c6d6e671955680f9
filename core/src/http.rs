//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `GestockClient` builds
//! `HttpRequest` values and parses `HttpResponse` values; a `Transport`
//! (or any host code) performs the round-trip in between.
//!
//! Bodies are either a JSON document or a list of multipart form parts. The
//! multipart variant stays structured so each transport can encode it with
//! its own form writer.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    /// Serialized JSON document, sent with `content-type: application/json`.
    Json(String),
    /// Form fields; the transport picks the boundary and sets the content type.
    Multipart(Vec<FormPart>),
}

impl HttpBody {
    /// The JSON text, if this is a JSON body.
    pub fn as_json(&self) -> Option<&str> {
        match self {
            HttpBody::Json(text) => Some(text),
            HttpBody::Multipart(_) => None,
        }
    }

    pub fn as_multipart(&self) -> Option<&[FormPart]> {
        match self {
            HttpBody::Multipart(parts) => Some(parts),
            HttpBody::Json(_) => None,
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: the base URL followed by the percent-encoded route
/// segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<HttpBody>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the transport after executing an `HttpRequest`, then passed
/// to the `GestockClient::parse_*` functions.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

//! The I/O seam between request building and response parsing.
//!
//! # Design
//! `Transport` executes one `HttpRequest` and hands back the raw
//! `HttpResponse`; status interpretation stays in `GestockClient`. A
//! non-2xx answer is therefore `Ok` here, and only failures that produce no
//! response at all become `ApiError::Transport`.
//!
//! reqwest re-parses every URL and folds `%2E` segments the way it folds
//! `.` and `..`. A request whose URL would change under that parsing is
//! refused here instead of reaching a different route.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::warn;

use crate::error::ApiError;
use crate::http::{FormPart, HttpBody, HttpMethod, HttpRequest, HttpResponse};

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `Transport` backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gestock-core/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    /// Reuse an already configured client (proxies, TLS roots, interceptors).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let url = target_url(&request.url)?;
        let mut builder = self.client.request(method, url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder = match request.body {
            Some(HttpBody::Json(text)) => builder.body(text),
            Some(HttpBody::Multipart(parts)) => builder.multipart(multipart_form(parts)?),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            warn!(url = %request.url, error = %e, "request failed before a response arrived");
            ApiError::from(e)
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse { status, headers, body })
    }
}

/// Parse `raw` for reqwest, rejecting URLs that parsing would rewrite.
fn target_url(raw: &str) -> Result<reqwest::Url, ApiError> {
    let url = reqwest::Url::parse(raw).map_err(|e| ApiError::Transport(format!("{raw}: {e}")))?;
    if url.as_str() != raw {
        warn!(url = %raw, normalized = %url, "refusing request whose path would be rewritten");
        return Err(ApiError::Transport(format!("{raw} would be sent as {url}")));
    }
    Ok(url)
}

fn multipart_form(parts: Vec<FormPart>) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in parts {
        form = match part {
            FormPart::Text { name, value } => form.text(name, value),
            FormPart::File {
                name,
                file_name,
                mime_type,
                bytes,
            } => {
                let mut file = Part::bytes(bytes).file_name(file_name);
                if let Some(mime) = mime_type {
                    file = file.mime_str(&mime)?;
                }
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::GestockClient;

    #[test]
    fn built_urls_pass_through_unchanged() {
        let client = GestockClient::new("http://localhost:8080/gestiondestock/v1").unwrap();
        for code in ["A/B 1", "x?y#z", "caf\u{e9}", "..."] {
            let raw = client.build_find_article_by_code(code).url;
            assert_eq!(target_url(&raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn dot_segments_are_refused_instead_of_folded() {
        let client = GestockClient::new("http://localhost:8080/gestiondestock/v1").unwrap();
        let raw = client.build_find_article_by_code("..").url;
        assert!(matches!(target_url(&raw), Err(ApiError::Transport(_))));
    }

    #[test]
    fn unparsable_url_is_a_transport_error() {
        assert!(matches!(target_url("not a url"), Err(ApiError::Transport(_))));
    }
}

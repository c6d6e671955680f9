//! Typed client for the gestiondestock inventory and sales REST API.
//!
//! # Overview
//! `GestockClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without touching the network (host-does-IO pattern).
//! `RemoteGateway` pairs it with a `Transport` and exposes one `async fn` per
//! endpoint for callers that just want the round-trip done.
//!
//! # Design
//! - `GestockClient` is stateless: it holds only the base URL.
//! - Builders and parsers are split so the I/O boundary is explicit and every
//!   request can be checked without a server.
//! - No validation, retries or response rewriting: DTOs pass through and
//!   errors surface unchanged.
//! - No authentication header is attached; wrap the transport (or supply a
//!   preconfigured `reqwest::Client`) to add one.

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod transport;
pub mod types;

pub use client::GestockClient;
pub use config::GatewayConfig;
pub use error::ApiError;
pub use gateway::RemoteGateway;
pub use http::{FormPart, HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use transport::{ReqwestTransport, Transport};
pub use types::*;

//! Contract checks for the async facade against a recording transport.
//!
//! # Design
//! `RecordingTransport` stores every request it receives and answers from a
//! queue of canned responses, so each test can assert both what was sent and
//! how the answer was surfaced.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use gestock_core::{
    ApiError, EtatCommande, FormPart, GestockClient, HttpBody, HttpMethod, HttpRequest, HttpResponse,
    PhotoUpload, RemoteGateway, Transport,
};
use rust_decimal_macros::dec;

const BASE_URL: &str = "http://localhost:8080/gestiondestock/v1";

#[derive(Default)]
struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl RecordingTransport {
    fn answering(status: u16, body: &str) -> Self {
        let transport = Self::default();
        transport.push(status, body);
        transport
    }

    fn push(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    fn failing(message: &str) -> Self {
        let transport = Self::default();
        transport
            .responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Transport(message.to_string())));
        transport
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no canned response".to_string())))
    }
}

fn gateway(transport: RecordingTransport) -> RemoteGateway<RecordingTransport> {
    RemoteGateway::new(GestockClient::new(BASE_URL).unwrap(), transport)
}

const ORDER: &str = r#"{"id":5,"code":"CC-5","dateCommande":"2024-03-01T10:00:00Z","etatCommande":"VALIDEE"}"#;

#[tokio::test]
async fn update_etat_commande_client_patches_path() {
    let gw = gateway(RecordingTransport::answering(200, ORDER));

    let order = gw.update_etat_commande_client(5, EtatCommande::Validee).await.unwrap();
    assert_eq!(order.etat_commande, EtatCommande::Validee);

    let sent = gw.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, HttpMethod::Patch);
    assert_eq!(sent[0].url, format!("{BASE_URL}/commandesclients/update/etat/5/VALIDEE"));
    assert_eq!(sent[0].body, Some(HttpBody::Json("{}".to_string())));
}

#[tokio::test]
async fn save_photo_sends_multipart_fields() {
    let gw = gateway(RecordingTransport::answering(200, r#"{"id":42,"photo":"photos/article/42/main"}"#));
    let photo = PhotoUpload::new("main.jpg", vec![1, 2, 3]).with_mime_type("image/jpeg");

    let answer = gw.save_photo("article", 42, &photo, "main").await.unwrap();
    assert_eq!(answer["photo"], "photos/article/42/main");

    let sent = gw.transport().sent();
    assert_eq!(sent[0].method, HttpMethod::Post);
    assert_eq!(sent[0].url, format!("{BASE_URL}/photos/article/42/main"));
    let parts = sent[0].body.as_ref().and_then(HttpBody::as_multipart).unwrap();
    let text = |name: &str| {
        parts.iter().find_map(|p| match p {
            FormPart::Text { name: n, value } if n == name => Some(value.clone()),
            _ => None,
        })
    };
    assert_eq!(text("id").as_deref(), Some("42"));
    assert_eq!(text("title").as_deref(), Some("main"));
    assert_eq!(text("context").as_deref(), Some("article"));
    assert!(parts
        .iter()
        .any(|p| matches!(p, FormPart::File { name, bytes, .. } if name == "photo" && bytes == &vec![1, 2, 3])));
}

#[tokio::test]
async fn not_found_surfaces_as_error() {
    let gw = gateway(RecordingTransport::answering(404, "Aucun article avec l'ID 9"));

    let err = gw.find_article_by_id(9).await.unwrap_err();
    match err {
        ApiError::NotFound { body } => assert_eq!(body, "Aucun article avec l'ID 9"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn transport_failure_is_not_swallowed() {
    let gw = gateway(RecordingTransport::failing("connection refused"));

    let err = gw.find_all_articles().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(ref m) if m == "connection refused"));
}

#[tokio::test]
async fn find_all_forwards_array_unmodified() {
    let gw = gateway(RecordingTransport::answering(
        200,
        r#"[{"id":2,"code":"B","designation":"b"},{"id":1,"code":"A","designation":"a"}]"#,
    ));

    let categories = gw.find_all_categories().await.unwrap();
    let codes: Vec<&str> = categories.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["B", "A"]);

    let sent = gw.transport().sent();
    assert_eq!(sent[0].method, HttpMethod::Get);
    assert!(sent[0].body.is_none());
}

#[tokio::test]
async fn delete_resolves_with_unit() {
    let gw = gateway(RecordingTransport::answering(200, ""));

    gw.delete_client(3).await.unwrap();

    let sent = gw.transport().sent();
    assert_eq!(sent[0].method, HttpMethod::Delete);
    assert_eq!(sent[0].url, format!("{BASE_URL}/clients/delete/3"));
}

#[tokio::test]
async fn stock_level_and_quantity_update() {
    let transport = RecordingTransport::answering(200, "12");
    transport.push(200, ORDER);
    let gw = gateway(transport);

    assert_eq!(gw.stock_reel_article(7).await.unwrap(), dec!(12));
    gw.update_quantite_commande_client(5, 8, dec!(1.5)).await.unwrap();

    let urls: Vec<String> = gw.transport().sent().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{BASE_URL}/mvtstk/stockreel/7"),
            format!("{BASE_URL}/commandesclients/update/quantite/5/8/1.5"),
        ]
    );
}

#[tokio::test]
async fn futures_are_lazy_until_awaited() {
    let gw = gateway(RecordingTransport::answering(200, "[]"));

    let pending = gw.find_all_ventes();
    assert!(gw.transport().sent().is_empty());
    drop(pending);
    assert!(gw.transport().sent().is_empty());

    let ventes = gw.find_all_ventes().await.unwrap();
    assert!(ventes.is_empty());
    assert_eq!(gw.transport().sent().len(), 1);
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let gw = gateway(RecordingTransport::answering(400, r#"{"message":"commande livree"}"#));

    let err = gw.update_client_commande(5, 2).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(matches!(err, ApiError::HttpError { ref body, .. } if body.contains("livree")));
}

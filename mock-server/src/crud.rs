//! Create / find / list / delete routes shared by every resource.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{Map, Value};

use crate::store::{article_id_of, Db};

/// `POST /{resource}/create` plus the [`queries`] routes.
pub fn routes(resource: &'static str) -> Router<Db> {
    Router::new()
        .route(
            &format!("/{resource}/create"),
            post(move |State(db): State<Db>, Json(body): Json<Map<String, Value>>| {
                create(db, resource, body)
            }),
        )
        .merge(queries(resource))
}

/// `GET /{resource}/all`, `GET /{resource}/{id}` and
/// `DELETE /{resource}/delete/{id}`.
pub fn queries(resource: &'static str) -> Router<Db> {
    Router::new()
        .route(
            &format!("/{resource}/all"),
            get(move |State(db): State<Db>| find_all(db, resource)),
        )
        .route(
            &format!("/{resource}/{{id}}"),
            get(move |State(db): State<Db>, Path(id): Path<i64>| find_by_id(db, resource, id)),
        )
        .route(
            &format!("/{resource}/delete/{{id}}"),
            delete(move |State(db): State<Db>, Path(id): Path<i64>| delete_by_id(db, resource, id)),
        )
}

/// `GET /{resource}/{segment}/{value}` looking records up by a string field.
pub fn lookup_route(resource: &'static str, segment: &'static str, field: &'static str) -> Router<Db> {
    Router::new().route(
        &format!("/{resource}/{segment}/{{value}}"),
        get(move |State(db): State<Db>, Path(value): Path<String>| find_by_field(db, resource, field, value)),
    )
}

async fn create(db: Db, resource: &'static str, body: Map<String, Value>) -> Json<Value> {
    let saved = db.write().await.save(resource, Value::Object(body));
    Json(saved)
}

async fn find_all(db: Db, resource: &'static str) -> Json<Vec<Value>> {
    let store = db.read().await;
    Json(store.all(resource).cloned().collect())
}

async fn find_by_id(db: Db, resource: &'static str, id: i64) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    store.get(resource, id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn find_by_field(
    db: Db,
    resource: &'static str,
    field: &'static str,
    value: String,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    store
        .find_by(resource, field, &value)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn delete_by_id(db: Db, resource: &'static str, id: i64) -> StatusCode {
    match db.write().await.remove(resource, id) {
        Some(_) => StatusCode::OK,
        None => StatusCode::NOT_FOUND,
    }
}

pub async fn articles_by_category(
    State(db): State<Db>,
    Path(id_category): Path<i64>,
) -> Json<Vec<Value>> {
    let store = db.read().await;
    let articles = store
        .all("articles")
        .filter(|a| a.get("category").and_then(|c| c.get("id")).and_then(Value::as_i64) == Some(id_category))
        .cloned()
        .collect();
    Json(articles)
}

/// Lines of every record of `resource` (stored under `lines_field`) that
/// reference `id_article`.
pub async fn article_history(
    db: Db,
    resource: &'static str,
    lines_field: &'static str,
    id_article: i64,
) -> Json<Vec<Value>> {
    let store = db.read().await;
    let lines = store
        .all(resource)
        .filter_map(|record| record.get(lines_field).and_then(Value::as_array))
        .flatten()
        .filter(|line| article_id_of(line) == Some(id_article))
        .cloned()
        .collect();
    Json(lines)
}

//! Multipart photo upload.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::store::Db;

/// Collection holding the records of an upload context.
fn resource_for(context: &str) -> Option<&'static str> {
    match context {
        "article" => Some("articles"),
        "client" => Some("clients"),
        "fournisseur" => Some("fournisseurs"),
        "utilisateur" => Some("utilisateurs"),
        "entreprise" => Some("entreprises"),
        _ => None,
    }
}

/// `POST /photos/{context}/{id}/{title}`: stores a photo reference on the
/// target record and returns the updated record.
pub async fn save_photo(
    State(db): State<Db>,
    Path((context, id, title)): Path<(String, i64, String)>,
    mut multipart: Multipart,
) -> Result<Json<Value>, StatusCode> {
    let resource = resource_for(&context).ok_or(StatusCode::BAD_REQUEST)?;

    let mut photo_size = None;
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        if field.name() == Some("photo") {
            let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
            photo_size = Some(bytes.len());
        }
    }
    let size = photo_size.ok_or(StatusCode::BAD_REQUEST)?;
    debug!(%context, id, %title, size, "photo received");

    let mut store = db.write().await;
    let record = store.get_mut(resource, id).ok_or(StatusCode::NOT_FOUND)?;
    record["photo"] = Value::from(format!("photos/{context}/{id}/{title}"));
    Ok(Json(record.clone()))
}

//! Client orders, supplier orders and sales.
//!
//! Order lines live inside their order record and get their own id
//! sequence. Delivered orders (`LIVREE`) refuse every modification, as the
//! real backend does.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
    Json, Router,
};
use serde_json::{Map, Number, Value};

use crate::crud;
use crate::store::{id_of, Db, Store};

const ETATS: [&str; 3] = ["EN_PREPARATION", "VALIDEE", "LIVREE"];
const LIVREE: &str = "LIVREE";

/// Route layout shared by the two order resources.
#[derive(Debug)]
pub struct OrderKind {
    pub resource: &'static str,
    pub owner_field: &'static str,
    pub owner_resource: &'static str,
    pub lines_field: &'static str,
}

pub const COMMANDE_CLIENT: OrderKind = OrderKind {
    resource: "commandesclients",
    owner_field: "client",
    owner_resource: "clients",
    lines_field: "ligneCommandeClients",
};

pub const COMMANDE_FOURNISSEUR: OrderKind = OrderKind {
    resource: "commandesfournisseurs",
    owner_field: "fournisseur",
    owner_resource: "fournisseurs",
    lines_field: "ligneCommandeFournisseurs",
};

pub fn routes(kind: &'static OrderKind) -> Router<Db> {
    let r = kind.resource;
    Router::new()
        .route(
            &format!("/{r}/create"),
            post(move |State(db): State<Db>, Json(body): Json<Map<String, Value>>| {
                create_with_lines(db, kind.resource, kind.lines_field, body)
            }),
        )
        .route(
            &format!("/{r}/lignesCommande/{{id}}"),
            get(move |State(db): State<Db>, Path(id): Path<i64>| lines(db, kind, id)),
        )
        .route(
            &format!("/{r}/update/etat/{{id}}/{{etat}}"),
            patch(move |State(db): State<Db>, Path((id, etat)): Path<(i64, String)>| {
                update_etat(db, kind, id, etat)
            }),
        )
        .route(
            &format!("/{r}/update/quantite/{{id}}/{{ligne}}/{{quantite}}"),
            patch(
                move |State(db): State<Db>, Path((id, ligne, quantite)): Path<(i64, i64, String)>| {
                    update_quantite(db, kind, id, ligne, quantite)
                },
            ),
        )
        .route(
            &format!("/{r}/update/{}/{{id}}/{{owner}}", kind.owner_field),
            patch(move |State(db): State<Db>, Path((id, owner)): Path<(i64, i64)>| {
                update_owner(db, kind, id, owner)
            }),
        )
        .route(
            &format!("/{r}/update/article/{{id}}/{{ligne}}/{{article}}"),
            patch(
                move |State(db): State<Db>, Path((id, ligne, article)): Path<(i64, i64, i64)>| {
                    update_article(db, kind, id, ligne, article)
                },
            ),
        )
        .route(
            &format!("/{r}/update/article/{{id}}/{{ligne}}"),
            delete(move |State(db): State<Db>, Path((id, ligne)): Path<(i64, i64)>| {
                remove_line(db, kind, id, ligne)
            }),
        )
        .merge(crud::queries(r))
        .merge(crud::lookup_route(r, "filter", "code"))
}

pub fn ventes_routes() -> Router<Db> {
    Router::new()
        .route(
            "/ventes/create",
            post(|State(db): State<Db>, Json(body): Json<Map<String, Value>>| {
                create_with_lines(db, "ventes", "ligneVentes", body)
            }),
        )
        .merge(crud::queries("ventes"))
        .merge(crud::lookup_route("ventes", "filter", "code"))
}

/// Save a record, numbering any line that arrives without an id.
pub async fn create_with_lines(
    db: Db,
    resource: &'static str,
    lines_field: &'static str,
    mut body: Map<String, Value>,
) -> Json<Value> {
    let mut store = db.write().await;
    if let Some(Value::Array(lines)) = body.get_mut(lines_field) {
        for line in lines.iter_mut().filter(|l| l.is_object()) {
            if id_of(line).is_none() {
                line["id"] = Value::from(store.next_id(lines_field));
            }
        }
    }
    Json(store.save(resource, Value::Object(body)))
}

async fn lines(db: Db, kind: &'static OrderKind, id: i64) -> Result<Json<Vec<Value>>, StatusCode> {
    let store = db.read().await;
    let order = store.get(kind.resource, id).ok_or(StatusCode::NOT_FOUND)?;
    let lines = order
        .get(kind.lines_field)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    Ok(Json(lines))
}

fn editable_order<'a>(store: &'a mut Store, kind: &OrderKind, id: i64) -> Result<&'a mut Value, StatusCode> {
    let order = store.get_mut(kind.resource, id).ok_or(StatusCode::NOT_FOUND)?;
    if order.get("etatCommande").and_then(Value::as_str) == Some(LIVREE) {
        return Err(StatusCode::BAD_REQUEST);
    }
    Ok(order)
}

fn line_mut<'a>(order: &'a mut Value, kind: &OrderKind, ligne: i64) -> Result<&'a mut Value, StatusCode> {
    order
        .get_mut(kind.lines_field)
        .and_then(Value::as_array_mut)
        .and_then(|lines| lines.iter_mut().find(|l| id_of(l) == Some(ligne)))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_etat(db: Db, kind: &'static OrderKind, id: i64, etat: String) -> Result<Json<Value>, StatusCode> {
    if !ETATS.contains(&etat.as_str()) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let order = editable_order(&mut store, kind, id)?;
    order["etatCommande"] = Value::from(etat);
    Ok(Json(order.clone()))
}

async fn update_quantite(
    db: Db,
    kind: &'static OrderKind,
    id: i64,
    ligne: i64,
    quantite: String,
) -> Result<Json<Value>, StatusCode> {
    let quantite = quantite
        .parse::<f64>()
        .ok()
        .filter(|q| *q > 0.0)
        .and_then(Number::from_f64)
        .ok_or(StatusCode::BAD_REQUEST)?;
    let mut store = db.write().await;
    let order = editable_order(&mut store, kind, id)?;
    line_mut(order, kind, ligne)?["quantite"] = Value::Number(quantite);
    Ok(Json(order.clone()))
}

async fn update_owner(db: Db, kind: &'static OrderKind, id: i64, owner: i64) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let owner = store
        .get(kind.owner_resource, owner)
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;
    let order = editable_order(&mut store, kind, id)?;
    order[kind.owner_field] = owner;
    Ok(Json(order.clone()))
}

async fn update_article(
    db: Db,
    kind: &'static OrderKind,
    id: i64,
    ligne: i64,
    article: i64,
) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let article = store.get("articles", article).cloned().ok_or(StatusCode::NOT_FOUND)?;
    let order = editable_order(&mut store, kind, id)?;
    line_mut(order, kind, ligne)?["article"] = article;
    Ok(Json(order.clone()))
}

async fn remove_line(db: Db, kind: &'static OrderKind, id: i64, ligne: i64) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let order = editable_order(&mut store, kind, id)?;
    let lines = order
        .get_mut(kind.lines_field)
        .and_then(Value::as_array_mut)
        .ok_or(StatusCode::NOT_FOUND)?;
    let before = lines.len();
    lines.retain(|l| id_of(l) != Some(ligne));
    if lines.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(order.clone()))
}

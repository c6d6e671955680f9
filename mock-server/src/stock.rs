//! Stock ledger: the four movement routes, the per-article listing and the
//! computed stock level.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{Map, Value};

use crate::store::{article_id_of, Db};

const MVTSTK: &str = "mvtstk";

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/mvtstk/entree", post(|db: State<Db>, body: Json<Map<String, Value>>| record(db, body, "ENTREE")))
        .route("/mvtstk/sortie", post(|db: State<Db>, body: Json<Map<String, Value>>| record(db, body, "SORTIE")))
        .route(
            "/mvtstk/correctionpos",
            post(|db: State<Db>, body: Json<Map<String, Value>>| record(db, body, "CORRECTION_POS")),
        )
        .route(
            "/mvtstk/correctionneg",
            post(|db: State<Db>, body: Json<Map<String, Value>>| record(db, body, "CORRECTION_NEG")),
        )
        .route("/mvtstk/stockreel/{id}", get(stock_reel))
        .route("/mvtstk/filter/article/{id}", get(movements_of_article))
}

/// The route decides the movement type, whatever the body says.
async fn record(State(db): State<Db>, Json(mut body): Json<Map<String, Value>>, type_mvt: &'static str) -> Json<Value> {
    body.insert("typeMvt".to_string(), Value::from(type_mvt));
    Json(db.write().await.save(MVTSTK, Value::Object(body)))
}

async fn stock_reel(State(db): State<Db>, Path(id_article): Path<i64>) -> Json<f64> {
    let store = db.read().await;
    let level = store
        .all(MVTSTK)
        .filter(|m| article_id_of(m) == Some(id_article))
        .map(signed_quantity)
        .sum::<f64>();
    Json(level)
}

async fn movements_of_article(State(db): State<Db>, Path(id_article): Path<i64>) -> Json<Vec<Value>> {
    let store = db.read().await;
    Json(
        store
            .all(MVTSTK)
            .filter(|m| article_id_of(m) == Some(id_article))
            .cloned()
            .collect(),
    )
}

fn signed_quantity(mvt: &Value) -> f64 {
    let quantite = mvt.get("quantite").and_then(Value::as_f64).unwrap_or(0.0);
    match mvt.get("typeMvt").and_then(Value::as_str) {
        Some("ENTREE") | Some("CORRECTION_POS") => quantite,
        Some("SORTIE") | Some("CORRECTION_NEG") => -quantite,
        _ => 0.0,
    }
}

//! Authentication and the user-specific routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::crud;
use crate::store::Db;

#[derive(Debug, Deserialize)]
pub struct AuthenticationRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangerMotDePasse {
    pub id: i64,
    pub mot_de_passe: String,
    pub confirm_mot_de_passe: String,
}

pub fn routes() -> Router<Db> {
    Router::new()
        .route("/auth/authenticate", post(authenticate))
        .route("/utilisateurs/update/password", post(changer_mot_de_passe))
        .merge(crud::routes("utilisateurs"))
        .merge(crud::lookup_route("utilisateurs", "find", "email"))
}

/// Any non-blank login/password pair gets a fresh opaque token.
async fn authenticate(Json(input): Json<AuthenticationRequest>) -> Result<Json<AuthenticationResponse>, StatusCode> {
    if input.login.trim().is_empty() || input.password.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }
    info!(login = %input.login, "issuing token");
    Ok(Json(AuthenticationResponse {
        access_token: format!("mock-{}", Uuid::new_v4()),
    }))
}

async fn changer_mot_de_passe(
    State(db): State<Db>,
    Json(input): Json<ChangerMotDePasse>,
) -> Result<Json<Value>, StatusCode> {
    if input.mot_de_passe.is_empty() || input.mot_de_passe != input.confirm_mot_de_passe {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut store = db.write().await;
    let user = store.get_mut("utilisateurs", input.id).ok_or(StatusCode::NOT_FOUND)?;
    user["moteDePasse"] = Value::from(input.mot_de_passe);
    Ok(Json(user.clone()))
}

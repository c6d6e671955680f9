//! In-memory stand-in for the gestiondestock backend.
//!
//! Serves every route the client knows about under `/gestiondestock/v1`,
//! storing records as JSON in process memory. Meant for integration tests and
//! local development, not for persistence.

pub mod accounts;
pub mod crud;
pub mod orders;
pub mod photos;
pub mod stock;
pub mod store;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use store::{Db, Store};

pub const API_PREFIX: &str = "/gestiondestock/v1";

/// Router with a fresh, empty store.
pub fn app() -> Router {
    app_with_state(Db::default())
}

pub fn app_with_state(db: Db) -> Router {
    Router::new()
        .nest(API_PREFIX, api())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

fn api() -> Router<Db> {
    Router::new()
        .merge(crud::routes("articles"))
        .merge(crud::lookup_route("articles", "filter", "codeArticle"))
        .route("/articles/filter/category/{id}", get(crud::articles_by_category))
        .route(
            "/articles/historique/vente/{id}",
            get(|State(db): State<Db>, Path(id): Path<i64>| crud::article_history(db, "ventes", "ligneVentes", id)),
        )
        .route(
            "/articles/historique/commandeclient/{id}",
            get(|State(db): State<Db>, Path(id): Path<i64>| {
                crud::article_history(db, "commandesclients", "ligneCommandeClients", id)
            }),
        )
        .route(
            "/articles/historique/commandefournisseur/{id}",
            get(|State(db): State<Db>, Path(id): Path<i64>| {
                crud::article_history(db, "commandesfournisseurs", "ligneCommandeFournisseurs", id)
            }),
        )
        .merge(crud::routes("categories"))
        .merge(crud::lookup_route("categories", "filter", "code"))
        .merge(crud::routes("clients"))
        .merge(crud::routes("fournisseurs"))
        .merge(crud::routes("entreprises"))
        .merge(orders::routes(&orders::COMMANDE_CLIENT))
        .merge(orders::routes(&orders::COMMANDE_FOURNISSEUR))
        .merge(orders::ventes_routes())
        .merge(accounts::routes())
        .merge(stock::routes())
        .route("/photos/{context}/{id}/{title}", post(photos::save_photo))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

//! Client orders, supplier orders and sales.
//!
//! The two order resources share a shape: create, lookups, line listing, the
//! targeted `PATCH` updates and line removal. Status, quantity and the linked
//! party/article are changed through the path alone.

use rust_decimal::Decimal;

use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{CommandeClientDto, CommandeFournisseurDto, EtatCommande, VentesDto};

use super::GestockClient;

const COMMANDES_CLIENTS: &str = "commandesclients";
const COMMANDES_FOURNISSEURS: &str = "commandesfournisseurs";

impl GestockClient {
    pub fn build_save_commande_client(&self, input: &CommandeClientDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&[COMMANDES_CLIENTS, "create"], input)
    }

    pub fn build_find_commande_client_by_id(&self, id: i64) -> HttpRequest {
        self.get(&[COMMANDES_CLIENTS, &id.to_string()])
    }

    pub fn build_find_commande_client_by_code(&self, code: &str) -> HttpRequest {
        self.get(&[COMMANDES_CLIENTS, "filter", code])
    }

    pub fn build_find_all_commandes_clients(&self) -> HttpRequest {
        self.get(&[COMMANDES_CLIENTS, "all"])
    }

    pub fn build_find_all_lignes_commandes_client_by_commande_id(&self, id_commande: i64) -> HttpRequest {
        self.get(&[COMMANDES_CLIENTS, "lignesCommande", &id_commande.to_string()])
    }

    pub fn build_update_etat_commande_client(&self, id_commande: i64, etat: EtatCommande) -> HttpRequest {
        self.patch(&[COMMANDES_CLIENTS, "update", "etat", &id_commande.to_string(), etat.as_str()])
    }

    pub fn build_update_quantite_commande_client(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        quantite: Decimal,
    ) -> HttpRequest {
        self.patch(&[
            COMMANDES_CLIENTS,
            "update",
            "quantite",
            &id_commande.to_string(),
            &id_ligne_commande.to_string(),
            &quantite.to_string(),
        ])
    }

    pub fn build_update_client_commande(&self, id_commande: i64, id_client: i64) -> HttpRequest {
        self.patch(&[
            COMMANDES_CLIENTS,
            "update",
            "client",
            &id_commande.to_string(),
            &id_client.to_string(),
        ])
    }

    pub fn build_update_article_commande_client(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        id_article: i64,
    ) -> HttpRequest {
        self.patch(&[
            COMMANDES_CLIENTS,
            "update",
            "article",
            &id_commande.to_string(),
            &id_ligne_commande.to_string(),
            &id_article.to_string(),
        ])
    }

    /// Removes one line; the server answers with the updated order.
    pub fn build_delete_article_commande_client(&self, id_commande: i64, id_ligne_commande: i64) -> HttpRequest {
        self.delete(&[
            COMMANDES_CLIENTS,
            "update",
            "article",
            &id_commande.to_string(),
            &id_ligne_commande.to_string(),
        ])
    }

    pub fn build_delete_commande_client(&self, id: i64) -> HttpRequest {
        self.delete(&[COMMANDES_CLIENTS, "delete", &id.to_string()])
    }

    pub fn build_save_commande_fournisseur(&self, input: &CommandeFournisseurDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&[COMMANDES_FOURNISSEURS, "create"], input)
    }

    pub fn build_find_commande_fournisseur_by_id(&self, id: i64) -> HttpRequest {
        self.get(&[COMMANDES_FOURNISSEURS, &id.to_string()])
    }

    pub fn build_find_commande_fournisseur_by_code(&self, code: &str) -> HttpRequest {
        self.get(&[COMMANDES_FOURNISSEURS, "filter", code])
    }

    pub fn build_find_all_commandes_fournisseurs(&self) -> HttpRequest {
        self.get(&[COMMANDES_FOURNISSEURS, "all"])
    }

    pub fn build_find_all_lignes_commandes_fournisseur_by_commande_id(&self, id_commande: i64) -> HttpRequest {
        self.get(&[COMMANDES_FOURNISSEURS, "lignesCommande", &id_commande.to_string()])
    }

    pub fn build_update_etat_commande_fournisseur(&self, id_commande: i64, etat: EtatCommande) -> HttpRequest {
        self.patch(&[COMMANDES_FOURNISSEURS, "update", "etat", &id_commande.to_string(), etat.as_str()])
    }

    pub fn build_update_quantite_commande_fournisseur(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        quantite: Decimal,
    ) -> HttpRequest {
        self.patch(&[
            COMMANDES_FOURNISSEURS,
            "update",
            "quantite",
            &id_commande.to_string(),
            &id_ligne_commande.to_string(),
            &quantite.to_string(),
        ])
    }

    pub fn build_update_fournisseur_commande(&self, id_commande: i64, id_fournisseur: i64) -> HttpRequest {
        self.patch(&[
            COMMANDES_FOURNISSEURS,
            "update",
            "fournisseur",
            &id_commande.to_string(),
            &id_fournisseur.to_string(),
        ])
    }

    pub fn build_update_article_commande_fournisseur(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        id_article: i64,
    ) -> HttpRequest {
        self.patch(&[
            COMMANDES_FOURNISSEURS,
            "update",
            "article",
            &id_commande.to_string(),
            &id_ligne_commande.to_string(),
            &id_article.to_string(),
        ])
    }

    pub fn build_delete_article_commande_fournisseur(&self, id_commande: i64, id_ligne_commande: i64) -> HttpRequest {
        self.delete(&[
            COMMANDES_FOURNISSEURS,
            "update",
            "article",
            &id_commande.to_string(),
            &id_ligne_commande.to_string(),
        ])
    }

    pub fn build_delete_commande_fournisseur(&self, id: i64) -> HttpRequest {
        self.delete(&[COMMANDES_FOURNISSEURS, "delete", &id.to_string()])
    }

    pub fn build_save_vente(&self, input: &VentesDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["ventes", "create"], input)
    }

    pub fn build_find_vente_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["ventes", &id.to_string()])
    }

    /// `GET /ventes/filter/{code}`. The code lookup sits under `filter` like
    /// the other resources, since `/ventes/{code}` is the lookup by id.
    pub fn build_find_vente_by_code(&self, code: &str) -> HttpRequest {
        self.get(&["ventes", "filter", code])
    }

    pub fn build_find_all_ventes(&self) -> HttpRequest {
        self.get(&["ventes", "all"])
    }

    pub fn build_delete_vente(&self, id: i64) -> HttpRequest {
        self.delete(&["ventes", "delete", &id.to_string()])
    }
}

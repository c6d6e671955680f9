//! Clients, suppliers, users and companies.

use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{ChangerMotDePasseUtilisateurDto, ClientDto, EntrepriseDto, FournisseurDto, UtilisateurDto};

use super::GestockClient;

impl GestockClient {
    pub fn build_save_client(&self, input: &ClientDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["clients", "create"], input)
    }

    pub fn build_find_client_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["clients", &id.to_string()])
    }

    pub fn build_find_all_clients(&self) -> HttpRequest {
        self.get(&["clients", "all"])
    }

    pub fn build_delete_client(&self, id: i64) -> HttpRequest {
        self.delete(&["clients", "delete", &id.to_string()])
    }

    pub fn build_save_fournisseur(&self, input: &FournisseurDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["fournisseurs", "create"], input)
    }

    pub fn build_find_fournisseur_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["fournisseurs", &id.to_string()])
    }

    pub fn build_find_all_fournisseurs(&self) -> HttpRequest {
        self.get(&["fournisseurs", "all"])
    }

    pub fn build_delete_fournisseur(&self, id: i64) -> HttpRequest {
        self.delete(&["fournisseurs", "delete", &id.to_string()])
    }

    pub fn build_save_utilisateur(&self, input: &UtilisateurDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["utilisateurs", "create"], input)
    }

    pub fn build_find_utilisateur_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["utilisateurs", &id.to_string()])
    }

    pub fn build_find_utilisateur_by_email(&self, email: &str) -> HttpRequest {
        self.get(&["utilisateurs", "find", email])
    }

    pub fn build_find_all_utilisateurs(&self) -> HttpRequest {
        self.get(&["utilisateurs", "all"])
    }

    /// The password change is a POST even though it updates an existing user.
    pub fn build_changer_mot_de_passe(
        &self,
        input: &ChangerMotDePasseUtilisateurDto,
    ) -> Result<HttpRequest, ApiError> {
        self.post_json(&["utilisateurs", "update", "password"], input)
    }

    pub fn build_delete_utilisateur(&self, id: i64) -> HttpRequest {
        self.delete(&["utilisateurs", "delete", &id.to_string()])
    }

    pub fn build_save_entreprise(&self, input: &EntrepriseDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["entreprises", "create"], input)
    }

    pub fn build_find_entreprise_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["entreprises", &id.to_string()])
    }

    pub fn build_find_all_entreprises(&self) -> HttpRequest {
        self.get(&["entreprises", "all"])
    }

    pub fn build_delete_entreprise(&self, id: i64) -> HttpRequest {
        self.delete(&["entreprises", "delete", &id.to_string()])
    }
}

//! Async facade: one method per gestiondestock endpoint.
//!
//! # Design
//! Every method is build, execute, parse with no step in between. The
//! returned futures are lazy: nothing is sent until they are polled, and
//! dropping one before completion abandons the underlying request. Errors
//! from any of the three steps reach the caller unchanged.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::GestockClient;
use crate::config::GatewayConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{
    ArticleDto, AuthenticationRequest, AuthenticationResponse, CategoryDto,
    ChangerMotDePasseUtilisateurDto, ClientDto, CommandeClientDto, CommandeFournisseurDto,
    EntrepriseDto, EtatCommande, FournisseurDto, LigneCommandeClientDto,
    LigneCommandeFournisseurDto, LigneVenteDto, MvtStkDto, PhotoUpload, UtilisateurDto, VentesDto,
};

#[derive(Debug, Clone)]
pub struct RemoteGateway<T = ReqwestTransport> {
    client: GestockClient,
    transport: T,
}

impl RemoteGateway<ReqwestTransport> {
    /// Gateway over HTTP with the configured base URL and timeout.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, ApiError> {
        let client = GestockClient::new(&config.base_url)?;
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::new(client, transport))
    }
}

impl<T: Transport> RemoteGateway<T> {
    pub fn new(client: GestockClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &GestockClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "dispatching request");
        let url = request.url.clone();
        let response = self.transport.execute(request).await?;
        if !response.is_success() {
            warn!(status = response.status, url = %url, "server answered with an error status");
        }
        Ok(response)
    }

    async fn entity<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.send(request).await?;
        self.client.parse_entity(response)
    }

    async fn list<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<Vec<R>, ApiError> {
        let response = self.send(request).await?;
        self.client.parse_list(response)
    }

    async fn empty(&self, request: HttpRequest) -> Result<(), ApiError> {
        let response = self.send(request).await?;
        self.client.parse_empty(response)
    }

    // auth

    pub async fn authenticate(&self, input: &AuthenticationRequest) -> Result<AuthenticationResponse, ApiError> {
        self.entity(self.client.build_authenticate(input)?).await
    }

    // articles

    pub async fn save_article(&self, input: &ArticleDto) -> Result<ArticleDto, ApiError> {
        self.entity(self.client.build_save_article(input)?).await
    }

    pub async fn find_article_by_id(&self, id: i64) -> Result<ArticleDto, ApiError> {
        self.entity(self.client.build_find_article_by_id(id)).await
    }

    pub async fn find_article_by_code(&self, code: &str) -> Result<ArticleDto, ApiError> {
        self.entity(self.client.build_find_article_by_code(code)).await
    }

    pub async fn find_all_articles(&self) -> Result<Vec<ArticleDto>, ApiError> {
        self.list(self.client.build_find_all_articles()).await
    }

    pub async fn find_all_articles_by_category(&self, id_category: i64) -> Result<Vec<ArticleDto>, ApiError> {
        self.list(self.client.build_find_all_articles_by_category(id_category)).await
    }

    pub async fn find_historique_ventes(&self, id_article: i64) -> Result<Vec<LigneVenteDto>, ApiError> {
        self.list(self.client.build_find_historique_ventes(id_article)).await
    }

    pub async fn find_historique_commande_client(
        &self,
        id_article: i64,
    ) -> Result<Vec<LigneCommandeClientDto>, ApiError> {
        self.list(self.client.build_find_historique_commande_client(id_article)).await
    }

    pub async fn find_historique_commande_fournisseur(
        &self,
        id_article: i64,
    ) -> Result<Vec<LigneCommandeFournisseurDto>, ApiError> {
        self.list(self.client.build_find_historique_commande_fournisseur(id_article)).await
    }

    pub async fn delete_article(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_article(id)).await
    }

    // categories

    pub async fn save_category(&self, input: &CategoryDto) -> Result<CategoryDto, ApiError> {
        self.entity(self.client.build_save_category(input)?).await
    }

    pub async fn find_category_by_id(&self, id: i64) -> Result<CategoryDto, ApiError> {
        self.entity(self.client.build_find_category_by_id(id)).await
    }

    pub async fn find_category_by_code(&self, code: &str) -> Result<CategoryDto, ApiError> {
        self.entity(self.client.build_find_category_by_code(code)).await
    }

    pub async fn find_all_categories(&self) -> Result<Vec<CategoryDto>, ApiError> {
        self.list(self.client.build_find_all_categories()).await
    }

    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_category(id)).await
    }

    // clients

    pub async fn save_client(&self, input: &ClientDto) -> Result<ClientDto, ApiError> {
        self.entity(self.client.build_save_client(input)?).await
    }

    pub async fn find_client_by_id(&self, id: i64) -> Result<ClientDto, ApiError> {
        self.entity(self.client.build_find_client_by_id(id)).await
    }

    pub async fn find_all_clients(&self) -> Result<Vec<ClientDto>, ApiError> {
        self.list(self.client.build_find_all_clients()).await
    }

    pub async fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_client(id)).await
    }

    // fournisseurs

    pub async fn save_fournisseur(&self, input: &FournisseurDto) -> Result<FournisseurDto, ApiError> {
        self.entity(self.client.build_save_fournisseur(input)?).await
    }

    pub async fn find_fournisseur_by_id(&self, id: i64) -> Result<FournisseurDto, ApiError> {
        self.entity(self.client.build_find_fournisseur_by_id(id)).await
    }

    pub async fn find_all_fournisseurs(&self) -> Result<Vec<FournisseurDto>, ApiError> {
        self.list(self.client.build_find_all_fournisseurs()).await
    }

    pub async fn delete_fournisseur(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_fournisseur(id)).await
    }

    // commandes clients

    pub async fn save_commande_client(&self, input: &CommandeClientDto) -> Result<CommandeClientDto, ApiError> {
        self.entity(self.client.build_save_commande_client(input)?).await
    }

    pub async fn find_commande_client_by_id(&self, id: i64) -> Result<CommandeClientDto, ApiError> {
        self.entity(self.client.build_find_commande_client_by_id(id)).await
    }

    pub async fn find_commande_client_by_code(&self, code: &str) -> Result<CommandeClientDto, ApiError> {
        self.entity(self.client.build_find_commande_client_by_code(code)).await
    }

    pub async fn find_all_commandes_clients(&self) -> Result<Vec<CommandeClientDto>, ApiError> {
        self.list(self.client.build_find_all_commandes_clients()).await
    }

    pub async fn find_all_lignes_commandes_client_by_commande_id(
        &self,
        id_commande: i64,
    ) -> Result<Vec<LigneCommandeClientDto>, ApiError> {
        self.list(self.client.build_find_all_lignes_commandes_client_by_commande_id(id_commande))
            .await
    }

    pub async fn update_etat_commande_client(
        &self,
        id_commande: i64,
        etat: EtatCommande,
    ) -> Result<CommandeClientDto, ApiError> {
        self.entity(self.client.build_update_etat_commande_client(id_commande, etat)).await
    }

    pub async fn update_quantite_commande_client(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        quantite: Decimal,
    ) -> Result<CommandeClientDto, ApiError> {
        self.entity(
            self.client
                .build_update_quantite_commande_client(id_commande, id_ligne_commande, quantite),
        )
        .await
    }

    pub async fn update_client_commande(&self, id_commande: i64, id_client: i64) -> Result<CommandeClientDto, ApiError> {
        self.entity(self.client.build_update_client_commande(id_commande, id_client)).await
    }

    pub async fn update_article_commande_client(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        id_article: i64,
    ) -> Result<CommandeClientDto, ApiError> {
        self.entity(
            self.client
                .build_update_article_commande_client(id_commande, id_ligne_commande, id_article),
        )
        .await
    }

    pub async fn delete_article_commande_client(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
    ) -> Result<CommandeClientDto, ApiError> {
        self.entity(
            self.client
                .build_delete_article_commande_client(id_commande, id_ligne_commande),
        )
        .await
    }

    pub async fn delete_commande_client(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_commande_client(id)).await
    }

    // commandes fournisseurs

    pub async fn save_commande_fournisseur(
        &self,
        input: &CommandeFournisseurDto,
    ) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(self.client.build_save_commande_fournisseur(input)?).await
    }

    pub async fn find_commande_fournisseur_by_id(&self, id: i64) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(self.client.build_find_commande_fournisseur_by_id(id)).await
    }

    pub async fn find_commande_fournisseur_by_code(&self, code: &str) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(self.client.build_find_commande_fournisseur_by_code(code)).await
    }

    pub async fn find_all_commandes_fournisseurs(&self) -> Result<Vec<CommandeFournisseurDto>, ApiError> {
        self.list(self.client.build_find_all_commandes_fournisseurs()).await
    }

    pub async fn find_all_lignes_commandes_fournisseur_by_commande_id(
        &self,
        id_commande: i64,
    ) -> Result<Vec<LigneCommandeFournisseurDto>, ApiError> {
        self.list(
            self.client
                .build_find_all_lignes_commandes_fournisseur_by_commande_id(id_commande),
        )
        .await
    }

    pub async fn update_etat_commande_fournisseur(
        &self,
        id_commande: i64,
        etat: EtatCommande,
    ) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(self.client.build_update_etat_commande_fournisseur(id_commande, etat)).await
    }

    pub async fn update_quantite_commande_fournisseur(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        quantite: Decimal,
    ) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(
            self.client
                .build_update_quantite_commande_fournisseur(id_commande, id_ligne_commande, quantite),
        )
        .await
    }

    pub async fn update_fournisseur_commande(
        &self,
        id_commande: i64,
        id_fournisseur: i64,
    ) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(self.client.build_update_fournisseur_commande(id_commande, id_fournisseur)).await
    }

    pub async fn update_article_commande_fournisseur(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
        id_article: i64,
    ) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(
            self.client
                .build_update_article_commande_fournisseur(id_commande, id_ligne_commande, id_article),
        )
        .await
    }

    pub async fn delete_article_commande_fournisseur(
        &self,
        id_commande: i64,
        id_ligne_commande: i64,
    ) -> Result<CommandeFournisseurDto, ApiError> {
        self.entity(
            self.client
                .build_delete_article_commande_fournisseur(id_commande, id_ligne_commande),
        )
        .await
    }

    pub async fn delete_commande_fournisseur(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_commande_fournisseur(id)).await
    }

    // ventes

    pub async fn save_vente(&self, input: &VentesDto) -> Result<VentesDto, ApiError> {
        self.entity(self.client.build_save_vente(input)?).await
    }

    pub async fn find_vente_by_id(&self, id: i64) -> Result<VentesDto, ApiError> {
        self.entity(self.client.build_find_vente_by_id(id)).await
    }

    pub async fn find_vente_by_code(&self, code: &str) -> Result<VentesDto, ApiError> {
        self.entity(self.client.build_find_vente_by_code(code)).await
    }

    pub async fn find_all_ventes(&self) -> Result<Vec<VentesDto>, ApiError> {
        self.list(self.client.build_find_all_ventes()).await
    }

    pub async fn delete_vente(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_vente(id)).await
    }

    // utilisateurs

    pub async fn save_utilisateur(&self, input: &UtilisateurDto) -> Result<UtilisateurDto, ApiError> {
        self.entity(self.client.build_save_utilisateur(input)?).await
    }

    pub async fn find_utilisateur_by_id(&self, id: i64) -> Result<UtilisateurDto, ApiError> {
        self.entity(self.client.build_find_utilisateur_by_id(id)).await
    }

    pub async fn find_utilisateur_by_email(&self, email: &str) -> Result<UtilisateurDto, ApiError> {
        self.entity(self.client.build_find_utilisateur_by_email(email)).await
    }

    pub async fn find_all_utilisateurs(&self) -> Result<Vec<UtilisateurDto>, ApiError> {
        self.list(self.client.build_find_all_utilisateurs()).await
    }

    pub async fn changer_mot_de_passe(
        &self,
        input: &ChangerMotDePasseUtilisateurDto,
    ) -> Result<UtilisateurDto, ApiError> {
        self.entity(self.client.build_changer_mot_de_passe(input)?).await
    }

    pub async fn delete_utilisateur(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_utilisateur(id)).await
    }

    // entreprises

    pub async fn save_entreprise(&self, input: &EntrepriseDto) -> Result<EntrepriseDto, ApiError> {
        self.entity(self.client.build_save_entreprise(input)?).await
    }

    pub async fn find_entreprise_by_id(&self, id: i64) -> Result<EntrepriseDto, ApiError> {
        self.entity(self.client.build_find_entreprise_by_id(id)).await
    }

    pub async fn find_all_entreprises(&self) -> Result<Vec<EntrepriseDto>, ApiError> {
        self.list(self.client.build_find_all_entreprises()).await
    }

    pub async fn delete_entreprise(&self, id: i64) -> Result<(), ApiError> {
        self.empty(self.client.build_delete_entreprise(id)).await
    }

    // mouvements de stock

    /// Current stock level of an article as computed by the server.
    pub async fn stock_reel_article(&self, id_article: i64) -> Result<Decimal, ApiError> {
        let response = self.send(self.client.build_stock_reel_article(id_article)).await?;
        self.client.parse_stock_level(response)
    }

    pub async fn mvt_stk_article(&self, id_article: i64) -> Result<Vec<MvtStkDto>, ApiError> {
        self.list(self.client.build_mvt_stk_article(id_article)).await
    }

    pub async fn entree_stock(&self, input: &MvtStkDto) -> Result<MvtStkDto, ApiError> {
        self.entity(self.client.build_entree_stock(input)?).await
    }

    pub async fn sortie_stock(&self, input: &MvtStkDto) -> Result<MvtStkDto, ApiError> {
        self.entity(self.client.build_sortie_stock(input)?).await
    }

    pub async fn correction_stock_pos(&self, input: &MvtStkDto) -> Result<MvtStkDto, ApiError> {
        self.entity(self.client.build_correction_stock_pos(input)?).await
    }

    pub async fn correction_stock_neg(&self, input: &MvtStkDto) -> Result<MvtStkDto, ApiError> {
        self.entity(self.client.build_correction_stock_neg(input)?).await
    }

    // photos

    /// Upload a photo for the record `id` of `context` (`article`, `client`,
    /// `utilisateur`...). The answer is returned as untyped JSON because its
    /// shape depends on the context.
    pub async fn save_photo(&self, context: &str, id: i64, photo: &PhotoUpload, title: &str) -> Result<Value, ApiError> {
        let response = self.send(self.client.build_save_photo(context, id, photo, title)).await?;
        self.client.parse_value(response)
    }
}

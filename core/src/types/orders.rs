use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::ArticleDto;
use super::party::{ClientDto, FournisseurDto};

/// Order status. Carried as a value only; the server owns the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EtatCommande {
    EnPreparation,
    Validee,
    Livree,
}

impl EtatCommande {
    /// Wire name, also used as a path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            EtatCommande::EnPreparation => "EN_PREPARATION",
            EtatCommande::Validee => "VALIDEE",
            EtatCommande::Livree => "LIVREE",
        }
    }
}

impl fmt::Display for EtatCommande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandeClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub date_commande: DateTime<Utc>,
    pub etat_commande: EtatCommande,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<ClientDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligne_commande_clients: Option<Vec<LigneCommandeClientDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandeFournisseurDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub date_commande: DateTime<Utc>,
    pub etat_commande: EtatCommande,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fournisseur: Option<FournisseurDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligne_commande_fournisseurs: Option<Vec<LigneCommandeFournisseurDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleDto>,
    pub quantite: Decimal,
    pub prix_unitaire: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commande_client: Option<Box<CommandeClientDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneCommandeFournisseurDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleDto>,
    pub quantite: Decimal,
    pub prix_unitaire: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commande_fournisseur: Option<Box<CommandeFournisseurDto>>,
}

/// A counter sale, not tied to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VentesDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub date_vente: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commentaire: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligne_ventes: Option<Vec<LigneVenteDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneVenteDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vente: Option<Box<VentesDto>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleDto>,
    pub quantite: Decimal,
    pub prix_unitaire: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationResponse {
    pub access_token: String,
}

/// Postal address embedded in clients, suppliers, users and companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdresseDto {
    pub adresse1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse2: Option<String>,
    pub ville: String,
    pub code_postal: String,
    pub pays: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub prenom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<AdresseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub mail: String,
    pub num_tel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

/// Supplier. Same shape as [`ClientDto`], served under its own resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FournisseurDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub prenom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<AdresseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub mail: String,
    pub num_tel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilisateurDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mote_de_passe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub date_de_naissance: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<AdresseDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangerMotDePasseUtilisateurDto {
    pub id: i64,
    pub mot_de_passe: String,
    pub confirm_mot_de_passe: String,
}

/// The tenant owning most other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrepriseDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nom: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adresse: Option<AdresseDto>,
    pub code_fiscal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub email: String,
    pub num_tel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_web: Option<String>,
}

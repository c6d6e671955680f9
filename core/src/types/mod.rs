//! Data-transfer objects for the gestiondestock API.
//!
//! # Design
//! Field names on the wire are the server's (camelCase, French); the Rust
//! fields are their snake_case spelling. Optional fields are left out of
//! request bodies when `None` so the server applies its own defaults.
//! None of these types validate anything: they only mirror the JSON.

mod catalog;
mod orders;
mod party;
mod stock;

pub use catalog::{ArticleDto, CategoryDto};
pub use orders::{
    CommandeClientDto, CommandeFournisseurDto, EtatCommande, LigneCommandeClientDto,
    LigneCommandeFournisseurDto, LigneVenteDto, VentesDto,
};
pub use party::{
    AdresseDto, AuthenticationRequest, AuthenticationResponse, ChangerMotDePasseUtilisateurDto,
    ClientDto, EntrepriseDto, FournisseurDto, UtilisateurDto,
};
pub use stock::{MvtStkDto, SourceMvtStk, TypeMvtStk};

/// Binary payload for the photo upload route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

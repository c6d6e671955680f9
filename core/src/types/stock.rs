use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::catalog::ArticleDto;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeMvtStk {
    Entree,
    Sortie,
    CorrectionPos,
    CorrectionNeg,
}

impl TypeMvtStk {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeMvtStk::Entree => "ENTREE",
            TypeMvtStk::Sortie => "SORTIE",
            TypeMvtStk::CorrectionPos => "CORRECTION_POS",
            TypeMvtStk::CorrectionNeg => "CORRECTION_NEG",
        }
    }
}

impl fmt::Display for TypeMvtStk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What caused a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceMvtStk {
    CommandeClient,
    CommandeFournisseur,
    Vente,
}

impl SourceMvtStk {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceMvtStk::CommandeClient => "COMMANDE_CLIENT",
            SourceMvtStk::CommandeFournisseur => "COMMANDE_FOURNISSEUR",
            SourceMvtStk::Vente => "VENTE",
        }
    }
}

impl fmt::Display for SourceMvtStk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stock ledger entry. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MvtStkDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date_mvt: DateTime<Utc>,
    pub quantite: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<ArticleDto>,
    pub type_mvt: TypeMvtStk,
    pub source_mvt: SourceMvtStk,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_enums_match_wire_names() {
        for (ty, wire) in [
            (TypeMvtStk::Entree, "ENTREE"),
            (TypeMvtStk::Sortie, "SORTIE"),
            (TypeMvtStk::CorrectionPos, "CORRECTION_POS"),
            (TypeMvtStk::CorrectionNeg, "CORRECTION_NEG"),
        ] {
            assert_eq!(serde_json::to_value(ty).unwrap(), wire);
            assert_eq!(ty.as_str(), wire);
        }
        assert_eq!(
            serde_json::to_value(SourceMvtStk::CommandeFournisseur).unwrap(),
            "COMMANDE_FOURNISSEUR"
        );
    }

    #[test]
    fn movement_parses_server_payload() {
        let mvt: MvtStkDto = serde_json::from_str(
            r#"{"id":9,"dateMvt":"2024-01-02T08:30:00Z","quantite":12,
                "typeMvt":"SORTIE","sourceMvt":"VENTE","idEntreprise":1}"#,
        )
        .unwrap();
        assert_eq!(mvt.type_mvt, TypeMvtStk::Sortie);
        assert_eq!(mvt.source_mvt, SourceMvtStk::Vente);
        assert_eq!(mvt.quantite, Decimal::from(12));
    }
}

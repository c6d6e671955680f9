use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product sold or bought by the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code_article: String,
    pub designation: String,
    pub prix_unitaire_ht: Decimal,
    pub taux_tva: Decimal,
    pub prix_unitaire_ttc: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub code: String,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_entreprise: Option<i64>,
}

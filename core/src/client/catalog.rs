//! Authentication, articles and categories.

use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::types::{ArticleDto, AuthenticationRequest, CategoryDto};

use super::GestockClient;

impl GestockClient {
    pub fn build_authenticate(&self, input: &AuthenticationRequest) -> Result<HttpRequest, ApiError> {
        self.post_json(&["auth", "authenticate"], input)
    }

    pub fn build_save_article(&self, input: &ArticleDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["articles", "create"], input)
    }

    pub fn build_find_article_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["articles", &id.to_string()])
    }

    pub fn build_find_article_by_code(&self, code: &str) -> HttpRequest {
        self.get(&["articles", "filter", code])
    }

    pub fn build_find_all_articles(&self) -> HttpRequest {
        self.get(&["articles", "all"])
    }

    pub fn build_find_all_articles_by_category(&self, id_category: i64) -> HttpRequest {
        self.get(&["articles", "filter", "category", &id_category.to_string()])
    }

    /// Sale lines that reference the article.
    pub fn build_find_historique_ventes(&self, id_article: i64) -> HttpRequest {
        self.get(&["articles", "historique", "vente", &id_article.to_string()])
    }

    pub fn build_find_historique_commande_client(&self, id_article: i64) -> HttpRequest {
        self.get(&["articles", "historique", "commandeclient", &id_article.to_string()])
    }

    pub fn build_find_historique_commande_fournisseur(&self, id_article: i64) -> HttpRequest {
        self.get(&["articles", "historique", "commandefournisseur", &id_article.to_string()])
    }

    pub fn build_delete_article(&self, id: i64) -> HttpRequest {
        self.delete(&["articles", "delete", &id.to_string()])
    }

    pub fn build_save_category(&self, input: &CategoryDto) -> Result<HttpRequest, ApiError> {
        self.post_json(&["categories", "create"], input)
    }

    pub fn build_find_category_by_id(&self, id: i64) -> HttpRequest {
        self.get(&["categories", &id.to_string()])
    }

    pub fn build_find_category_by_code(&self, code: &str) -> HttpRequest {
        self.get(&["categories", "filter", code])
    }

    pub fn build_find_all_categories(&self) -> HttpRequest {
        self.get(&["categories", "all"])
    }

    pub fn build_delete_category(&self, id: i64) -> HttpRequest {
        self.delete(&["categories", "delete", &id.to_string()])
    }
}

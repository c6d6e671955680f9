//! Stock movements and photo upload.

use crate::error::ApiError;
use crate::http::{FormPart, HttpBody, HttpMethod, HttpRequest};
use crate::types::{MvtStkDto, PhotoUpload, TypeMvtStk};

use super::GestockClient;

impl GestockClient {
    pub fn build_stock_reel_article(&self, id_article: i64) -> HttpRequest {
        self.get(&["mvtstk", "stockreel", &id_article.to_string()])
    }

    pub fn build_mvt_stk_article(&self, id_article: i64) -> HttpRequest {
        self.get(&["mvtstk", "filter", "article", &id_article.to_string()])
    }

    /// Record a movement through the route matching `kind`. The server takes
    /// the movement type from the route, not from the body.
    pub fn build_mouvement_stock(&self, kind: TypeMvtStk, input: &MvtStkDto) -> Result<HttpRequest, ApiError> {
        let route = match kind {
            TypeMvtStk::Entree => "entree",
            TypeMvtStk::Sortie => "sortie",
            TypeMvtStk::CorrectionPos => "correctionpos",
            TypeMvtStk::CorrectionNeg => "correctionneg",
        };
        self.post_json(&["mvtstk", route], input)
    }

    pub fn build_entree_stock(&self, input: &MvtStkDto) -> Result<HttpRequest, ApiError> {
        self.build_mouvement_stock(TypeMvtStk::Entree, input)
    }

    pub fn build_sortie_stock(&self, input: &MvtStkDto) -> Result<HttpRequest, ApiError> {
        self.build_mouvement_stock(TypeMvtStk::Sortie, input)
    }

    pub fn build_correction_stock_pos(&self, input: &MvtStkDto) -> Result<HttpRequest, ApiError> {
        self.build_mouvement_stock(TypeMvtStk::CorrectionPos, input)
    }

    pub fn build_correction_stock_neg(&self, input: &MvtStkDto) -> Result<HttpRequest, ApiError> {
        self.build_mouvement_stock(TypeMvtStk::CorrectionNeg, input)
    }

    /// Multipart upload to `/photos/{context}/{id}/{title}`. The path values
    /// are repeated as form fields next to the binary `photo` part.
    pub fn build_save_photo(&self, context: &str, id: i64, photo: &PhotoUpload, title: &str) -> HttpRequest {
        let id = id.to_string();
        let parts = vec![
            FormPart::File {
                name: "photo".to_string(),
                file_name: photo.file_name.clone(),
                mime_type: photo.mime_type.clone(),
                bytes: photo.bytes.clone(),
            },
            FormPart::Text {
                name: "title".to_string(),
                value: title.to_string(),
            },
            FormPart::Text {
                name: "context".to_string(),
                value: context.to_string(),
            },
            FormPart::Text {
                name: "id".to_string(),
                value: id.clone(),
            },
        ];
        HttpRequest {
            method: HttpMethod::Post,
            url: self.endpoint(&["photos", context, &id, title]),
            headers: Vec::new(),
            body: Some(HttpBody::Multipart(parts)),
        }
    }
}

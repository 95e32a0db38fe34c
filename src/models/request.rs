use serde::{self, Deserialize};

/// Body of `POST /api/generate`. The browser client posts `imageUrl`;
/// `content` is accepted as an alias. Exactly one of the image or text
/// fields is expected alongside `era`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default, alias = "content")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub era: Option<u16>,
}

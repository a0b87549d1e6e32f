use serde::{Deserialize, Serialize};

/// A selectable backend reasoning engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

/// Response body of `GET /models`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub available_models: Vec<ProviderInfo>,
    #[serde(default)]
    pub current: Option<String>,
}

impl ModelCatalog {
    pub fn find(&self, id: &str) -> Option<&ProviderInfo> {
        self.available_models.iter().find(|p| p.id == id)
    }
}

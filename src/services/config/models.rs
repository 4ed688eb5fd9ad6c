use serde::{Deserialize, Serialize};

/// One section of the group (e.g. "Troop") and where its folders live in storage.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionConfig {
    pub tag: String,
    /// Opaque storage root identifier; a path for the local backend.
    #[serde(default)]
    pub root_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileSettings {
    pub database_url: String,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
}

impl Default for ReconcileSettings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://roster.db".into(),
            sections: Vec::new(),
        }
    }
}

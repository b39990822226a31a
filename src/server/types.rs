use serde::Deserialize;

/// Body of both form submissions. A missing field reads as empty.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub components: String,
}

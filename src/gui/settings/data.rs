use serde::{
    Deserialize,
    Serialize,
};

use crate::gemini::DEFAULT_MODEL;

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub api_key: String,
    pub model: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { api_key: String::new(), model: DEFAULT_MODEL.to_string(), dark_mode: true }
    }
}

impl SettingsData {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

// Demo configuration.
// The binary always runs with `DemoConfig::default()`; the TOML loader lets
// library callers swap the observer labels and broadcast text.

use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Labels of the observers registered with the subject, in registration order.
    pub observer_names: Vec<String>,
    pub broadcast_message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            observer_names: vec!["Observer 1".to_string(), "Observer 2".to_string()],
            broadcast_message: "Hello Observers!".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a TOML document. Keys that are absent keep their default value.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}

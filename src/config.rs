use gloo::console::{error, log};
use serde::Deserialize;
use web_sys::window;

/// Id of the optional `<script type="application/json">` block in index.html.
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend origin, e.g. `http://localhost:8000`. Empty = same origin.
    pub api_base: String,
    /// How long the signup banner stays up.
    pub message_timeout_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_timeout_ms: 5000,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads the embedded config block, falling back to defaults.
    pub fn load() -> Self {
        let Some(json) = embedded_config_json() else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(cfg) => {
                log!(format!("Config loaded (api_base = {:?})", cfg.api_base));
                cfg
            }
            Err(e) => {
                error!(format!("Invalid #{CONFIG_ELEMENT_ID} JSON, using defaults: {e}"));
                Self::default()
            }
        }
    }
}

fn embedded_config_json() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin_and_five_seconds() {
        let cfg = Config::default();
        assert_eq!(cfg.api_base, "");
        assert_eq!(cfg.message_timeout_ms, 5000);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = Config::from_json(r#"{"api_base": "http://localhost:8000"}"#).unwrap();
        assert_eq!(cfg.api_base, "http://localhost:8000");
        assert_eq!(cfg.message_timeout_ms, 5000);

        let cfg = Config::from_json(r#"{"message_timeout_ms": 1500}"#).unwrap();
        assert_eq!(cfg, Config { message_timeout_ms: 1500, ..Config::default() });
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(Config::from_json(r#"{"message_timeout_ms": "soon"}"#).is_err());
    }
}

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub headline: String,
    pub theme_storage_key: String,
    pub submit_delay_ms: u32,
    pub confirmation_ms: u32,
    pub compact_breakpoint_px: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Portfolio".to_string(),
            headline: "Developer Dashboard".to_string(),
            theme_storage_key: "theme".to_string(),
            submit_delay_ms: 2000,
            confirmation_ms: 4000,
            compact_breakpoint_px: 1024.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_means_defaults() {
        assert_eq!(SiteConfig::from_json("  \n").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "owner_name": "Shiva", "submit_delay_ms": 500 }"#).unwrap();
        assert_eq!(config.owner_name, "Shiva");
        assert_eq!(config.submit_delay_ms, 500);
        assert_eq!(config.theme_storage_key, "theme");
        assert_eq!(config.confirmation_ms, 4000);
    }

    #[test]
    fn malformed_block_is_an_error() {
        assert!(SiteConfig::from_json("{ owner_name: ").is_err());
        assert!(SiteConfig::from_json(r#"{ "submit_delay_ms": "soon" }"#).is_err());
    }
}

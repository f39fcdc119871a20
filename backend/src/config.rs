//! Settings for the local static host.
//!
//! The host only serves the embedded frontend; nothing here reaches the
//! browser application, which stores its data on the client.

const HOST_VAR: &str = "DOCTRACK_HOST";
const PORT_VAR: &str = "DOCTRACK_PORT";
const NO_BROWSER_VAR: &str = "DOCTRACK_NO_BROWSER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the app once the server is up.
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from `lookup`, keeping the default for every
    /// unset or unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(raw) = lookup(PORT_VAR) {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => log::warn!("Ignoring {}={:?}: {}", PORT_VAR, raw, e),
            }
        }
        if let Some(raw) = lookup(NO_BROWSER_VAR) {
            config.open_browser = matches!(raw.trim(), "" | "0" | "false");
        }

        config
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            (HOST_VAR, "0.0.0.0"),
            (PORT_VAR, "9000"),
            (NO_BROWSER_VAR, "1"),
        ]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert!(!config.open_browser);
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let config = ServerConfig::from_lookup(lookup(&[(PORT_VAR, "http")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_no_browser_false_values() {
        let config = ServerConfig::from_lookup(lookup(&[(NO_BROWSER_VAR, "false")]));
        assert!(config.open_browser);
    }
}

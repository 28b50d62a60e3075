// ============================================================================
// CONFIG - Configuración en tiempo de compilación (.env via build.rs)
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url_development: String,
    pub backend_url_production: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Timeout de red en milisegundos; al expirar se trata como fallo de red normal
    pub network_timeout_ms: u32,
    pub ui_config: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Contenido más largo que esto se colapsa con "Read more"
    pub read_more_threshold: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            read_more_threshold: 280,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url_development: "http://localhost:5000".to_string(),
            backend_url_production: "https://insights.example.org".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_ms: 10_000,
            ui_config: UiConfig::default(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url_development: option_env!("BACKEND_URL_DEVELOPMENT")
                .map(String::from)
                .unwrap_or(defaults.backend_url_development),
            backend_url_production: option_env!("BACKEND_URL_PRODUCTION")
                .map(String::from)
                .unwrap_or(defaults.backend_url_production),
            environment: option_env!("ENVIRONMENT")
                .map(String::from)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            network_timeout_ms: option_env!("NETWORK_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.network_timeout_ms),
            ui_config: UiConfig {
                read_more_threshold: option_env!("READ_MORE_THRESHOLD")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui_config.read_more_threshold),
            },
        }
    }

    /// Obtiene la URL del backend según el entorno actual
    pub fn backend_url(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.backend_url_production,
            _ => &self.backend_url_development,
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_url_is_development() {
        let config = AppConfig::default();
        assert_eq!(config.backend_url(), "http://localhost:5000");
    }

    #[test]
    fn production_environment_selects_production_url() {
        let config = AppConfig {
            environment: "production".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.backend_url(), "https://insights.example.org");
    }

    #[test]
    fn default_timeout_is_ten_seconds() {
        assert_eq!(AppConfig::default().network_timeout_ms, 10_000);
    }
}
